//! Parse error taxonomy
//!
//! Caller contract violations (empty input) are panics, not variants here.

use crate::core::tokenizer::{TokenKind, TokenizeError};
use thiserror::Error;

/// A failed parse: exactly one of these is surfaced per call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// Malformed lexical structure; carries line/column and the offending
    /// character where one applies
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// A required token was absent or of the wrong type at a grammar
    /// position; carries the kind of the token actually found
    #[error("{message} ({found})")]
    Syntax {
        message: &'static str,
        found: TokenKind,
    },

    /// The close-tag name does not equal the open-tag name
    #[error("Close tag does not match open tag ({found})")]
    CloseTagMismatch { found: TokenKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display() {
        let err = XmlError::Syntax {
            message: "Expected '='",
            found: TokenKind::EndTag,
        };
        assert_eq!(err.to_string(), "Expected '=' ('>')");
    }

    #[test]
    fn test_mismatch_display() {
        let err = XmlError::CloseTagMismatch {
            found: TokenKind::Identifier,
        };
        assert_eq!(
            err.to_string(),
            "Close tag does not match open tag (identifier)"
        );
    }

    #[test]
    fn test_tokenize_display_is_transparent() {
        let err = XmlError::Tokenize(TokenizeError {
            message: "Unterminated tag".to_string(),
            found: None,
            line: 2,
            column: 7,
        });
        assert_eq!(err.to_string(), "Unterminated tag (line: 2, column: 7)");
    }
}
