//! Recursive-descent XML reader
//!
//! Two-pass per parse call: tokenize the whole buffer, then parse the token
//! sequence with single-token lookahead. Rejection never advances the
//! cursor, which is what lets the attribute loop and the content loop try
//! alternative productions.
//!
//! A reader holds per-session state (token sequence, cursor, latest error)
//! and is reset at the start of every call; it is not meant to be shared
//! across threads.

use crate::core::entities::EntityTable;
use crate::core::tokenizer::{Token, TokenKind, Tokenizer};
use crate::dom::{XmlAttribute, XmlElement};
use crate::error::XmlError;
use tracing::debug;

/// Reader session: owns the token sequence and the latest error
pub struct XmlReader {
    tokens: Vec<Token>,
    cursor: usize,
    last_error: Option<String>,
}

impl XmlReader {
    /// Create a reader with no session state
    pub fn new() -> Self {
        XmlReader {
            tokens: Vec::new(),
            cursor: 0,
            last_error: None,
        }
    }

    /// Get the positioned message for the most recent failed parse, or None
    /// if the last call succeeded
    pub fn error_message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Parse one top-level element from UTF-8 text
    ///
    /// Tokenizes the whole buffer first; a tokenization failure
    /// short-circuits before any parsing begins. Tokens remaining after the
    /// root element are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty; that is a caller contract violation, not
    /// a parse error.
    pub fn parse_element(&mut self, data: &str) -> Result<XmlElement, XmlError> {
        assert!(!data.is_empty(), "parse_element requires a non-empty buffer");

        self.tokens.clear();
        self.cursor = 0;
        self.last_error = None;

        // entity table lives exactly as long as this call
        let entities = EntityTable::with_defaults();
        debug!(bytes = data.len(), "tokenizing");
        let mut tokens = match Tokenizer::new(data, &entities).tokenize() {
            Ok(tokens) => tokens,
            Err(e) => {
                let err = XmlError::from(e);
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        tokens.push(Token::new(TokenKind::Eof));
        debug!(tokens = tokens.len(), "parsing token sequence");
        self.tokens = tokens;

        match self.parse_element_imp() {
            Ok(element) => {
                debug!(name = element.name(), "parsed element");
                Ok(element)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The token at the cursor; out-of-range lookahead clamps to the final
    /// Eof token
    fn current(&self) -> &Token {
        let index = self.cursor.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consume the current token if it has the given kind
    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token if it has the given kind, returning its
    /// payload
    fn accept_data(&mut self, kind: TokenKind) -> Option<String> {
        if self.current().kind == kind {
            let data = self.current().data.clone().unwrap_or_default();
            self.cursor += 1;
            Some(data)
        } else {
            None
        }
    }

    fn syntax_error(&self, message: &'static str) -> XmlError {
        XmlError::Syntax {
            message,
            found: self.current().kind,
        }
    }

    /// Parse one element: open tag, attributes, content, matching close tag
    ///
    /// Any failure drops the partially built element on the way out.
    fn parse_element_imp(&mut self) -> Result<XmlElement, XmlError> {
        if !self.accept(TokenKind::StartTag) {
            return Err(self.syntax_error("Expected '<'"));
        }

        let name = self
            .accept_data(TokenKind::Identifier)
            .ok_or_else(|| self.syntax_error("Expected tag name identifier"))?;
        let mut element = XmlElement::new(name.as_str());

        // attribute loop; also decides whether the tag has a body
        let has_body = loop {
            if self.accept(TokenKind::EndTag) {
                break true;
            }
            if self.accept(TokenKind::EndEmptyTag) {
                break false;
            }

            let attr_name = self
                .accept_data(TokenKind::Identifier)
                .ok_or_else(|| self.syntax_error("Expected attribute identifier"))?;
            if !self.accept(TokenKind::Equals) {
                return Err(self.syntax_error("Expected '='"));
            }
            let attr_value = self
                .accept_data(TokenKind::QuotedString)
                .ok_or_else(|| self.syntax_error("Expected quoted attribute value"))?;

            element.add_attribute(XmlAttribute::new(attr_name, attr_value));
        };

        if !has_body {
            return Ok(element);
        }

        // content loop: text and nested elements until `</`
        while !self.accept(TokenKind::StartEndTag) {
            match self.current().kind {
                TokenKind::Text => {
                    if let Some(text) = self.accept_data(TokenKind::Text) {
                        element.add_text(text);
                    }
                }
                TokenKind::StartTag => {
                    let child = self.parse_element_imp()?;
                    element.add_child(child);
                }
                _ => return Err(self.syntax_error("Unexpected token")),
            }
        }

        let close_name = self
            .accept_data(TokenKind::Identifier)
            .ok_or_else(|| self.syntax_error("Unexpected token"))?;
        if close_name != name {
            // the failing token is the close identifier itself
            return Err(XmlError::CloseTagMismatch {
                found: TokenKind::Identifier,
            });
        }
        if !self.accept(TokenKind::EndTag) {
            return Err(self.syntax_error("Unexpected token"));
        }

        Ok(element)
    }
}

impl Default for XmlReader {
    fn default() -> Self {
        XmlReader::new()
    }
}
