//! XML tokenizer
//!
//! Single-pass tokenizer turning the raw character buffer into an ordered
//! token sequence, with entity substitution applied inside text runs and
//! quoted attribute values. Failures carry a message plus the 1-based
//! line/column at the failure point, and the offending character where one
//! applies.
//!
//! Two modes drive the state machine:
//! - text mode (between tags): everything up to the next `<` accumulates
//!   into a single Text token, so adjacent text is never split
//! - tag mode (after `<` or `</`): whitespace separates tokens; identifiers,
//!   `=`, quoted strings and the closing delimiters are emitted

use super::entities::EntityTable;
use super::scanner::{is_name_char, is_name_start_char, Scanner};
use std::fmt;

/// Type of XML token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Tag open: `<`
    StartTag,
    /// Tag close: `>`
    EndTag,
    /// Self-closing tag end: `/>`
    EndEmptyTag,
    /// Close tag open: `</`
    StartEndTag,
    /// Attribute assignment: `=`
    Equals,
    /// Tag or attribute name
    Identifier,
    /// Quoted attribute value (entities decoded)
    QuotedString,
    /// Text content between tags (entities decoded)
    Text,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::StartTag => "'<'",
            TokenKind::EndTag => "'>'",
            TokenKind::EndEmptyTag => "'/>'",
            TokenKind::StartEndTag => "'</'",
            TokenKind::Equals => "'='",
            TokenKind::Identifier => "identifier",
            TokenKind::QuotedString => "quoted string",
            TokenKind::Text => "text",
            TokenKind::Eof => "end of file",
        };
        f.write_str(name)
    }
}

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Payload for Identifier, QuotedString and Text; None otherwise
    pub data: Option<String>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind) -> Self {
        Token { kind, data: None }
    }

    #[inline]
    pub fn with_data(kind: TokenKind, data: String) -> Self {
        Token {
            kind,
            data: Some(data),
        }
    }
}

/// Tokenization failure with position context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    /// Human-readable description (offending character interpolated)
    pub message: String,
    /// The offending character, when the failure is character-level
    pub found: Option<char>,
    /// Line of the failure (1-based)
    pub line: u32,
    /// Column of the failure (1-based, counted in characters)
    pub column: u32,
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(c) => write!(
                f,
                "{} [{:02x}] (line: {}, column: {})",
                self.message, c as u32, self.line, self.column
            ),
            None => write!(
                f,
                "{} (line: {}, column: {})",
                self.message, self.line, self.column
            ),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// XML tokenizer over a UTF-8 buffer
pub struct Tokenizer<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    entities: &'a EntityTable,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for the given input and entity table
    pub fn new(input: &'a str, entities: &'a EntityTable) -> Self {
        Tokenizer {
            input,
            scanner: Scanner::new(input.as_bytes()),
            entities,
        }
    }

    /// Consume the input and produce the full token sequence
    ///
    /// The sequence carries no trailing Eof token; the reader appends one.
    pub fn tokenize(mut self) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();

        while !self.scanner.is_eof() {
            if self.scanner.peek() == Some(b'<') {
                self.scanner.bump();
                if self.scanner.peek() == Some(b'/') {
                    self.scanner.bump();
                    tokens.push(Token::new(TokenKind::StartEndTag));
                } else {
                    tokens.push(Token::new(TokenKind::StartTag));
                }
                self.tokenize_tag(&mut tokens)?;
            } else {
                self.tokenize_text(&mut tokens)?;
            }
        }

        Ok(tokens)
    }

    /// Accumulate one Text token: everything up to the next `<` or end of
    /// input, with entity references substituted
    fn tokenize_text(&mut self, tokens: &mut Vec<Token>) -> Result<(), TokenizeError> {
        let mut text = String::new();

        loop {
            match self.scanner.peek() {
                None | Some(b'<') => break,
                Some(b'&') => {
                    text.push_str(self.entity_reference()?);
                }
                Some(_) => {
                    let start = self.scanner.position();
                    let end = self
                        .scanner
                        .find_text_boundary()
                        .unwrap_or(self.input.len());
                    self.scanner.bump_to(end);
                    text.push_str(&self.input[start..end]);
                }
            }
        }

        if !text.is_empty() {
            tokens.push(Token::with_data(TokenKind::Text, text));
        }
        Ok(())
    }

    /// Tokenize the inside of a tag until `>` or `/>` is emitted
    fn tokenize_tag(&mut self, tokens: &mut Vec<Token>) -> Result<(), TokenizeError> {
        loop {
            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                None => {
                    return Err(TokenizeError {
                        message: "Unterminated tag".to_string(),
                        found: None,
                        line: self.scanner.line(),
                        column: self.scanner.column(),
                    });
                }
                Some(b'>') => {
                    self.scanner.bump();
                    tokens.push(Token::new(TokenKind::EndTag));
                    return Ok(());
                }
                Some(b'/') => {
                    if self.scanner.peek_at(1) == Some(b'>') {
                        self.scanner.bump();
                        self.scanner.bump();
                        tokens.push(Token::new(TokenKind::EndEmptyTag));
                        return Ok(());
                    }
                    return Err(self.unexpected_character(""));
                }
                Some(b'=') => {
                    self.scanner.bump();
                    tokens.push(Token::new(TokenKind::Equals));
                }
                Some(q @ (b'"' | b'\'')) => {
                    let value = self.quoted_string(q)?;
                    tokens.push(Token::with_data(TokenKind::QuotedString, value));
                }
                Some(b) if is_name_start_char(b) => {
                    let name = self.identifier();
                    tokens.push(Token::with_data(TokenKind::Identifier, name));
                }
                Some(_) => return Err(self.unexpected_character("")),
            }
        }
    }

    /// Read an identifier starting at the current position
    fn identifier(&mut self) -> String {
        let start = self.scanner.position();
        while let Some(b) = self.scanner.peek() {
            if !is_name_char(b) {
                break;
            }
            self.scanner.bump();
        }
        self.input[start..self.scanner.position()].to_owned()
    }

    /// Read a quoted attribute value, substituting entity references
    fn quoted_string(&mut self, quote: u8) -> Result<String, TokenizeError> {
        let line = self.scanner.line();
        let column = self.scanner.column();
        self.scanner.bump(); // opening quote

        let mut value = String::new();
        loop {
            match self.scanner.peek() {
                None => {
                    return Err(TokenizeError {
                        message: "Unterminated quoted string".to_string(),
                        found: None,
                        line,
                        column,
                    });
                }
                Some(b) if b == quote => {
                    self.scanner.bump();
                    return Ok(value);
                }
                Some(b'&') => {
                    value.push_str(self.entity_reference()?);
                }
                Some(_) => {
                    let start = self.scanner.position();
                    let end = self
                        .scanner
                        .find_quoted_boundary(quote)
                        .unwrap_or(self.input.len());
                    self.scanner.bump_to(end);
                    value.push_str(&self.input[start..end]);
                }
            }
        }
    }

    /// Resolve one `&name;` reference against the entity table
    ///
    /// Positions in errors point at the `&` that opened the reference.
    fn entity_reference(&mut self) -> Result<&'static str, TokenizeError> {
        let line = self.scanner.line();
        let column = self.scanner.column();
        self.scanner.bump(); // '&'

        let start = self.scanner.position();
        loop {
            match self.scanner.peek() {
                Some(b';') => break,
                Some(b) if is_name_char(b) => self.scanner.bump(),
                Some(_) => return Err(self.unexpected_character(" in entity reference")),
                None => {
                    return Err(TokenizeError {
                        message: "Unterminated entity reference".to_string(),
                        found: None,
                        line,
                        column,
                    });
                }
            }
        }

        let name = &self.input[start..self.scanner.position()];
        self.scanner.bump(); // ';'

        self.entities.get(name).ok_or_else(|| TokenizeError {
            message: format!("Unknown entity '{name}'"),
            found: None,
            line,
            column,
        })
    }

    /// Build a character-level error at the current position
    fn unexpected_character(&self, context: &str) -> TokenizeError {
        let c = self.input[self.scanner.position()..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}');
        TokenizeError {
            message: format!("Unexpected character '{c}'{context}"),
            found: Some(c),
            line: self.scanner.line(),
            column: self.scanner.column(),
        }
    }
}
