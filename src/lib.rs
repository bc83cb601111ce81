//! minixml - a small XML element parser
//!
//! Converts raw XML text into an in-memory element tree and back:
//! - Tokenizer: character stream -> token sequence, with entity
//!   substitution and line/column diagnostics
//! - Reader: token sequence -> element tree via recursive descent with
//!   single-token lookahead
//! - Element tree: named nodes owning attributes and text/element children
//! - Writer: element tree -> text (compact or indented)
//!
//! The default entities `&lt;` `&gt;` `&quot;` `&apos;` are substituted
//! during tokenization; unknown entities (including `&amp;`) fail the parse.
//!
//! ```
//! use minixml::XmlReader;
//!
//! let mut reader = XmlReader::new();
//! let element = reader.parse_element("<greeting lang=\"en\">hello</greeting>").unwrap();
//! assert_eq!(element.name(), "greeting");
//! assert_eq!(element.attribute_value("lang"), Some("en"));
//! assert_eq!(element.value(), "hello");
//! ```
//!
//! A reader instance holds per-call session state and is not safe for
//! concurrent use; give each thread its own.

mod core;
mod dom;
mod error;
mod reader;

pub use crate::core::tokenizer::{Token, TokenKind, TokenizeError};
pub use crate::dom::{WriterStyle, XmlAttribute, XmlContent, XmlElement, XmlWriter};
pub use crate::error::XmlError;
pub use crate::reader::XmlReader;
