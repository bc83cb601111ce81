//! Element data model and serialization
//!
//! The tree the reader produces: named elements owning an ordered attribute
//! list and an ordered list of text/element children, plus the writer that
//! renders a tree back to text.

pub mod element;
pub mod writer;

pub use element::{XmlAttribute, XmlContent, XmlElement};
pub use writer::{WriterStyle, XmlWriter};
