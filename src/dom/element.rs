//! XML element tree
//!
//! Strictly-owning representation: an element owns its attributes and
//! children, and dropping it reclaims the whole subtree. Children are a sum
//! type of text runs and nested elements so every consumer handles both
//! exhaustively.

use super::writer::{WriterStyle, XmlWriter};

/// A child of an element: either a raw text run or a nested element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    /// Raw text (entities already decoded by the tokenizer)
    Text(String),
    /// Nested child element
    Element(XmlElement),
}

/// A name/value attribute pair, owned by its element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

impl XmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        XmlAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named element holding an ordered attribute list and an ordered child
/// list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlContent>,
}

impl XmlElement {
    /// Create an empty element with the given name
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get the element name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the element name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the attribute list in document order
    #[inline]
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Get the child list in document order
    #[inline]
    pub fn children(&self) -> &[XmlContent] {
        &self.children
    }

    /// Check whether the element has no children
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up an attribute by name; duplicates permitted, first match wins
    pub fn attribute(&self, name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Look up an attribute value by name
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(|a| a.value.as_str())
    }

    /// Find the first element child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|c| match c {
            XmlContent::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    /// Flatten the children into a single string
    ///
    /// Text children are appended verbatim; element children are rendered
    /// through the compact writer. Read-only; handles arbitrarily deep
    /// nesting by recursive rendering.
    pub fn value(&self) -> String {
        let writer = XmlWriter::with_style(WriterStyle::Compact);
        let mut out = String::new();
        for child in &self.children {
            match child {
                XmlContent::Text(text) => out.push_str(text),
                XmlContent::Element(element) => out.push_str(&writer.element_text(element)),
            }
        }
        out
    }

    /// Replace all children with a single text run
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.children.clear();
        self.children.push(XmlContent::Text(value.into()));
    }

    /// Append an attribute
    pub fn add_attribute(&mut self, attribute: XmlAttribute) {
        self.attributes.push(attribute);
    }

    /// Append an element child
    pub fn add_child(&mut self, child: XmlElement) {
        self.children.push(XmlContent::Element(child));
    }

    /// Append a text child
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlContent::Text(text.into()));
    }

    /// Remove all attributes
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Remove all children
    pub fn clear_children(&mut self) {
        self.children.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_empty() {
        let element = XmlElement::new("root");
        assert_eq!(element.name(), "root");
        assert!(element.is_empty());
        assert!(element.attributes().is_empty());
    }

    #[test]
    fn test_attribute_first_match_wins() {
        let mut element = XmlElement::new("a");
        element.add_attribute(XmlAttribute::new("x", "1"));
        element.add_attribute(XmlAttribute::new("x", "2"));
        assert_eq!(element.attribute_value("x"), Some("1"));
        assert_eq!(element.attributes().len(), 2);
    }

    #[test]
    fn test_attribute_missing() {
        let element = XmlElement::new("a");
        assert!(element.attribute("x").is_none());
    }

    #[test]
    fn test_child_lookup() {
        let mut parent = XmlElement::new("parent");
        parent.add_text("before");
        parent.add_child(XmlElement::new("first"));
        parent.add_child(XmlElement::new("second"));
        assert_eq!(parent.child("second").map(|c| c.name()), Some("second"));
        assert!(parent.child("third").is_none());
    }

    #[test]
    fn test_value_flattening() {
        let mut b = XmlElement::new("b");
        b.add_text("inner");
        let mut a = XmlElement::new("a");
        a.add_text("text1");
        a.add_child(b);
        a.add_text("text2");
        assert_eq!(a.value(), "text1<b>inner</b>text2");
    }

    #[test]
    fn test_set_value_replaces_children() {
        let mut element = XmlElement::new("a");
        element.add_child(XmlElement::new("b"));
        element.set_value("plain");
        assert_eq!(element.children(), &[XmlContent::Text("plain".to_string())]);
    }

    #[test]
    fn test_clear_children_keeps_attributes() {
        let mut element = XmlElement::new("a");
        element.add_attribute(XmlAttribute::new("x", "1"));
        element.add_text("t");
        element.clear_children();
        assert!(element.is_empty());
        assert_eq!(element.attributes().len(), 1);
    }
}
