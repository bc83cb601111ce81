//! XML writer
//!
//! Renders an element tree back to text. The compact style emits no
//! whitespace beyond what the tree contains and is what
//! [`XmlElement::value`](super::element::XmlElement::value) uses; the
//! indented style is for human-readable output.

use super::element::{XmlContent, XmlElement};
use crate::core::entities::escape_text;

/// Output style for the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterStyle {
    /// No extra whitespace
    Compact,
    /// One node per line, two-space indentation, trailing newline
    Indented,
}

/// Serializer for element trees
pub struct XmlWriter {
    style: WriterStyle,
}

impl XmlWriter {
    /// Create a writer with the compact style
    pub fn new() -> Self {
        XmlWriter {
            style: WriterStyle::Compact,
        }
    }

    /// Create a writer with the given style
    pub fn with_style(style: WriterStyle) -> Self {
        XmlWriter { style }
    }

    /// Change the output style
    pub fn set_style(&mut self, style: WriterStyle) {
        self.style = style;
    }

    /// Render an element (and its subtree) to a string
    pub fn element_text(&self, element: &XmlElement) -> String {
        let mut out = String::with_capacity(256);
        match self.style {
            WriterStyle::Compact => self.write_compact(element, &mut out),
            WriterStyle::Indented => self.write_indented(element, 0, &mut out),
        }
        out
    }

    fn write_open_tag(&self, element: &XmlElement, out: &mut String) {
        out.push('<');
        out.push_str(element.name());
        for attr in element.attributes() {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&escape_text(&attr.value));
            out.push('"');
        }
    }

    fn write_compact(&self, element: &XmlElement, out: &mut String) {
        self.write_open_tag(element, out);
        if element.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in element.children() {
            match child {
                XmlContent::Text(text) => out.push_str(&escape_text(text)),
                XmlContent::Element(child) => self.write_compact(child, out),
            }
        }
        out.push_str("</");
        out.push_str(element.name());
        out.push('>');
    }

    fn write_indented(&self, element: &XmlElement, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        self.write_open_tag(element, out);
        if element.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        for child in element.children() {
            match child {
                XmlContent::Text(text) => {
                    for _ in 0..depth + 1 {
                        out.push_str("  ");
                    }
                    out.push_str(&escape_text(text));
                    out.push('\n');
                }
                XmlContent::Element(child) => self.write_indented(child, depth + 1, out),
            }
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str("</");
        out.push_str(element.name());
        out.push_str(">\n");
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        XmlWriter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::element::XmlAttribute;

    fn sample() -> XmlElement {
        let mut b = XmlElement::new("b");
        b.add_text("inner");
        let mut a = XmlElement::new("a");
        a.add_attribute(XmlAttribute::new("x", "1"));
        a.add_text("text1");
        a.add_child(b);
        a
    }

    #[test]
    fn test_compact() {
        let writer = XmlWriter::new();
        assert_eq!(
            writer.element_text(&sample()),
            "<a x=\"1\">text1<b>inner</b></a>"
        );
    }

    #[test]
    fn test_compact_self_closing() {
        let writer = XmlWriter::new();
        assert_eq!(writer.element_text(&XmlElement::new("br")), "<br/>");
    }

    #[test]
    fn test_attribute_escaping() {
        let mut element = XmlElement::new("a");
        element.add_attribute(XmlAttribute::new("t", "a<b"));
        let writer = XmlWriter::new();
        assert_eq!(writer.element_text(&element), "<a t=\"a&lt;b\"/>");
    }

    #[test]
    fn test_text_escaping() {
        let mut element = XmlElement::new("a");
        element.add_text("1<2");
        let writer = XmlWriter::new();
        assert_eq!(writer.element_text(&element), "<a>1&lt;2</a>");
    }

    #[test]
    fn test_indented() {
        let writer = XmlWriter::with_style(WriterStyle::Indented);
        assert_eq!(
            writer.element_text(&sample()),
            "<a x=\"1\">\n  text1\n  <b>\n    inner\n  </b>\n</a>\n"
        );
    }
}
