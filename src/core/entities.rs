//! XML entity table and text escaping
//!
//! The entity table is session-scoped: the reader builds one at the start of
//! each parse call and drops it at the end, so no entity state survives
//! across calls. Only the default entities are loaded:
//! `&lt;` `&gt;` `&quot;` `&apos;`
//!
//! `&amp;` is deliberately absent; an unrecognized entity is a tokenizer
//! failure, not a pass-through.

use std::borrow::Cow;
use std::collections::HashMap;

/// Mapping from entity name to replacement text, valid for one parse session
pub struct EntityTable {
    entries: HashMap<&'static str, &'static str>,
}

impl EntityTable {
    /// Create a table holding the default entities
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert("lt", "<");
        entries.insert("gt", ">");
        entries.insert("quot", "\"");
        entries.insert("apos", "'");
        EntityTable { entries }
    }

    /// Look up the replacement for an entity name (without `&` and `;`)
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }
}

/// Escape text for XML output
///
/// Returns Borrowed if no escaping is needed (zero-copy).
pub fn escape_text(input: &str) -> Cow<'_, str> {
    // Fast path: check if any escaping needed
    if !input
        .bytes()
        .any(|b| matches!(b, b'<' | b'>' | b'&' | b'"' | b'\''))
    {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
