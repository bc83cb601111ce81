//! Position-tracking byte scanner
//!
//! Cursor over the raw input with 1-based line/column bookkeeping for
//! diagnostics. Uses the memchr crate for fast boundary searches with SIMD
//! acceleration where available.

use memchr::memchr2;

/// Scanner over the input bytes with line/column tracking
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at line 1, column 1
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the current byte position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current line (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Get the current column (1-based, counted in characters)
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at the byte at an offset from the current position
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Consume one byte, updating line/column
    ///
    /// Columns count characters: UTF-8 continuation bytes do not advance
    /// the column.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(&b) = self.input.get(self.pos) {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if b & 0xC0 != 0x80 {
                self.column += 1;
            }
        }
    }

    /// Consume bytes up to (not including) an absolute position
    pub fn bump_to(&mut self, target: usize) {
        while self.pos < target && self.pos < self.input.len() {
            self.bump();
        }
    }

    /// Skip whitespace characters (space, tab, newline, carriage return)
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.bump();
        }
    }

    /// Find the next `<` or `&` (text run boundaries), as an absolute position
    #[inline]
    pub fn find_text_boundary(&self) -> Option<usize> {
        memchr2(b'<', b'&', &self.input[self.pos..]).map(|i| self.pos + i)
    }

    /// Find the next closing quote or `&` inside a quoted value
    #[inline]
    pub fn find_quoted_boundary(&self, quote: u8) -> Option<usize> {
        memchr2(quote, b'&', &self.input[self.pos..]).map(|i| self.pos + i)
    }
}

/// Check if byte can start an XML name
/// Allows ASCII letters, underscore, colon, and non-ASCII (UTF-8 Unicode)
#[inline]
pub fn is_name_start_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

/// Check if byte can continue an XML name
#[inline]
pub fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b':') || b >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_text_boundary() {
        let scanner = Scanner::new(b"hello <world>");
        assert_eq!(scanner.find_text_boundary(), Some(6));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut scanner = Scanner::new(b"ab\ncd");
        scanner.bump();
        scanner.bump();
        assert_eq!((scanner.line(), scanner.column()), (1, 3));
        scanner.bump(); // newline
        assert_eq!((scanner.line(), scanner.column()), (2, 1));
        scanner.bump();
        assert_eq!((scanner.line(), scanner.column()), (2, 2));
    }

    #[test]
    fn test_multibyte_column() {
        // 'é' is two bytes but one column
        let mut scanner = Scanner::new("é!".as_bytes());
        scanner.bump();
        scanner.bump();
        assert_eq!(scanner.column(), 2);
        scanner.bump();
        assert_eq!(scanner.column(), 3);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut scanner = Scanner::new(b"  \t\n hello");
        scanner.skip_whitespace();
        assert_eq!(scanner.position(), 5);
        assert_eq!(scanner.line(), 2);
    }

    #[test]
    fn test_bump_to() {
        let mut scanner = Scanner::new(b"one\ntwo<");
        scanner.bump_to(7);
        assert_eq!(scanner.position(), 7);
        assert_eq!((scanner.line(), scanner.column()), (2, 4));
        assert_eq!(scanner.peek(), Some(b'<'));
    }

    #[test]
    fn test_name_chars() {
        assert!(is_name_start_char(b'a'));
        assert!(is_name_start_char(b'_'));
        assert!(!is_name_start_char(b'1'));
        assert!(is_name_char(b'1'));
        assert!(is_name_char(b'-'));
        assert!(!is_name_char(b'='));
    }
}
