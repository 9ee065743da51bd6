// src/scan.rs
use memchr::{memchr, memchr2};

/// A scanning cursor: an immutable view of one object body plus a mutable
/// byte offset.
///
/// All scan targets are ASCII delimiters, so every position the cursor
/// stops at is a valid UTF-8 boundary and [`Cursor::slice`] stays safe for
/// multi-byte content in between.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// The byte at the current position, if any.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    /// Moves forward by `n` bytes, clamped to the end of the view.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = usize::min(self.pos + n, self.text.len());
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Moves to the next occurrence of `needle` at or after the current
    /// position and returns its index, or `None` when the view ends first.
    pub(crate) fn scan_to(&mut self, needle: u8) -> Option<usize> {
        let found = memchr(needle, &self.bytes()[self.pos..])? + self.pos;
        self.pos = found;
        Some(found)
    }

    /// Like [`Cursor::scan_to`], but stops at whichever of `a` or `b`
    /// comes first.
    pub(crate) fn scan_to_either(&mut self, a: u8, b: u8) -> Option<usize> {
        let found = memchr2(a, b, &self.bytes()[self.pos..])? + self.pos;
        self.pos = found;
        Some(found)
    }

    /// Scans past a brace-delimited object starting at the current
    /// position and returns the index one past its closing brace.
    ///
    /// Depth is seeded at zero, incremented on every `{` and decremented
    /// on every `}`; the scan stops at the first point depth returns to
    /// exactly zero. The caller must position the cursor on an opening
    /// brace. Returns `None` when depth never returns to zero, leaving the
    /// cursor untouched.
    pub(crate) fn scan_balanced(&mut self) -> Option<usize> {
        let mut depth = 0usize;
        for (index, &byte) in self.bytes().iter().enumerate().skip(self.pos) {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.pos = index + 1;
                        return Some(index + 1);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Borrows a subrange of the underlying view.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut cur = Cursor::new(" \n\t  x");
        cur.skip_whitespace();
        assert_eq!(cur.peek(), Some(b'x'));

        let mut all_blank = Cursor::new("   ");
        all_blank.skip_whitespace();
        assert_eq!(all_blank.peek(), None);
    }

    #[test]
    fn test_scan_to_finds_and_positions() {
        let mut cur = Cursor::new("abc:def");
        assert_eq!(cur.scan_to(b':'), Some(3));
        assert_eq!(cur.peek(), Some(b':'));
        assert_eq!(cur.scan_to(b'?'), None);
        // A failed scan leaves the position untouched.
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn test_scan_to_either_stops_at_first() {
        let mut cur = Cursor::new("  {\"x\"");
        assert_eq!(cur.scan_to_either(b'"', b'{'), Some(2));
        assert_eq!(cur.peek(), Some(b'{'));
    }

    #[test]
    fn test_scan_balanced_flat_and_nested() {
        let mut cur = Cursor::new("{\"a\":\"b\"} tail");
        assert_eq!(cur.scan_balanced(), Some(9));

        let nested = "{\"a\":{\"b\":{}}},";
        let mut cur = Cursor::new(nested);
        assert_eq!(cur.scan_balanced(), Some(nested.len() - 1));
        assert_eq!(cur.peek(), Some(b','));
    }

    #[test]
    fn test_scan_balanced_unbalanced_is_none() {
        let mut cur = Cursor::new("{\"a\":{\"b\":\"c\"}");
        assert_eq!(cur.scan_balanced(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut cur = Cursor::new("ab");
        cur.advance(10);
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn test_slice_handles_multibyte_content() {
        let text = "\"grüße\"";
        let mut cur = Cursor::new(text);
        cur.advance(1);
        let start = cur.pos();
        let end = cur.scan_to(b'"').unwrap();
        assert_eq!(cur.slice(start, end), "grüße");
    }
}
