//! Source location model.
//!
//! `Span` stores *both* line and byte ranges to support robust slicing and
//! diagnostics. Lines are 1-based (as commonly reported to users), while
//! bytes are 0-based offsets into the original text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start line (1-based).
    pub start_line: usize,
    /// Inclusive end line (1-based).
    pub end_line: usize,
    /// Inclusive start byte (0-based).
    pub start_byte: usize,
    /// Exclusive end byte (0-based).
    pub end_byte: usize,
}

impl Span {
    /// Build a span from line and byte ranges.
    pub fn new(start_line: usize, end_line: usize, start_byte: usize, end_byte: usize) -> Self {
        Self {
            start_line,
            end_line,
            start_byte,
            end_byte,
        }
    }

    /// Lines spanned (1-based inclusive).
    pub fn line_count(&self) -> usize {
        if self.end_line >= self.start_line {
            self.end_line - self.start_line + 1
        } else {
            0
        }
    }

    /// Bytes spanned.
    pub fn byte_len(&self) -> usize {
        if self.end_byte >= self.start_byte {
            self.end_byte - self.start_byte
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let s = Span::new(3, 5, 10, 42);
        assert_eq!(s.line_count(), 3);
        assert_eq!(s.byte_len(), 32);
    }

    #[test]
    fn degenerate_span() {
        let s = Span::new(5, 3, 42, 10);
        assert_eq!(s.line_count(), 0);
        assert_eq!(s.byte_len(), 0);
    }
}
