use std::fmt;

/// Source location of a finding, with 1-indexed line/column and byte
/// offsets within the matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-indexed line number within the file.
    pub line: u32,
    /// 1-indexed column number (in characters, not bytes).
    pub column: u32,
    /// Byte offset of the first character of the match within its line.
    pub byte_start: usize,
    /// Byte offset one past the last character of the match within its line.
    pub byte_end: usize,
}

impl Span {
    /// Creates a span from pre-computed line, column, and byte offsets.
    #[must_use]
    pub const fn new(line: u32, column: u32, byte_start: usize, byte_end: usize) -> Self {
        Self {
            line,
            column,
            byte_start,
            byte_end,
        }
    }

    /// Derives a span from a byte range within a single line of text.
    ///
    /// `line_number` is 1-indexed; the column is computed by counting
    /// characters, not bytes, before `byte_start`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "column counts in source lines fit in u32"
    )]
    #[must_use]
    pub fn in_line(line_number: u32, line: &str, byte_start: usize, byte_end: usize) -> Self {
        let column = line[..byte_start].chars().count() as u32 + 1;
        Self {
            line: line_number,
            column,
            byte_start,
            byte_end,
        }
    }

    /// Returns the byte length of the matched region.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.byte_end - self.byte_start
    }

    /// Returns `true` if the span covers zero bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.byte_start == self.byte_end
    }

    /// Returns `true` if the byte ranges of `self` and `other` intersect.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.byte_start < other.byte_end && other.byte_start < self.byte_end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
