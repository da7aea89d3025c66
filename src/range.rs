//! Line ranges describing foldable docstring blocks.

use std::fmt;
use std::ops::Range;

use crate::document::Document;

/// A location in a document expressed as a line and column pair.
/// Both components are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// The line number of the location.
    pub line: usize,
    /// The column number of the location.
    pub column: usize,
}

/// A character-precise span of document text, described by its start and end
/// [Location]s. Produced from a [FoldRange] with [FoldRange::to_span].
pub type TextSpan = Range<Location>;

/// An inclusive range of line indices delimiting a docstring block.
///
/// The range covers the opening marker line and the block body, but not the
/// closing marker line. Line indices are 0-based into the document the range
/// was detected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FoldRange {
    /// Index of the first line of the block.
    pub start: usize,
    /// Index of the last line of the block.
    pub end: usize,
}

impl FoldRange {
    /// Creates a range spanning the lines `start` through `end`, inclusive.
    pub fn new(start: usize, end: usize) -> FoldRange {
        FoldRange { start, end }
    }

    /// Returns the number of lines covered by this range.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns `true` if the given line falls within this range.
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }

    /// Returns `true` if folding this range actually hides lines,
    /// i.e. the range covers more than a single line.
    pub fn is_foldable(&self) -> bool {
        self.end > self.start
    }

    /// Converts this line range into a character-precise [TextSpan] within
    /// `document`. The span runs from the first column of the start line to
    /// the last column of the end line.
    ///
    /// Lines past the end of the document are treated as empty.
    pub fn to_span(&self, document: &Document) -> TextSpan {
        let start = Location {
            line: self.start,
            column: 0,
        };

        let end = Location {
            line: self.end,
            column: document.line_len(self.end).unwrap_or(0),
        };

        start..end
    }
}

impl fmt::Display for FoldRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lines {}-{}", self.start, self.end)
    }
}
