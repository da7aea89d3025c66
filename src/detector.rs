//! Detection of triple-quoted docstring blocks in a line sequence.
//!
//! The scan is line based: any line containing the [MARKER] substring opens a
//! block, and the next marker line closes it. The produced [FoldRange] ends
//! on the line before the closing marker line, so the closing marker itself
//! stays visible when the range is folded. Nesting is not supported; a marker
//! inside an open block always closes it.
//!
//! A block whose closing marker is missing extends to the last line of the
//! input.

use crate::range::FoldRange;

/// The substring that opens and closes a docstring block.
pub const MARKER: &str = "\"\"\"";

/// Returns a lazy iterator over the docstring blocks of a line sequence.
///
/// The ranges are yielded in ascending line order and never overlap.
pub fn ranges<I>(lines: I) -> Ranges<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Ranges {
        lines: lines.into_iter(),
        next_index: 0,
    }
}

/// Detects all docstring blocks of a line sequence at once.
///
/// Equivalent to collecting the iterator returned by [ranges].
pub fn detect_ranges<I>(lines: I) -> Vec<FoldRange>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ranges(lines).collect()
}

/// Iterator over the docstring blocks of a line sequence.
///
/// Created with the [ranges] function.
pub struct Ranges<I> {
    lines: I,
    next_index: usize,
}

impl<I> Ranges<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Consumes lines until a marker line is found, returning its index.
    fn next_marker(&mut self) -> Option<usize> {
        loop {
            let line = self.lines.next()?;
            let index = self.next_index;
            self.next_index += 1;

            if line.as_ref().contains(MARKER) {
                return Some(index);
            }
        }
    }
}

impl<I> Iterator for Ranges<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = FoldRange;

    fn next(&mut self) -> Option<FoldRange> {
        let start = self.next_marker()?;

        match self.next_marker() {
            // The closing marker line is excluded from the range.
            Some(close) => Some(FoldRange::new(start, close - 1)),
            // Unterminated block: fold to the last line of the input.
            // next_index is one past the last consumed line here.
            None => Some(FoldRange::new(start, (self.next_index - 1).max(start))),
        }
    }
}
