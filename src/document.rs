//! Snapshots of host editor documents.
//!
//! The host editor owns the actual text buffers. This crate only ever sees a
//! [Document]: an identity key plus the buffer's content split into lines.

use crate::detector;
use crate::range::FoldRange;

/// A snapshot of a host editor document.
///
/// The key identifies the document across snapshots (hosts typically use the
/// document URI) and is what the
/// [RangeCache](crate::cache::RangeCache) is keyed by.
#[derive(Debug, Clone)]
pub struct Document {
    key: String,
    lines: Vec<String>,
}

impl Document {
    /// Creates a snapshot from the full document text.
    ///
    /// The text is split on line breaks; a trailing `\r` on a line is not
    /// considered part of its content.
    pub fn new<K>(key: K, text: &str) -> Document
    where
        K: Into<String>,
    {
        Document {
            key: key.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Creates a snapshot from an already split line sequence.
    pub fn from_lines<K, I, S>(key: K, lines: I) -> Document
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            key: key.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the identity key of the document.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the content of the line at `index`, or `None` if the document
    /// has no such line.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the length of the line at `index` in characters, or `None` if
    /// the document has no such line.
    pub fn line_len(&self, index: usize) -> Option<usize> {
        self.lines.get(index).map(|line| line.chars().count())
    }

    /// Returns an iterator over the lines of the document.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Detects the docstring blocks of this document.
    ///
    /// This is an uncached convenience around
    /// [detect_ranges](crate::detector::detect_ranges); hosts that want
    /// caching should go through a
    /// [FoldingProvider](crate::provider::FoldingProvider) instead.
    pub fn fold_ranges(&self) -> Vec<FoldRange> {
        detector::detect_ranges(self.lines())
    }
}
