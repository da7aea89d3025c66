//! Per-document caching of detected fold ranges.

use std::collections::HashMap;
use std::iter::FromIterator;

use crate::range::FoldRange;

/// Cache of detected fold ranges, keyed by document identity.
///
/// The key is whatever the host uses to identify a document across snapshots
/// (see [Document::key](crate::document::Document::key)). The cache holds
/// whole detection results; a document is either fully cached or absent.
#[derive(Debug, Clone, Default)]
pub struct RangeCache {
    inner: HashMap<String, Vec<FoldRange>>,
}

impl<K> FromIterator<(K, Vec<FoldRange>)> for RangeCache
where
    K: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<FoldRange>)>,
    {
        RangeCache {
            inner: iter.into_iter().map(|(key, ranges)| (key.into(), ranges)).collect(),
        }
    }
}

impl RangeCache {
    /// Creates an empty cache.
    pub fn new() -> RangeCache {
        RangeCache::default()
    }

    /// Returns the cached ranges for the given document key, if any.
    pub fn get(&self, key: &str) -> Option<&[FoldRange]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Stores the detection result for the given document key, replacing any
    /// previous entry.
    pub fn insert<K>(&mut self, key: K, ranges: Vec<FoldRange>)
    where
        K: Into<String>,
    {
        self.inner.insert(key.into(), ranges);
    }

    /// Removes the entry for the given document key, returning the ranges it
    /// held.
    pub fn invalidate(&mut self, key: &str) -> Option<Vec<FoldRange>> {
        self.inner.remove(key)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the number of cached documents.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no documents are cached.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
