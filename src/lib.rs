//! A byte-wise string switch backed by a compact trie.
//!
//! This crate provides [`StringMap`], which classifies an input byte sequence
//! against a fixed set of patterns and returns the value associated with the
//! matching pattern, or a default value when nothing matches. It is meant for
//! keyword recognizers and protocol dispatchers where a `match` over string
//! literals would otherwise compare the input against every arm.
//!
//! The pattern set is sized in a dry-run pass, then inserted into a node table
//! allocated exactly once. Small sets of short patterns are matched by a
//! linear scan instead; the choice never changes the result.
//!
//! # Quick start
//!
//! ```
//! use lexime_switch::StringMap;
//!
//! let sw = StringMap::indexed(&["abc", "def", "ghij"]).unwrap();
//! assert_eq!(sw.get("def"), 1);
//! assert_eq!(sw.get("xyz"), 3);
//! assert_eq!(*sw.default_value(), 3);
//! ```

#![warn(missing_docs)]

mod alphabet;
mod build;
mod input;
mod linear;
mod macros;
mod node;
mod params;
mod search;
mod strategy;

#[cfg(test)]
mod proptests;

pub use build::Builder;
pub use params::{TrieParams, DEFAULT_MAX_PATTERN_LEN};
pub use strategy::{Strategy, LINEAR_SCAN_MAX_HEIGHT, LINEAR_SCAN_MAX_PATTERNS};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;

    /// Views a pattern literal (`&str`, byte string, ...) as bytes.
    #[inline]
    pub fn as_bytes<K: AsRef<[u8]> + ?Sized>(key: &K) -> &[u8] {
        key.as_ref()
    }
}

use linear::LinearScan;
use search::TrieWalk;

/// Errors that reject a pattern set at construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StringMapError {
    /// No patterns were given.
    #[error("pattern set is empty")]
    NoPatterns,
    /// The value list is not parallel to the pattern list.
    #[error("{patterns} patterns but {values} values")]
    LengthMismatch {
        /// Number of patterns.
        patterns: usize,
        /// Number of values.
        values: usize,
    },
    /// A pattern has no bytes.
    #[error("pattern #{index} is empty")]
    EmptyPattern {
        /// Position of the pattern.
        index: usize,
    },
    /// A pattern exceeds the configured length limit.
    #[error("pattern #{index} is {len} bytes long, the limit is {limit}")]
    PatternTooLong {
        /// Position of the pattern.
        index: usize,
        /// Its length in bytes.
        len: usize,
        /// The configured limit.
        limit: usize,
    },
    /// Two patterns are byte-for-byte identical.
    #[error("pattern #{index} duplicates pattern #{first}")]
    DuplicatePattern {
        /// Position of the later occurrence.
        index: usize,
        /// Position of the first occurrence.
        first: usize,
    },
    /// The trie would not be addressable with 32-bit node indices.
    #[error("trie would need up to {nodes} nodes")]
    TooManyNodes {
        /// Upper bound of the node count.
        nodes: usize,
    },
}

#[derive(Clone, Debug)]
pub(crate) enum Matcher<V> {
    TrieWalk(TrieWalk<V>),
    LinearScan(LinearScan<V>),
}

/// An immutable map from a fixed set of byte patterns to values.
///
/// Every lookup returns a `V` by value: the pattern's value on an exact match,
/// the default value otherwise. Lookups never fail and take `&self`, so a
/// built map can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct StringMap<V> {
    pub(crate) matcher: Matcher<V>,
    pub(crate) default: V,
    pub(crate) params: TrieParams,
    pub(crate) num_patterns: usize,
}

impl<V: Clone> StringMap<V> {
    /// Builds a map where `patterns[i]` maps to the i-th item of `values`.
    ///
    /// # Errors
    ///
    /// Returns a [`StringMapError`] if the pattern list is empty, its length
    /// differs from the number of values, or a pattern is empty, too long, or
    /// a duplicate.
    pub fn new<K, I>(patterns: &[K], values: I, default: V) -> Result<Self, StringMapError>
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = V>,
    {
        Builder::default().build(patterns, values, default)
    }

    /// Builds a map from `(pattern, value)` pairs.
    pub fn from_pairs<K, I>(pairs: I, default: V) -> Result<Self, StringMapError>
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, V)>,
    {
        Builder::default().build_pairs(pairs, default)
    }

    /// Returns the value for `key`.
    #[inline]
    pub fn get(&self, key: impl AsRef<[u8]>) -> V {
        self.lookup(key.as_ref()).clone()
    }

    /// Returns the value for `key`, or the default for `None`.
    #[inline]
    pub fn get_opt(&self, key: Option<&[u8]>) -> V {
        match key {
            Some(key) => self.get(key),
            None => self.default.clone(),
        }
    }
}

impl StringMap<usize> {
    /// Builds a map where `patterns[i]` maps to `i`. The default value is
    /// `patterns.len()`.
    pub fn indexed<K: AsRef<[u8]>>(patterns: &[K]) -> Result<Self, StringMapError> {
        Builder::default().build_indexed(patterns)
    }
}

impl StringMap<()> {
    /// Returns a [`Builder`] for configuring construction.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<V> StringMap<V> {
    /// Returns a reference to the value for `key`.
    #[inline]
    pub fn lookup(&self, key: &[u8]) -> &V {
        let found = match &self.matcher {
            Matcher::TrieWalk(trie) => trie.lookup(key),
            Matcher::LinearScan(scan) => scan.lookup(key),
        };
        found.unwrap_or(&self.default)
    }

    /// The value returned for unmatched input.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Shape of the pattern set.
    pub fn params(&self) -> &TrieParams {
        &self.params
    }

    /// The matcher in use.
    pub fn strategy(&self) -> Strategy {
        match self.matcher {
            Matcher::TrieWalk(_) => Strategy::TrieWalk,
            Matcher::LinearScan(_) => Strategy::LinearScan,
        }
    }

    /// Number of patterns.
    pub fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    /// Number of trie nodes, including the root.
    ///
    /// Reported for either strategy; a linear-scan map keeps no nodes.
    pub fn num_nodes(&self) -> usize {
        match &self.matcher {
            Matcher::TrieWalk(trie) => trie.num_nodes(),
            Matcher::LinearScan(_) => self.params.node_count(),
        }
    }

    /// Smallest byte appearing in any pattern.
    pub fn min_char(&self) -> u8 {
        self.params.min_char()
    }

    /// Largest byte appearing in any pattern.
    pub fn max_char(&self) -> u8 {
        self.params.max_char()
    }
}
