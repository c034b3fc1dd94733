use crate::alphabet::Alphabet;
use crate::build::{insert, EdgeStore};
use crate::node::NO_EDGE;
use crate::StringMapError;

/// Default upper bound on pattern length, in bytes.
pub const DEFAULT_MAX_PATTERN_LEN: usize = 200;

/// Shape of the trie derived from a pattern set before any node storage is
/// allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrieParams {
    alphabet: Alphabet,
    node_count: usize,
    max_height: usize,
}

impl TrieParams {
    /// Runs the alphabet scan and the dry-run insertion pass.
    ///
    /// The dry run uses the same [`insert`] routine as the real build, so
    /// `node_count` is exactly the number of nodes the builder will allocate.
    pub(crate) fn compute<K: AsRef<[u8]>>(
        patterns: &[K],
        max_pattern_len: usize,
    ) -> Result<Self, StringMapError> {
        let alphabet = Alphabet::scan(patterns)?;

        let mut total_len: usize = 0;
        for (index, pattern) in patterns.iter().enumerate() {
            let len = pattern.as_ref().len();
            if len > max_pattern_len {
                return Err(StringMapError::PatternTooLong {
                    index,
                    len,
                    limit: max_pattern_len,
                });
            }
            total_len = total_len.saturating_add(len);
        }

        // Every pattern byte adds at most one node on top of the root.
        let upper_bound = total_len.saturating_add(1);
        if upper_bound > u32::MAX as usize {
            return Err(StringMapError::TooManyNodes { nodes: upper_bound });
        }

        let mut trie = CountingTrie::new(alphabet.size());
        let mut max_height = 0;
        for pattern in patterns {
            let pattern = pattern.as_ref();
            insert(&mut trie, &alphabet, pattern);
            max_height = max_height.max(pattern.len());
        }

        Ok(Self {
            alphabet,
            node_count: trie.len(),
            max_height,
        })
    }

    #[inline]
    pub(crate) fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Smallest byte appearing in any pattern.
    pub fn min_char(&self) -> u8 {
        self.alphabet.min_char()
    }

    /// Largest byte appearing in any pattern.
    pub fn max_char(&self) -> u8 {
        self.alphabet.max_char()
    }

    /// Number of edge slots per node, `max_char - min_char + 1`.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.size()
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length of the longest pattern.
    pub fn max_height(&self) -> usize {
        self.max_height
    }
}

/// Growable edge table used only to size the real one.
///
/// Terminal values are never recorded here.
struct CountingTrie {
    edges: Vec<u32>,
    alphabet_size: usize,
}

impl CountingTrie {
    fn new(alphabet_size: usize) -> Self {
        Self {
            // root
            edges: vec![NO_EDGE; alphabet_size],
            alphabet_size,
        }
    }

    fn len(&self) -> usize {
        self.edges.len() / self.alphabet_size
    }
}

impl EdgeStore for CountingTrie {
    #[inline]
    fn edge(&self, node: u32, code: usize) -> u32 {
        self.edges[node as usize * self.alphabet_size + code]
    }

    #[inline]
    fn set_edge(&mut self, node: u32, code: usize, target: u32) {
        self.edges[node as usize * self.alphabet_size + code] = target;
    }

    fn alloc_node(&mut self) -> u32 {
        let index = self.len() as u32;
        self.edges.resize(self.edges.len() + self.alphabet_size, NO_EDGE);
        index
    }
}
