use crate::alphabet::Alphabet;
use crate::linear::LinearScan;
use crate::node::{NodeTable, NO_EDGE, ROOT};
use crate::params::{TrieParams, DEFAULT_MAX_PATTERN_LEN};
use crate::search::TrieWalk;
use crate::{Matcher, Strategy, StringMap, StringMapError};

/// Edge storage driven by [`insert`].
///
/// Implemented by the growable counting trie and by the fixed node table, so
/// that both passes allocate node indices in exactly the same order.
pub(crate) trait EdgeStore {
    fn edge(&self, node: u32, code: usize) -> u32;
    fn set_edge(&mut self, node: u32, code: usize, target: u32);
    /// Allocates the next node and returns its index.
    fn alloc_node(&mut self) -> u32;
}

/// Walks `pattern` from the root, allocating missing nodes, and returns the
/// terminal node index.
pub(crate) fn insert<S: EdgeStore>(store: &mut S, alphabet: &Alphabet, pattern: &[u8]) -> u32 {
    let mut node = ROOT;
    for &byte in pattern {
        let code = alphabet.offset(byte);
        let mut next = store.edge(node, code);
        if next == NO_EDGE {
            next = store.alloc_node();
            store.set_edge(node, code, next);
        }
        node = next;
    }
    node
}

/// Node table being filled by the real insertion pass.
struct FixedTrie<V> {
    table: NodeTable<V>,
    next_free: u32,
}

impl<V> EdgeStore for FixedTrie<V> {
    #[inline]
    fn edge(&self, node: u32, code: usize) -> u32 {
        self.table.edge(node, code)
    }

    #[inline]
    fn set_edge(&mut self, node: u32, code: usize, target: u32) {
        self.table.set_edge(node, code, target);
    }

    fn alloc_node(&mut self) -> u32 {
        let index = self.next_free;
        debug_assert!(
            (index as usize) < self.table.len(),
            "node counter undersized the trie"
        );
        self.next_free += 1;
        index
    }
}

/// Inserts every pattern into a table of exactly `params.node_count()` nodes
/// and stores `values[i]` at the terminal node of `patterns[i]`.
///
/// A terminal node reached twice is a duplicate pattern. Ownership is tracked
/// per node, so duplicates are caught even if a value equals the default.
pub(crate) fn build_trie<K: AsRef<[u8]>, V: Clone>(
    patterns: &[K],
    values: &[V],
    default: &V,
    params: &TrieParams,
) -> Result<NodeTable<V>, StringMapError> {
    let node_count = params.node_count();
    let mut trie = FixedTrie {
        table: NodeTable::new(node_count, params.alphabet_size(), default),
        next_free: ROOT + 1,
    };
    let mut owners: Vec<Option<usize>> = vec![None; node_count];

    for (index, (pattern, value)) in patterns.iter().zip(values).enumerate() {
        let terminal = insert(&mut trie, params.alphabet(), pattern.as_ref());
        let owner = &mut owners[terminal as usize];
        if let Some(first) = *owner {
            return Err(StringMapError::DuplicatePattern { index, first });
        }
        *owner = Some(index);
        trie.table.set_value(terminal, value.clone());
    }

    debug_assert_eq!(
        trie.next_free as usize, node_count,
        "counting and building passes disagree"
    );
    Ok(trie.table)
}

/// Configures how a [`StringMap`] is built.
///
/// ```
/// use lexime_switch::{Strategy, StringMap};
///
/// let map = StringMap::builder()
///     .strategy(Strategy::TrieWalk)
///     .build(&["get", "put"], [1, 2], 0)
///     .unwrap();
/// assert_eq!(map.strategy(), Strategy::TrieWalk);
/// assert_eq!(map.get("put"), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    strategy: Option<Strategy>,
    max_pattern_len: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            strategy: None,
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
        }
    }
}

impl Builder {
    /// Forces a matching strategy instead of [`Strategy::select`].
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sets the longest accepted pattern, in bytes.
    pub fn max_pattern_len(mut self, max_pattern_len: usize) -> Self {
        self.max_pattern_len = max_pattern_len;
        self
    }

    /// Builds a map where `patterns[i]` maps to the i-th item of `values`.
    pub fn build<K, V, I>(
        self,
        patterns: &[K],
        values: I,
        default: V,
    ) -> Result<StringMap<V>, StringMapError>
    where
        K: AsRef<[u8]>,
        V: Clone,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        let result = self.build_inner(patterns, values, default);
        if let Err(err) = &result {
            tracing::debug!(patterns = patterns.len(), error = %err, "string map rejected");
        }
        result
    }

    /// Builds a map from `(pattern, value)` pairs.
    pub fn build_pairs<K, V, I>(self, pairs: I, default: V) -> Result<StringMap<V>, StringMapError>
    where
        K: AsRef<[u8]>,
        V: Clone,
        I: IntoIterator<Item = (K, V)>,
    {
        let (patterns, values): (Vec<K>, Vec<V>) = pairs.into_iter().unzip();
        self.build(&patterns, values, default)
    }

    /// Builds a map where `patterns[i]` maps to `i` and the default is
    /// `patterns.len()`.
    pub fn build_indexed<K: AsRef<[u8]>>(
        self,
        patterns: &[K],
    ) -> Result<StringMap<usize>, StringMapError> {
        self.build(patterns, 0..patterns.len(), patterns.len())
    }

    fn build_inner<K: AsRef<[u8]>, V: Clone>(
        self,
        patterns: &[K],
        values: Vec<V>,
        default: V,
    ) -> Result<StringMap<V>, StringMapError> {
        if patterns.is_empty() {
            return Err(StringMapError::NoPatterns);
        }
        if patterns.len() != values.len() {
            return Err(StringMapError::LengthMismatch {
                patterns: patterns.len(),
                values: values.len(),
            });
        }

        let params = TrieParams::compute(patterns, self.max_pattern_len)?;
        let table = build_trie(patterns, &values, &default, &params)?;

        let strategy = self
            .strategy
            .unwrap_or_else(|| Strategy::select(patterns.len(), params.max_height()));
        let matcher = match strategy {
            Strategy::TrieWalk => Matcher::TrieWalk(TrieWalk::new(table, *params.alphabet())),
            Strategy::LinearScan => Matcher::LinearScan(LinearScan::new(patterns, values)),
        };

        tracing::debug!(
            patterns = patterns.len(),
            nodes = params.node_count(),
            alphabet_size = params.alphabet_size(),
            max_height = params.max_height(),
            ?strategy,
            "string map built"
        );

        Ok(StringMap {
            matcher,
            default,
            params,
            num_patterns: patterns.len(),
        })
    }
}
