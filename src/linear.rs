/// Matcher that compares the key against each stored literal in order.
///
/// Used for a handful of short patterns, where a few slice comparisons beat
/// walking a trie.
#[derive(Clone, Debug)]
pub(crate) struct LinearScan<V> {
    patterns: Box<[Box<[u8]>]>,
    values: Box<[V]>,
}

impl<V> LinearScan<V> {
    pub(crate) fn new<K: AsRef<[u8]>>(patterns: &[K], values: Vec<V>) -> Self {
        debug_assert_eq!(patterns.len(), values.len());
        Self {
            patterns: patterns
                .iter()
                .map(|p| Box::from(p.as_ref()))
                .collect(),
            values: values.into_boxed_slice(),
        }
    }

    /// Returns the value of the first literal equal to `key`.
    #[inline]
    pub(crate) fn lookup(&self, key: &[u8]) -> Option<&V> {
        self.patterns
            .iter()
            .position(|pattern| **pattern == *key)
            .map(|i| &self.values[i])
    }
}
