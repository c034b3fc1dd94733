/// Index of the root node. Never the target of an edge.
pub(crate) const ROOT: u32 = 0;

/// Edge value meaning "no child". Shares its value with [`ROOT`], which is
/// why the root can never be reached through an edge.
pub(crate) const NO_EDGE: u32 = 0;

/// Fixed-capacity node arena of a built trie.
///
/// Row `n` of `edges` holds the `alphabet_size` outgoing edges of node `n`;
/// `values[n]` is the node's value slot, which holds the default value unless
/// a pattern ends at `n`.
#[derive(Clone, Debug)]
pub(crate) struct NodeTable<V> {
    edges: Box<[u32]>,
    values: Box<[V]>,
    alphabet_size: usize,
}

impl<V: Clone> NodeTable<V> {
    /// Allocates `node_count` empty nodes whose value slots hold `default`.
    pub(crate) fn new(node_count: usize, alphabet_size: usize, default: &V) -> Self {
        debug_assert!(node_count > 0, "the root node is always present");
        Self {
            edges: vec![NO_EDGE; node_count * alphabet_size].into_boxed_slice(),
            values: vec![default.clone(); node_count].into_boxed_slice(),
            alphabet_size,
        }
    }
}

impl<V> NodeTable<V> {
    /// Number of nodes, including the root.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the child of `node` along `code`, or [`NO_EDGE`].
    #[inline]
    pub(crate) fn edge(&self, node: u32, code: usize) -> u32 {
        debug_assert!(code < self.alphabet_size, "edge code {code} out of range");
        self.edges[node as usize * self.alphabet_size + code]
    }

    #[inline]
    pub(crate) fn set_edge(&mut self, node: u32, code: usize, target: u32) {
        debug_assert!(target != NO_EDGE, "the root cannot be an edge target");
        self.edges[node as usize * self.alphabet_size + code] = target;
    }

    #[inline]
    pub(crate) fn value(&self, node: u32) -> &V {
        &self.values[node as usize]
    }

    #[inline]
    pub(crate) fn set_value(&mut self, node: u32, value: V) {
        self.values[node as usize] = value;
    }
}
