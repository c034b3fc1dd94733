use crate::alphabet::Alphabet;
use crate::node::{NodeTable, NO_EDGE, ROOT};

/// Matcher that walks the built trie one byte at a time.
///
/// Cost is proportional to the key length, independent of the number of
/// patterns.
#[derive(Clone, Debug)]
pub(crate) struct TrieWalk<V> {
    nodes: NodeTable<V>,
    alphabet: Alphabet,
}

impl<V> TrieWalk<V> {
    pub(crate) fn new(nodes: NodeTable<V>, alphabet: Alphabet) -> Self {
        Self { nodes, alphabet }
    }

    /// Follows `key` from the root. Returns the node index after consuming
    /// all bytes, or `None` if a byte has no edge.
    #[inline]
    fn traverse(&self, key: &[u8]) -> Option<u32> {
        let mut node = ROOT;
        for &byte in key {
            // Bytes outside the alphabet cannot be on any path.
            let code = self.alphabet.code(byte)?;
            let next = self.nodes.edge(node, code);
            if next == NO_EDGE {
                return None;
            }
            node = next;
        }
        Some(node)
    }

    /// Returns the value slot of the node `key` leads to.
    ///
    /// The slot of a non-terminal node (including the root, for an empty key)
    /// holds the default value. `None` means the walk fell off the trie.
    #[inline]
    pub(crate) fn lookup(&self, key: &[u8]) -> Option<&V> {
        self.traverse(key).map(|node| self.nodes.value(node))
    }

    pub(crate) fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_trie;
    use crate::params::{TrieParams, DEFAULT_MAX_PATTERN_LEN};

    fn walker(keys: &[&[u8]]) -> TrieWalk<i32> {
        let params = TrieParams::compute(keys, DEFAULT_MAX_PATTERN_LEN).unwrap();
        let values: Vec<i32> = (0..keys.len() as i32).collect();
        let nodes = build_trie(keys, &values, &-1, &params).unwrap();
        TrieWalk::new(nodes, *params.alphabet())
    }

    #[test]
    fn lookup_found() {
        let t = walker(&[b"abc", b"abd", b"xyz"]);
        assert_eq!(t.lookup(b"abc"), Some(&0));
        assert_eq!(t.lookup(b"abd"), Some(&1));
        assert_eq!(t.lookup(b"xyz"), Some(&2));
    }

    #[test]
    fn lookup_not_found() {
        let t = walker(&[b"abc", b"abd"]);
        assert_eq!(t.lookup(b"abcd"), None);
        assert_eq!(t.lookup(b"zzz"), None);
        assert_eq!(t.lookup(b"abe"), None);
    }

    #[test]
    fn lookup_prefix_only() {
        // "ab" is a prefix of "abc" but not a key itself
        let t = walker(&[b"abc"]);
        assert_eq!(t.lookup(b"ab"), Some(&-1));
        assert_eq!(t.lookup(b"a"), Some(&-1));
        assert_eq!(t.lookup(b"abc"), Some(&0));
    }

    #[test]
    fn empty_key_reaches_root() {
        let t = walker(&[b"abc"]);
        assert_eq!(t.lookup(b""), Some(&-1));
    }

    #[test]
    fn out_of_alphabet_bytes() {
        let t = walker(&[b"bcd"]);
        assert_eq!(t.lookup(b"a"), None);
        assert_eq!(t.lookup(b"bce"), None);
        assert_eq!(t.lookup(&[b'b', 0xff]), None);
        assert_eq!(t.lookup(&[0]), None);
    }

    #[test]
    fn all_keys_round_trip() {
        let keys: Vec<&[u8]> = vec![b"a", b"ab", b"abc", b"b", b"bc", b"bcd"];
        let t = walker(&keys);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(
                t.lookup(key),
                Some(&(i as i32)),
                "key {:?} should map to {}",
                std::str::from_utf8(key).unwrap(),
                i
            );
        }
    }

    #[test]
    fn embedded_zero_bytes() {
        let t = walker(&[b"a\0b", b"a"]);
        assert_eq!(t.lookup(b"a\0b"), Some(&0));
        assert_eq!(t.lookup(b"a"), Some(&1));
        assert_eq!(t.lookup(b"a\0"), Some(&-1));
    }

    #[test]
    fn num_nodes_counts_root() {
        let t = walker(&[b"ab", b"ac"]);
        assert_eq!(t.num_nodes(), 4);
    }
}
