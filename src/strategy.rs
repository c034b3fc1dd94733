/// Largest pattern count for which linear scanning is preferred.
pub const LINEAR_SCAN_MAX_PATTERNS: usize = 4;

/// Longest pattern for which linear scanning is preferred.
pub const LINEAR_SCAN_MAX_HEIGHT: usize = 15;

/// How a [`StringMap`](crate::StringMap) matches its input.
///
/// Both strategies return the same value for every input; the choice only
/// trades memory against lookup cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Walk a trie edge by edge. Cost grows with key length only.
    TrieWalk,
    /// Compare the key against every pattern in order.
    LinearScan,
}

impl Strategy {
    /// Picks [`Strategy::LinearScan`] for at most
    /// [`LINEAR_SCAN_MAX_PATTERNS`] patterns no longer than
    /// [`LINEAR_SCAN_MAX_HEIGHT`] bytes, and [`Strategy::TrieWalk`] otherwise.
    pub fn select(num_patterns: usize, max_height: usize) -> Self {
        if num_patterns <= LINEAR_SCAN_MAX_PATTERNS && max_height <= LINEAR_SCAN_MAX_HEIGHT {
            Strategy::LinearScan
        } else {
            Strategy::TrieWalk
        }
    }
}
