use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::strategy::Strategy as _;

use crate::{Strategy, StringMap};

/// Distinct non-empty patterns over a small alphabet, so that shared
/// prefixes and near misses are common.
fn pattern_set() -> impl proptest::strategy::Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::btree_set(proptest::collection::vec(b'a'..=b'e', 1..8), 1..24)
        .prop_map(|set: BTreeSet<Vec<u8>>| set.into_iter().collect())
}

fn build(patterns: &[Vec<u8>], strategy: Strategy) -> StringMap<usize> {
    StringMap::builder()
        .strategy(strategy)
        .build_indexed(patterns)
        .unwrap()
}

proptest! {
    #[test]
    fn every_pattern_maps_to_its_value(patterns in pattern_set()) {
        let map = StringMap::indexed(&patterns).unwrap();
        for (i, pattern) in patterns.iter().enumerate() {
            prop_assert_eq!(map.get(pattern), i);
        }
    }

    #[test]
    fn non_members_map_to_default(
        patterns in pattern_set(),
        key in proptest::collection::vec(any::<u8>(), 0..10),
    ) {
        let map = StringMap::indexed(&patterns).unwrap();
        let expected = patterns.iter().position(|p| *p == key).unwrap_or(patterns.len());
        prop_assert_eq!(map.get(&key), expected);
    }

    #[test]
    fn strategies_agree(
        patterns in pattern_set(),
        keys in proptest::collection::vec(proptest::collection::vec(b'a'..=b'f', 0..9), 0..32),
    ) {
        let walk = build(&patterns, Strategy::TrieWalk);
        let scan = build(&patterns, Strategy::LinearScan);
        for key in keys.iter().chain(&patterns) {
            prop_assert_eq!(walk.get(key), scan.get(key));
        }
    }

    #[test]
    fn node_count_is_distinct_prefix_count(patterns in pattern_set()) {
        let map = build(&patterns, Strategy::TrieWalk);
        let prefixes: BTreeSet<&[u8]> = patterns
            .iter()
            .flat_map(|p| (1..=p.len()).map(move |n| &p[..n]))
            .collect();
        prop_assert_eq!(map.num_nodes(), prefixes.len() + 1);
        prop_assert_eq!(
            map.params().max_height(),
            patterns.iter().map(Vec::len).max().unwrap_or(0)
        );
    }

    #[test]
    fn any_duplicate_is_rejected(patterns in pattern_set(), pick in any::<prop::sample::Index>()) {
        let mut with_dup = patterns.clone();
        let first = pick.index(patterns.len());
        with_dup.push(patterns[first].clone());
        let err = StringMap::indexed(&with_dup).unwrap_err();
        prop_assert_eq!(
            err,
            crate::StringMapError::DuplicatePattern { index: patterns.len(), first }
        );
    }
}
