//! Tests for binary search over identifier-sorted records

use core_kernel::{binary_search, binary_search_range, quicksort, Identified, RecordId};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Entry(u64);

impl Identified for Entry {
    fn identifier(&self) -> RecordId {
        RecordId::new(self.0)
    }
}

fn sorted_entries(ids: &[u64]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = ids.iter().copied().map(Entry).collect();
    quicksort(&mut entries);
    entries
}

#[test]
fn test_single_element() {
    let entries = sorted_entries(&[10]);
    assert_eq!(binary_search(RecordId::new(10), &entries), Some(0));
    assert_eq!(binary_search(RecordId::new(11), &entries), None);
}

#[test]
fn test_duplicates_return_some_matching_index() {
    let entries = sorted_entries(&[1, 2, 2, 2, 3]);
    let index = binary_search(RecordId::new(2), &entries).unwrap();
    assert_eq!(entries[index].0, 2);
}

#[test]
fn test_extreme_identifiers() {
    let entries = sorted_entries(&[0, u64::MAX]);
    assert_eq!(binary_search(RecordId::new(0), &entries), Some(0));
    assert_eq!(binary_search(RecordId::new(u64::MAX), &entries), Some(1));
}

#[test]
fn test_range_covering_whole_slice_matches_full_search() {
    let entries = sorted_entries(&[4, 8, 15, 16, 23, 42]);
    for id in [4, 15, 42, 5] {
        assert_eq!(
            binary_search_range(RecordId::new(id), &entries, 0, entries.len() - 1),
            binary_search(RecordId::new(id), &entries)
        );
    }
}

proptest! {
    #[test]
    fn present_keys_are_found(ids in prop::collection::vec(0u64..500, 1..200), pick in any::<prop::sample::Index>()) {
        let entries = sorted_entries(&ids);
        let target = entries[pick.index(entries.len())].0;
        let found = binary_search(RecordId::new(target), &entries);
        prop_assert!(found.is_some());
        prop_assert_eq!(entries[found.unwrap()].0, target);
    }

    #[test]
    fn absent_keys_are_not_found(ids in prop::collection::vec(0u64..500, 0..200), target in 0u64..1_000) {
        prop_assume!(!ids.contains(&target));
        let entries = sorted_entries(&ids);
        prop_assert_eq!(binary_search(RecordId::new(target), &entries), None);
    }
}
