//! Unit and property tests for the quicksort implementation
//!
//! Tests cover ordering, preservation of the element multiset, sub-range
//! sorting and degenerate inputs such as reversed or constant sequences.

use core_kernel::{partition, quicksort, quicksort_range, CoreError, Identified, RecordId};
use proptest::prelude::*;
use test_utils::assert_non_decreasing;

/// Record carrying a tag so reordering of equal identifiers is observable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Tagged {
    id: u64,
    tag: usize,
}

impl Identified for Tagged {
    fn identifier(&self) -> RecordId {
        RecordId::new(self.id)
    }
}

fn tagged(ids: &[u64]) -> Vec<Tagged> {
    ids.iter()
        .enumerate()
        .map(|(tag, &id)| Tagged { id, tag })
        .collect()
}

fn multiset(records: &[Tagged]) -> Vec<Tagged> {
    let mut copy = records.to_vec();
    copy.sort();
    copy
}

mod ordering {
    use super::*;

    #[test]
    fn test_sorts_small_input() {
        let mut records = tagged(&[3, 1, 2]);
        quicksort(&mut records);
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<Tagged> = Vec::new();
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut single = tagged(&[7]);
        quicksort(&mut single);
        assert_eq!(single, tagged(&[7]));
    }

    #[test]
    fn test_duplicates_are_grouped() {
        let mut records = tagged(&[4, 2, 4, 1, 2, 4]);
        quicksort(&mut records);
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_constant_input() {
        let mut records = tagged(&[5; 500]);
        quicksort(&mut records);
        assert_non_decreasing(&records);
        assert_eq!(records.len(), 500);
    }

    #[test]
    fn test_large_descending_input_does_not_overflow_stack() {
        let ids: Vec<u64> = (0..20_000).rev().collect();
        let mut records = tagged(&ids);
        quicksort(&mut records);
        assert_non_decreasing(&records);
        assert_eq!(records.first().map(|r| r.id), Some(0));
        assert_eq!(records.last().map(|r| r.id), Some(19_999));
    }

    #[test]
    fn test_works_through_references() {
        let owned = tagged(&[9, 8, 7]);
        let mut refs: Vec<&Tagged> = owned.iter().collect();
        quicksort(&mut refs);
        assert_eq!(refs.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7, 8, 9]);
    }
}

mod ranges {
    use super::*;

    #[test]
    fn test_range_sort_only_touches_range() {
        let mut records = tagged(&[50, 40, 30, 20, 10, 0]);
        quicksort_range(&mut records, 2, 4).unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![50, 40, 10, 20, 30, 0]);
    }

    #[test]
    fn test_trivial_range_is_ok_even_out_of_bounds() {
        let mut records = tagged(&[2, 1]);
        assert!(quicksort_range(&mut records, 5, 5).is_ok());
        assert!(quicksort_range(&mut records, 1, 0).is_ok());
        assert_eq!(records, tagged(&[2, 1]));
    }

    #[test]
    fn test_high_past_end_is_rejected() {
        let mut records = tagged(&[2, 1, 0]);
        let result = quicksort_range(&mut records, 0, 3);
        assert!(matches!(result, Err(CoreError::InvalidRange { len: 3, .. })));
    }

    #[test]
    fn test_partition_single_element() {
        let mut records = tagged(&[1]);
        assert_eq!(partition(&mut records), 0);
    }
}

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn sorted_output_is_non_decreasing(ids in prop::collection::vec(0u64..1_000, 0..300)) {
            let mut records = tagged(&ids);
            quicksort(&mut records);
            assert_non_decreasing(&records);
        }

        #[test]
        fn sorted_output_is_a_permutation(ids in prop::collection::vec(0u64..50, 0..300)) {
            let original = tagged(&ids);
            let mut records = original.clone();
            quicksort(&mut records);
            prop_assert_eq!(multiset(&records), multiset(&original));
        }

        #[test]
        fn sorting_sorted_input_keeps_order_and_elements(ids in prop::collection::vec(0u64..1_000, 0..300)) {
            let mut records = tagged(&ids);
            quicksort(&mut records);
            let once = records.clone();
            quicksort(&mut records);
            assert_non_decreasing(&records);
            prop_assert_eq!(multiset(&records), multiset(&once));
        }

        #[test]
        fn partition_splits_around_pivot(ids in prop::collection::vec(0u64..100, 1..200)) {
            let mut records = tagged(&ids);
            let pivot_id = records[records.len() - 1].id;
            let index = partition(&mut records);
            prop_assert_eq!(records[index].id, pivot_id);
            prop_assert!(records[..index].iter().all(|r| r.id <= pivot_id));
            prop_assert!(records[index + 1..].iter().all(|r| r.id > pivot_id));
        }
    }
}
