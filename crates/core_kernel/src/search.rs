//! Binary search over records sorted by identifier

use std::cmp::Ordering;

use crate::identifiers::{Identified, RecordId};

/// Finds a record with the given identifier in a slice sorted ascending
///
/// Returns `None` when no record matches. When several records share the
/// identifier, which of them is returned is unspecified.
pub fn binary_search<T: Identified>(target: RecordId, records: &[T]) -> Option<usize> {
    let high = records.len().checked_sub(1)?;
    binary_search_range(target, records, 0, high)
}

/// Finds a record with the given identifier within `records[low..=high]`
///
/// The returned index is relative to the whole slice. An empty range
/// (`low > high`) or a range reaching past the end of the slice yields `None`.
pub fn binary_search_range<T: Identified>(
    target: RecordId,
    records: &[T],
    low: usize,
    high: usize,
) -> Option<usize> {
    if low > high {
        return None;
    }
    let window = records.get(low..=high)?;

    let mut start = 0;
    let mut end = window.len();
    while start < end {
        let middle = start + (end - start) / 2;
        match window[middle].identifier().cmp(&target) {
            Ordering::Equal => return Some(low + middle),
            Ordering::Less => start = middle + 1,
            Ordering::Greater => end = middle,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(u64);

    impl Identified for Row {
        fn identifier(&self) -> RecordId {
            RecordId::new(self.0)
        }
    }

    fn rows(ids: &[u64]) -> Vec<Row> {
        ids.iter().copied().map(Row).collect()
    }

    #[test]
    fn test_finds_every_present_key() {
        let sorted = rows(&[1, 3, 5, 7, 9, 11]);
        for (index, row) in sorted.iter().enumerate() {
            assert_eq!(binary_search(RecordId::new(row.0), &sorted), Some(index));
        }
    }

    #[test]
    fn test_absent_keys() {
        let sorted = rows(&[1, 3, 5]);
        assert_eq!(binary_search(RecordId::new(0), &sorted), None);
        assert_eq!(binary_search(RecordId::new(4), &sorted), None);
        assert_eq!(binary_search(RecordId::new(6), &sorted), None);
    }

    #[test]
    fn test_empty_slice() {
        let sorted: Vec<Row> = Vec::new();
        assert_eq!(binary_search(RecordId::new(1), &sorted), None);
    }

    #[test]
    fn test_range_offsets_are_absolute() {
        let sorted = rows(&[1, 2, 3, 4, 5]);
        assert_eq!(binary_search_range(RecordId::new(4), &sorted, 2, 4), Some(3));
        assert_eq!(binary_search_range(RecordId::new(1), &sorted, 2, 4), None);
    }

    #[test]
    fn test_inverted_or_oversized_range() {
        let sorted = rows(&[1, 2, 3]);
        assert_eq!(binary_search_range(RecordId::new(2), &sorted, 2, 1), None);
        assert_eq!(binary_search_range(RecordId::new(2), &sorted, 0, 3), None);
    }
}
