//! In-place quicksort over identified records
//!
//! Partitioning follows the Lomuto scheme with the last element of the range as
//! pivot. Instead of recursing on both halves, pending ranges are kept on an
//! explicit work stack and the smaller half is always processed next, so stack
//! usage stays logarithmic even on already-sorted or reversed input (where the
//! running time still degrades to O(n²)).
//!
//! The sort is not stable: records sharing an identifier may change their
//! relative order.

use crate::error::CoreError;
use crate::identifiers::Identified;

/// Sorts the whole slice ascending by identifier
pub fn quicksort<T: Identified>(records: &mut [T]) {
    if records.len() > 1 {
        sort_half_open(records, 0, records.len());
    }
}

/// Sorts `records[low..=high]` ascending by identifier, leaving the rest untouched
///
/// A range with `low >= high` holds at most one element and is left as is.
///
/// # Errors
///
/// Returns `CoreError::InvalidRange` if `high` lies outside the slice while the
/// range is non-trivial.
pub fn quicksort_range<T: Identified>(
    records: &mut [T],
    low: usize,
    high: usize,
) -> Result<(), CoreError> {
    if low >= high {
        return Ok(());
    }
    if high >= records.len() {
        return Err(CoreError::InvalidRange {
            low,
            high,
            len: records.len(),
        });
    }
    sort_half_open(records, low, high + 1);
    Ok(())
}

/// Partitions a non-empty slice around its last element
///
/// Every record with an identifier less than or equal to the pivot's ends up
/// left of the returned index, every greater one right of it, and the pivot
/// itself sits at the returned index.
pub fn partition<T: Identified>(records: &mut [T]) -> usize {
    let Some(last) = records.len().checked_sub(1) else {
        return 0;
    };
    let pivot = records[last].identifier();

    let mut boundary = 0;
    for current in 0..last {
        if records[current].identifier() <= pivot {
            records.swap(boundary, current);
            boundary += 1;
        }
    }
    records.swap(boundary, last);
    boundary
}

fn sort_half_open<T: Identified>(records: &mut [T], start: usize, end: usize) {
    let mut pending = vec![(start, end)];

    while let Some((mut start, mut end)) = pending.pop() {
        while end - start > 1 {
            let pivot = start + partition(&mut records[start..end]);

            // Defer the larger side, keep working on the smaller one.
            if pivot - start < end - pivot - 1 {
                pending.push((pivot + 1, end));
                end = pivot;
            } else {
                pending.push((start, pivot));
                start = pivot + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::RecordId;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Row(u64, char);

    impl Identified for Row {
        fn identifier(&self) -> RecordId {
            RecordId::new(self.0)
        }
    }

    fn ids(rows: &[Row]) -> Vec<u64> {
        rows.iter().map(|r| r.0).collect()
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut rows = [Row(5, 'a'), Row(1, 'b'), Row(9, 'c'), Row(3, 'd'), Row(4, 'e')];
        let pivot = partition(&mut rows);

        assert_eq!(pivot, 2);
        assert_eq!(rows[pivot].0, 4);
        assert!(rows[..pivot].iter().all(|r| r.0 <= 4));
        assert!(rows[pivot + 1..].iter().all(|r| r.0 > 4));
    }

    #[test]
    fn test_partition_of_empty_slice() {
        let mut rows: [Row; 0] = [];
        assert_eq!(partition(&mut rows), 0);
    }

    #[test]
    fn test_quicksort_reversed_input() {
        let mut rows: Vec<Row> = (0..2_000).rev().map(|i| Row(i, 'x')).collect();
        quicksort(&mut rows);
        assert_eq!(ids(&rows), (0..2_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_quicksort_range_leaves_outside_untouched() {
        let mut rows = [Row(9, 'a'), Row(3, 'b'), Row(2, 'c'), Row(1, 'd'), Row(0, 'e')];
        quicksort_range(&mut rows, 1, 3).unwrap();
        assert_eq!(ids(&rows), vec![9, 1, 2, 3, 0]);
    }

    #[test]
    fn test_quicksort_range_rejects_out_of_bounds() {
        let mut rows = [Row(2, 'a'), Row(1, 'b')];
        let err = quicksort_range(&mut rows, 0, 2).unwrap_err();
        assert_eq!(err, CoreError::InvalidRange { low: 0, high: 2, len: 2 });
    }
}
