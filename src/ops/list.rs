use crate::utils::error::{DrillError, Result};

/// Squares of `1..=n`, in ascending order.
pub fn list_of_squares(n: u64) -> Vec<u64> {
    (1..=n).map(|i| i * i).collect()
}

/// Reverses `items[start..=end]` in place.
///
/// The range is inclusive on both ends. An empty or out-of-bounds range is
/// rejected and the slice is left untouched.
pub fn reverse_sublist<T>(items: &mut [T], start: usize, end: usize) -> Result<()> {
    if start > end || end >= items.len() {
        return Err(DrillError::InvalidRange {
            start,
            end,
            len: items.len(),
        });
    }
    items[start..=end].reverse();
    Ok(())
}

/// Two-pointer merge of two sorted slices.
///
/// On equal heads the element from `right` is taken first.
pub fn merge_sorted_lists<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
