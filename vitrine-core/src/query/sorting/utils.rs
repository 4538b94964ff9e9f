//! Utility functions for sorting operations

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` names the element of the original slice that
/// belongs at that position.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let temp: Vec<T> = indices.iter().map(|&idx| items[idx].clone()).collect();
    items.clone_from_slice(&temp);
}

/// Check if a slice is already sorted according to a comparison function
///
/// Used to skip a sort pass when data is already in the desired order.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_applies_permutation() {
        let mut items = vec!['a', 'b', 'c'];
        reorder_by_indices(&mut items, &[2, 0, 1]);
        assert_eq!(items, vec!['c', 'a', 'b']);
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted_by(&[1, 2, 2, 3], |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&[3, 1], |a, b| a.cmp(b)));
        assert!(is_sorted_by::<u8, _>(&[], |a, b| a.cmp(b)));
    }
}
