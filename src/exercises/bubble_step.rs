//! [Bubble Sort], reduced to its first step: find one adjacent inversion and
//! swap it. This is deliberately not a full sort; it performs a single
//! detection-and-swap, plus at most one more advance of the moved element.
//!
//! [Bubble Sort]: https://en.wikipedia.org/wiki/Bubble_sort

/// Performs one bubble step: swaps the first adjacent out-of-order pair, then
/// advances the moved element once more if it is still out of order.
///
/// Returns the final index of the moved element, or [`None`] if the slice has
/// no adjacent inversion (already sorted, or fewer than two elements). The
/// slice is left untouched in that case.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The slice is scanned once for the first inversion;
/// the swaps afterwards are constant work.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let mut arr = [10, 1, 9, 2, 8, 3, 7, 4, 6, 5];
///
/// assert_eq!(bubble_step(&mut arr), Some(2));
/// assert_eq!(arr, [1, 9, 10, 2, 8, 3, 7, 4, 6, 5]);
/// ```
pub fn bubble_step<T: PartialOrd>(arr: &mut [T]) -> Option<usize> {
    let mut current = None;

    for j in 0..arr.len().saturating_sub(1) {
        if arr[j] > arr[j + 1] {
            current = Some(j);
            break;
        }
    }

    let mut i = current?;
    arr.swap(i, i + 1);
    i += 1;

    if i + 1 < arr.len() && arr[i] > arr[i + 1] {
        arr.swap(i, i + 1);
        i += 1;
    }

    Some(i)
}
