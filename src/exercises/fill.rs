//! Fixed-range slice filling: split a slice into thirds and fill each third
//! with its own value.

/// Fills the slice in thirds: `first` into `[0, n/3)`, `second` into
/// `[n/3, 2n/3)`, and `third` into `[2n/3, n)`.
///
/// The boundaries use integer division, so when `n` is not a multiple of
/// three the trailing segment absorbs the remainder.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let mut foods = vec![""; 9];
///
/// fill_thirds(&mut foods, "pizza", "hamburger", "hot dogs");
///
/// assert_eq!(&foods[..3], ["pizza"; 3]);
/// assert_eq!(&foods[3..6], ["hamburger"; 3]);
/// assert_eq!(&foods[6..], ["hot dogs"; 3]);
/// ```
pub fn fill_thirds<T: Clone>(slice: &mut [T], first: T, second: T, third: T) {
    let n = slice.len();

    slice[..n / 3].fill(first);
    slice[n / 3..2 * n / 3].fill(second);
    slice[2 * n / 3..].fill(third);
}
