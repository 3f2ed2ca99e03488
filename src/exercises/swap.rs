//! Value swapping through mutable references.
//!
//! The standard library already provides [`core::mem::swap`]; the point here
//! is doing the three-move dance by hand.

/// Exchanges the values behind two mutable references.
///
/// Uses an explicit temporary instead of [`core::mem::swap`].
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let mut a = String::from("first");
/// let mut b = String::from("second");
///
/// swap_values(&mut a, &mut b);
///
/// assert_eq!(a, "second");
/// assert_eq!(b, "first");
/// ```
pub fn swap_values<T>(a: &mut T, b: &mut T) {
    // Just `mem::swap()`
    unsafe {
        let temp = core::ptr::read(a);
        core::ptr::copy(b, a, 1);
        core::ptr::write(b, temp);
    }
}
