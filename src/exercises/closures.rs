//! A capturing closure: build a name joiner that owns the first name.

/// Returns a closure that owns `first` and joins it with a last name.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let lamb = name_joiner(String::from("Nicho"));
///
/// assert_eq!(lamb("Smith"), "Nicho Smith");
/// ```
pub fn name_joiner(first: String) -> impl Fn(&str) -> String {
    move |last| format!("{first} {last}")
}
