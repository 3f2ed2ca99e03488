//! Struct field access through a reference.
//!
//! The C-family arrow operator collapses to plain `.` in Rust since
//! references auto-dereference on field access.

/// A person with an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    /// Age in years.
    pub age: u32,
}

/// Reads the `age` field through a shared reference.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let bob = Person { age: 25 };
/// let ptr_to_bob = &bob;
///
/// assert_eq!(age_of(ptr_to_bob), 25);
/// ```
pub fn age_of(person: &Person) -> u32 {
    person.age
}
