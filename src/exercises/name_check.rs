//! String-input validation: a typed-in name must be non-empty and at most
//! ten characters long.

use thiserror::Error;

/// Maximum accepted name length, in characters.
pub const MAX_NAME_LEN: usize = 10;

/// Reasons a name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The input was empty.
    #[error("answer the question!")]
    Empty,
    /// The input exceeded [`MAX_NAME_LEN`] characters.
    #[error("name cannot exceed 10 chars (got {len})")]
    TooLong {
        /// Length of the rejected input, in characters.
        len: usize,
    },
}

/// Validates a name: non-empty and at most [`MAX_NAME_LEN`] characters.
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use drills::prelude::*;
///
/// assert!(validate_name("Nicho").is_ok());
/// assert_eq!(validate_name(""), Err(NameError::Empty));
/// assert_eq!(
///     validate_name("far too long a name"),
///     Err(NameError::TooLong { len: 19 })
/// );
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong { len });
    }

    Ok(())
}
