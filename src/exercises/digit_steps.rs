//! Digit-picking routines loosely inspired by the [Luhn algorithm].
//!
//! These reproduce a practice fragment, quirks included: the last digit of
//! the number is never picked, the last picked digit is never doubled, and no
//! mod-10 check digit is ever produced. This is *not* a checksum validator.
//!
//! [Luhn algorithm]: https://en.wikipedia.org/wiki/Luhn_algorithm

/// Intermediate steps of [`doubled_digit_sum`], kept so each stage can be
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSteps {
    /// Digits picked from the odd positions of the decimal rendering,
    /// excluding the final position.
    pub picked: String,
    /// Decimal renderings of each picked digit doubled, concatenated. The
    /// last picked digit is skipped.
    pub doubled: String,
    /// Sum of the decimal digits of `doubled`.
    pub sum: u32,
}

/// Runs the three digit-picking steps over the decimal rendering of `number`.
///
/// 1. Pick the digits at odd positions, never looking at the last position.
/// 2. Double each picked digit except the last one picked, concatenating the
///    doubled values as decimal strings.
/// 3. Sum the digits of that concatenation.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let steps = doubled_digit_sum(371449635398431);
///
/// assert_eq!(steps.picked, "7493383");
/// assert_eq!(steps.doubled, "148186616");
/// assert_eq!(steps.sum, 41);
/// ```
pub fn doubled_digit_sum(number: u64) -> DigitSteps {
    let s = number.to_string();

    let mut picked = String::new();
    for (i, b) in s.bytes().enumerate().take(s.len() - 1) {
        if i % 2 != 0 {
            picked.push(b as char);
        }
    }

    let mut doubled = String::new();
    for &b in picked.as_bytes().iter().take(picked.len().saturating_sub(1)) {
        let digit = u32::from(b - b'0');
        doubled.push_str(&(digit * 2).to_string());
    }

    let sum = doubled.bytes().map(|b| u32::from(b - b'0')).sum();

    DigitSteps {
        picked,
        doubled,
        sum,
    }
}

/// Collects the digits at even positions of the decimal rendering of
/// `number`, this time over the whole string.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// assert_eq!(even_position_digits(371449635398431), "31465941");
/// ```
pub fn even_position_digits(number: u64) -> String {
    number
        .to_string()
        .bytes()
        .enumerate()
        .filter(|(j, _)| j % 2 == 0)
        .map(|(_, b)| b as char)
        .collect()
}
