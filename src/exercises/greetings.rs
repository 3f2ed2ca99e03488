//! Message selection keyed by a `char` tag, iterated over a fixed array.

/// Returns the greeting assigned to a tag, or [`None`] for unknown tags.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// assert_eq!(greeting_for('A'), Some("happy birthday"));
/// assert_eq!(greeting_for('Z'), None);
/// ```
pub fn greeting_for(tag: char) -> Option<&'static str> {
    match tag {
        'A' => Some("happy birthday"),
        'B' => Some("Merry Christmas"),
        'C' => Some("have a great day"),
        _ => None,
    }
}

/// Collects the greetings for every known tag in the slice, in order.
///
/// Unknown tags are skipped rather than producing a placeholder.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let tags = ['A', 'B', 'C'];
///
/// assert_eq!(
///     greetings_for(&tags),
///     ["happy birthday", "Merry Christmas", "have a great day"]
/// );
/// ```
pub fn greetings_for(tags: &[char]) -> Vec<&'static str> {
    tags.iter().copied().filter_map(greeting_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(greeting_for('B'), Some("Merry Christmas"));
        assert_eq!(greeting_for('C'), Some("have a great day"));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(greeting_for('D'), None);
        assert_eq!(greeting_for('a'), None);
    }

    #[test]
    fn test_mixed_tags_skip_unknown() {
        let tags = ['A', 'X', 'C'];
        assert_eq!(greetings_for(&tags), ["happy birthday", "have a great day"]);
    }

    #[test]
    fn test_empty_tags() {
        let tags: [char; 0] = [];
        assert!(greetings_for(&tags).is_empty());
    }
}
