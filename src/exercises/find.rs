//! [Linear Search] over a fixed element array: check each element in turn
//! until the target is found or the array is exhausted.
//!
//! [Linear Search]: https://en.wikipedia.org/wiki/Linear_search

/// Returns the index of the first element equal to `target`, or [`None`] if
/// it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Each element is checked sequentially until a match
/// is found or the whole array has been searched.
///
/// # Examples
///
/// ```
/// use drills::prelude::*;
///
/// let elements = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
///
/// assert_eq!(find_element(&elements, &'D'), Some(3));
/// assert_eq!(find_element(&elements, &'Z'), None);
/// ```
pub fn find_element<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|elem| *elem == *target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_at_start() {
        let arr = ['A', 'B', 'C'];
        assert_eq!(find_element(&arr, &'A'), Some(0));
    }

    #[test]
    fn test_found_at_end() {
        let arr = ['A', 'B', 'C'];
        assert_eq!(find_element(&arr, &'C'), Some(2));
    }

    #[test]
    fn test_not_found() {
        let arr = ['A', 'B', 'C'];
        assert_eq!(find_element(&arr, &'Z'), None);
    }

    #[test]
    fn test_empty_array() {
        let arr: [char; 0] = [];
        assert_eq!(find_element(&arr, &'A'), None);
    }

    #[test]
    fn test_duplicates_return_first() {
        let arr = ['A', 'B', 'B', 'C'];
        assert_eq!(find_element(&arr, &'B'), Some(1));
    }

    #[test]
    fn test_case_sensitive() {
        let arr = ['A', 'B', 'C'];
        assert_eq!(find_element(&arr, &'a'), None);
    }
}
