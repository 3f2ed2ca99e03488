//! 2D multiplication grid printed with manual column spacing.
//!
//! Each cell is followed by enough spaces to keep every column five
//! characters wide, computed by hand from the digit count.

/// Returns the spaces that pad `number` out to a five-character column.
///
/// Zero counts as one digit. Numbers of five or more digits still get a
/// single space so adjacent cells never fuse.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// assert_eq!(column_padding(0), "    ");
/// assert_eq!(column_padding(42), "   ");
/// assert_eq!(column_padding(12345), " ");
/// ```
pub fn column_padding(number: u32) -> String {
    let digits = number.to_string().len();

    " ".repeat(5usize.saturating_sub(digits).max(1))
}

/// Builds a `rows` by `cols` grid where cell `[r][c]` holds `r * c`.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let grid = multiplication_grid(3, 3);
///
/// assert_eq!(grid[2], [0, 2, 4]);
/// ```
pub fn multiplication_grid(rows: u32, cols: u32) -> Vec<Vec<u32>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| r * c).collect())
        .collect()
}

/// Renders a grid with each cell followed by its column padding, one row per
/// line.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// let grid = multiplication_grid(2, 2);
///
/// assert_eq!(render_grid(&grid), "0    0    \n0    1    \n");
/// ```
pub fn render_grid(grid: &[Vec<u32>]) -> String {
    let mut out = String::new();

    for row in grid {
        for &cell in row {
            out.push_str(&cell.to_string());
            out.push_str(&column_padding(cell));
        }
        out.push('\n');
    }

    out
}
