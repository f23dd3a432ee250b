//! Common single-cell fixtures.
//!
//! Corner tuples are listed clockwise from the top-left:
//! `(top_left, top_right, bottom_right, bottom_left)`.

/// All corners equal.
pub const FLAT: (i32, i32, i32, i32) = (5, 5, 5, 5);

/// Rises from the top edge (0) to the bottom edge (2).
pub const SOUTH_SLOPE: (i32, i32, i32, i32) = (0, 0, 2, 2);

/// Rises from the left edge (0) to the right edge (3).
pub const EAST_SLOPE: (i32, i32, i32, i32) = (0, 3, 3, 0);

/// Only the top-right corner is high.
pub const TOP_RIGHT_PEAK: (i32, i32, i32, i32) = (0, 4, 0, 0);

/// High on the top-right / bottom-left diagonal.
pub const SADDLE: (i32, i32, i32, i32) = (0, 2, 0, 2);

/// High on the top-left / bottom-right diagonal, centre above level 1.
pub const SADDLE_HIGH_CENTER: (i32, i32, i32, i32) = (4, 0, 4, 0);

/// Build a 2x2 sample grid containing just one cell.
pub fn single_cell(corners: (i32, i32, i32, i32)) -> Vec<Vec<i32>> {
    let (tl, tr, br, bl) = corners;
    vec![vec![tl, tr], vec![bl, br]]
}
