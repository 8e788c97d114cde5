//! Mirror operations along one axis.
//!
//! Reflection never changes a grid's shape:
//! - [`reflect_rows`] reverses the `x` coordinate (left/right mirror)
//! - [`reflect_columns`] reverses the `y` coordinate (top/bottom mirror)

use crate::grid::Grid;

/// Reverse the `x` coordinate: `output(W-1-x, y) == input(x, y)`.
///
/// # Example
///
/// ```
/// use gridturn_core::grid::Grid;
/// use gridturn_core::transform::reflect_rows;
///
/// let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(reflect_rows(&g).to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
/// ```
pub fn reflect_rows<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (width, height) = grid.dimensions();
    let cells = grid.cells();

    Grid::build(width, height, |x, y| {
        cells[y * width + (width - 1 - x)].clone()
    })
}

/// Reverse the `y` coordinate: `output(x, H-1-y) == input(x, y)`.
///
/// # Example
///
/// ```
/// use gridturn_core::grid::Grid;
/// use gridturn_core::transform::reflect_columns;
///
/// let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(reflect_columns(&g).to_rows(), vec![vec![4, 5, 6], vec![1, 2, 3]]);
/// ```
pub fn reflect_columns<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (width, height) = grid.dimensions();
    let cells = grid.cells();

    Grid::build(width, height, |x, y| {
        cells[(height - 1 - y) * width + x].clone()
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
