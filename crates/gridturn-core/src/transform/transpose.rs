//! Axis swap.

use crate::grid::Grid;

/// Swap the two axes of a grid.
///
/// For an input of `width x height`, the output is `height x width` and
/// `output(y, x) == input(x, y)` for every cell. Empty grids transpose to
/// correspondingly shaped empty grids.
///
/// # Example
///
/// ```
/// use gridturn_core::grid::Grid;
/// use gridturn_core::transform::transpose;
///
/// let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// let t = transpose(&g);
/// assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn transpose<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (width, height) = grid.dimensions();
    let cells = grid.cells();

    // out(x, y) = in(y, x), with in(y, x) at cells[x * width + y]
    Grid::build(height, width, |x, y| cells[x * width + y].clone())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating grids of arbitrary shape, including empty ones.
    fn grid_strategy() -> impl Strategy<Value = Grid<u16>> {
        (0usize..=12, 0usize..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u16>(), w * h)
                .prop_map(move |cells| Grid::new(w, h, cells).unwrap())
        })
    }

    proptest! {
        /// Property: Transposing twice returns the original grid.
        #[test]
        fn prop_transpose_involution(g in grid_strategy()) {
            prop_assert_eq!(transpose(&transpose(&g)), g);
        }

        /// Property: Transpose swaps width and height.
        #[test]
        fn prop_transpose_swaps_shape(g in grid_strategy()) {
            let t = transpose(&g);
            prop_assert_eq!(t.width(), g.height());
            prop_assert_eq!(t.height(), g.width());
            prop_assert_eq!(t.len(), g.len());
        }
    }
}
