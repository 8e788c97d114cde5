//! Dense rectangular grid container.
//!
//! A [`Grid`] owns its cells in row-major order and is addressed by `(x, y)`,
//! where `x` indexes columns and `y` indexes rows. Grids are validated at
//! construction, so every value of the type is rectangular.
//!
//! # Examples
//!
//! ```ignore
//! use gridturn_core::grid::Grid;
//!
//! let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])?;
//! assert_eq!(grid.dimensions(), (2, 3));
//! assert_eq!(grid.get(1, 2), Some(&6));
//! ```

mod types;

pub use types::{Grid, GridError};
