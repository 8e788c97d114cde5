//! Gridturn Core - Generic 2-D grid rotation library
//!
//! This crate provides a dense rectangular [`Grid`] container and pure
//! transforms over it: transpose, reflection along either axis, and signed
//! quarter-turn rotation composed from the two.
//!
//! # Example
//!
//! ```ignore
//! use gridturn_core::{rotate, Grid};
//!
//! let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])?;
//! let turned = rotate(&grid, 1);
//! assert_eq!(turned.to_rows(), vec![vec![5, 3, 1], vec![6, 4, 2]]);
//! ```

pub mod grid;
pub mod transform;

pub use grid::{Grid, GridError};
pub use transform::{
    reflect_columns, reflect_rows, rotate, rotate_quarter, rotated_dimensions, transpose,
    RotationDirection,
};
