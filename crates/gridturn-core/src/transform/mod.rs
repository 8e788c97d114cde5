//! Grid transformations: transpose, reflection and quarter-turn rotation.
//!
//! Every operation borrows its input and returns a freshly allocated grid;
//! nothing is rotated in place. Elements are only cloned, never inspected.
//!
//! # Composition
//!
//! A quarter-turn is built from the two primitive moves:
//! 1. Transpose (swap axes)
//! 2. Reflect along one axis
//!
//! Clockwise turns reflect rows (reverse `x`), counter-clockwise turns
//! reflect columns (reverse `y`).
//!
//! # Coordinate System
//!
//! - `x` indexes columns, `y` indexes rows
//! - Origin is the top-left cell
//! - Positive steps rotate clockwise

mod reflect;
mod rotation;
mod transpose;

pub use reflect::{reflect_columns, reflect_rows};
pub use rotation::{rotate, rotate_quarter, rotated_dimensions, RotationDirection};
pub use transpose::transpose;

use crate::grid::Grid;

impl<T: Clone> Grid<T> {
    /// See [`transpose`].
    pub fn transposed(&self) -> Grid<T> {
        transpose(self)
    }

    /// See [`reflect_rows`].
    pub fn reflected_rows(&self) -> Grid<T> {
        reflect_rows(self)
    }

    /// See [`reflect_columns`].
    pub fn reflected_columns(&self) -> Grid<T> {
        reflect_columns(self)
    }

    /// See [`rotate`].
    pub fn rotated(&self, steps: i32) -> Grid<T> {
        rotate(self, steps)
    }
}
