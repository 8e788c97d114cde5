//! Quarter-turn rotation built from transpose and reflection.
//!
//! # Algorithm
//!
//! A 90° turn is two primitive moves:
//! ```text
//! clockwise         = reflect_rows(transpose(grid))
//! counter-clockwise = reflect_columns(transpose(grid))
//! ```
//!
//! `rotate(grid, steps)` picks the direction from the sign of `steps`
//! (strictly positive is clockwise) and repeats the turn `|steps|` times.
//! Four turns in one direction compose to the identity, so only
//! `|steps| mod 4` passes are actually run.

use serde::{Deserialize, Serialize};

use super::reflect::{reflect_columns, reflect_rows};
use super::transpose::transpose;
use crate::grid::Grid;

/// Direction of a quarter-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    /// Transpose then reflect rows.
    Clockwise,
    /// Transpose then reflect columns.
    CounterClockwise,
}

impl RotationDirection {
    /// Direction selected by a signed step count.
    ///
    /// Only strictly positive counts are clockwise; zero resolves to
    /// counter-clockwise, which is irrelevant since no turn is applied.
    #[inline]
    pub fn from_steps(steps: i32) -> Self {
        if steps > 0 {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        }
    }

    /// The direction that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Apply exactly one 90° turn.
///
/// The output is `height x width`.
pub fn rotate_quarter<T: Clone>(grid: &Grid<T>, direction: RotationDirection) -> Grid<T> {
    let transposed = transpose(grid);
    match direction {
        RotationDirection::Clockwise => reflect_rows(&transposed),
        RotationDirection::CounterClockwise => reflect_columns(&transposed),
    }
}

/// Rotate a grid by a signed number of quarter-turns.
///
/// Positive `steps` rotate clockwise, zero and negative rotate
/// counter-clockwise. Every `i32` is accepted, including `i32::MIN`.
/// Zero steps returns a copy of the input.
///
/// # Example
///
/// ```
/// use gridturn_core::grid::Grid;
/// use gridturn_core::transform::rotate;
///
/// let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
///
/// let cw = rotate(&g, 1);
/// assert_eq!(cw.to_rows(), vec![vec![5, 3, 1], vec![6, 4, 2]]);
///
/// let ccw = rotate(&g, -1);
/// assert_eq!(ccw.to_rows(), vec![vec![2, 4, 6], vec![1, 3, 5]]);
/// ```
pub fn rotate<T: Clone>(grid: &Grid<T>, steps: i32) -> Grid<T> {
    let direction = RotationDirection::from_steps(steps);
    let iterations = steps.unsigned_abs() % 4;

    if iterations == 0 {
        return grid.clone();
    }

    let mut rotated = rotate_quarter(grid, direction);
    for _ in 1..iterations {
        rotated = rotate_quarter(&rotated, direction);
    }
    rotated
}

/// Dimensions of `rotate(grid, steps)` for a `width x height` grid.
///
/// An odd number of quarter-turns swaps the sides; an even number keeps them.
///
/// # Example
///
/// ```
/// use gridturn_core::transform::rotated_dimensions;
///
/// assert_eq!(rotated_dimensions(100, 50, 1), (50, 100));
/// assert_eq!(rotated_dimensions(100, 50, -2), (100, 50));
/// ```
pub fn rotated_dimensions(width: usize, height: usize, steps: i32) -> (usize, usize) {
    if steps.unsigned_abs() % 2 == 1 {
        (height, width)
    } else {
        (width, height)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
