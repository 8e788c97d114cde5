//! WASM bindings for grid transformation operations.
//!
//! Each function returns a new `JsGrid`; the input is never modified.

use crate::types::JsGrid;
use gridturn_core::transform::{
    reflect_columns as core_reflect_columns, reflect_rows as core_reflect_rows,
    rotate as core_rotate, rotated_dimensions as core_rotated_dimensions,
    transpose as core_transpose,
};
use wasm_bindgen::prelude::*;

/// Swap the axes of a grid. A `w x h` grid becomes `h x w`.
#[wasm_bindgen]
pub fn transpose(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(core_transpose(grid.as_grid()))
}

/// Mirror left/right (reverse the x coordinate).
#[wasm_bindgen]
pub fn reflect_rows(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(core_reflect_rows(grid.as_grid()))
}

/// Mirror top/bottom (reverse the y coordinate).
#[wasm_bindgen]
pub fn reflect_columns(grid: &JsGrid) -> JsGrid {
    JsGrid::from_grid(core_reflect_columns(grid.as_grid()))
}

/// Rotate a grid by a signed number of quarter-turns.
///
/// # Arguments
///
/// * `grid` - Source grid
/// * `steps` - Quarter-turns (positive = clockwise, zero or negative = counter-clockwise)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const grid = JsGrid.fromRows([[1, 2], [3, 4], [5, 6]]);
/// const turned = rotate(grid, 1);
/// console.log(turned.rows()); // [[5, 3, 1], [6, 4, 2]]
/// ```
#[wasm_bindgen]
pub fn rotate(grid: &JsGrid, steps: i32) -> JsGrid {
    JsGrid::from_grid(core_rotate(grid.as_grid(), steps))
}

/// Dimensions `[width, height]` that `rotate` would produce.
#[wasm_bindgen]
pub fn rotated_dimensions(width: u32, height: u32, steps: i32) -> Vec<u32> {
    let (w, h) = core_rotated_dimensions(width as usize, height as usize, steps);
    vec![w as u32, h as u32]
}
