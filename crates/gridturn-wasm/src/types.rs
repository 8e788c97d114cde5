//! WASM-compatible wrapper types for grid data.
//!
//! JavaScript numbers are `f64`, so the bindings expose a single concrete
//! grid type, [`JsGrid`], wrapping `Grid<f64>`.

use gridturn_core::grid::{Grid, GridError};
use wasm_bindgen::prelude::*;

/// A rectangular grid of numbers for JavaScript.
///
/// Cells are stored row-major in WASM memory. `cells()` and `rows()` copy
/// the data out to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsGrid {
    inner: Grid<f64>,
}

#[wasm_bindgen]
impl JsGrid {
    /// Create a grid from dimensions and row-major cells.
    ///
    /// # Arguments
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    /// * `cells` - Row-major values, `width * height` long
    ///
    /// # Errors
    /// Returns error if the cell count does not match the dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cells: Vec<f64>) -> Result<JsGrid, JsValue> {
        Self::try_new(width, height, cells).map_err(|e| crate::reject(&e))
    }

    /// Create a grid from an array of equal-length rows.
    ///
    /// # Arguments
    /// * `rows` - `number[][]`, top row first
    ///
    /// # Errors
    /// Returns error if `rows` is not an array of number arrays, or if the
    /// rows differ in length
    #[wasm_bindgen(js_name = fromRows)]
    pub fn from_rows(rows: JsValue) -> Result<JsGrid, JsValue> {
        let rows: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| crate::reject(&format!("Invalid rows: {}", e)))?;
        Self::try_from_rows(rows).map_err(|e| crate::reject(&e))
    }

    /// Create a grid from a `{ width, height, cells }` object.
    ///
    /// # Errors
    /// Returns error if the object is malformed or the cell count does not
    /// match the dimensions
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: JsValue) -> Result<JsGrid, JsValue> {
        let inner: Grid<f64> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| crate::reject(&format!("Invalid grid: {}", e)))?;
        Ok(JsGrid { inner })
    }

    /// Serialize to a `{ width, height, cells }` object.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of columns
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Number of rows
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Total number of cells
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Value at `(x, y)`, or `undefined` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        self.inner.get(x as usize, y as usize).copied()
    }

    /// Returns row-major cells as Float64Array.
    ///
    /// Note: This creates a copy of the cell data.
    pub fn cells(&self) -> Vec<f64> {
        self.inner.cells().to_vec()
    }

    /// Returns the grid as an array of row arrays, top row first.
    pub fn rows(&self) -> js_sys::Array {
        self.inner
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&v| JsValue::from_f64(v))
                    .collect::<js_sys::Array>()
            })
            .collect()
    }
}

impl JsGrid {
    /// Validated constructor shared by the bindings and native tests.
    pub(crate) fn try_new(width: u32, height: u32, cells: Vec<f64>) -> Result<Self, GridError> {
        Grid::new(width as usize, height as usize, cells).map(Self::from_grid)
    }

    pub(crate) fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        Grid::from_rows(rows).map(Self::from_grid)
    }

    /// Wrap a core grid.
    pub(crate) fn from_grid(inner: Grid<f64>) -> Self {
        Self { inner }
    }

    /// Borrow the core grid.
    pub(crate) fn as_grid(&self) -> &Grid<f64> {
        &self.inner
    }
}
