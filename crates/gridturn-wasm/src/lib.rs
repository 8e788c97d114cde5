//! Gridturn WASM - WebAssembly bindings for Gridturn
//!
//! This crate exposes the gridturn-core transforms to JavaScript/TypeScript
//! over numeric grids.
//!
//! # Module Structure
//!
//! - `types` - `JsGrid`, the WASM-compatible grid wrapper
//! - `transform` - transpose, reflection and rotation bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsGrid, rotate } from '@gridturn/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const grid = JsGrid.fromRows([[1, 2], [3, 4], [5, 6]]);
//! const turned = rotate(grid, -1);
//! console.log(`Rotated to ${turned.width}x${turned.height}`);
//! ```

use std::fmt::Display;

use wasm_bindgen::prelude::*;

mod transform;
mod types;

// Re-export public types
pub use transform::{reflect_columns, reflect_rows, rotate, rotated_dimensions, transpose};
pub use types::JsGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Report rejected input to the browser console and convert it to a JS error.
pub(crate) fn reject(err: &impl Display) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!("gridturn: {}", message)));
    JsValue::from_str(&message)
}
