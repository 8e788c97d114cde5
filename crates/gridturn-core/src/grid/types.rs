//! Core grid container and its construction errors.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The cell buffer does not hold exactly `width * height` elements.
    #[error("Cell count {len} does not match {width}x{height} grid")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    /// A row's length differs from the first row's.
    #[error("Row {row} has {found} cells, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// `width * height` does not fit in `usize`.
    #[error("Grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// A dense, rectangular 2-D grid of `T`.
///
/// Cells are addressed by `(x, y)` with `x` in `[0, width)` and `y` in
/// `[0, height)`, and stored row-major: `cells[y * width + x]`. Either side
/// may be zero.
///
/// Serialized as `{ "width", "height", "cells" }`. Deserialization goes
/// through [`Grid::new`], so a cell count that disagrees with the dimensions
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Unvalidated wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        Grid::new(raw.width, raw.height, raw.cells)
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn area(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

impl<T> Grid<T> {
    /// Create a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] unless `cells.len()` equals
    /// `width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a 0x0 grid.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Create a grid from a list of rows, top to bottom.
    ///
    /// The first row fixes the width; no rows gives a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::JaggedRows`] for the first row whose length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::JaggedRows {
                row,
                expected: width,
                found,
            });
        }

        let cells: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid where cell `(x, y)` is `f(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if `width * height` overflows.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> T,
    {
        area(width, height)?;
        Ok(Self::build(width, height, f))
    }

    /// Fill a grid whose area is already known to fit in `usize`.
    pub(crate) fn build<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns (extent of `x`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (extent of `y`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when either side is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    /// Cells of row `y`, or `None` when out of bounds.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        (y < self.height).then(|| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Rows top to bottom. Yields `height` slices even when `width` is 0.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major cells.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if `width * height` overflows.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        let len = area(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![value; len],
        })
    }

    /// Copy the grid out as a list of rows, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        match self.offset(x, y) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        match self.offset(x, y) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "cell ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Width 2, height 3: rows [[1, 2], [3, 4], [5, 6]].
    fn sample() -> Grid<i32> {
        Grid::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_new_row_major_addressing() {
        let g = sample();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.get(0, 0), Some(&1));
        assert_eq!(g.get(1, 0), Some(&2));
        assert_eq!(g.get(0, 1), Some(&3));
        assert_eq!(g.get(1, 2), Some(&6));
        assert_eq!(g[(1, 1)], 4);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Grid::new(2, 3, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                width: 2,
                height: 3,
                len: 5
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let err = Grid::<u8>::new(usize::MAX, 2, vec![]).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { len: 0, .. }));
    }

    #[test]
    fn test_zero_sized_grids() {
        let wide = Grid::<u8>::new(4, 0, vec![]).unwrap();
        assert_eq!(wide.dimensions(), (4, 0));
        assert!(wide.is_empty());
        assert_eq!(wide.rows().count(), 0);

        let tall = Grid::<u8>::new(0, 3, vec![]).unwrap();
        assert_eq!(tall.dimensions(), (0, 3));
        assert_eq!(tall.rows().count(), 3);
        assert!(tall.rows().all(|r| r.is_empty()));
    }

    #[test]
    fn test_out_of_bounds_get() {
        let g = sample();
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
        assert_eq!(g.row(3), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let g = sample();
        let _ = g[(5, 5)];
    }

    #[test]
    fn test_get_mut_and_index_mut() {
        let mut g = sample();
        *g.get_mut(0, 2).unwrap() = 50;
        g[(1, 2)] = 60;
        assert_eq!(g.row(2), Some(&[50, 60][..]));
    }

    #[test]
    fn test_from_rows() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(g, sample());
        assert_eq!(g.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn test_from_rows_empty() {
        let g = Grid::<u8>::from_rows(vec![]).unwrap();
        assert_eq!(g.dimensions(), (0, 0));
        assert_eq!(g, Grid::default());
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3], vec![5, 6]]).unwrap_err();
        assert_eq!(
            err,
            GridError::JaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_fn_and_filled() {
        let g = Grid::from_fn(3, 2, |x, y| (x, y)).unwrap();
        assert_eq!(g[(2, 1)], (2, 1));
        assert_eq!(g.len(), 6);

        let f = Grid::filled(2, 2, 'a').unwrap();
        assert!(f.cells().iter().all(|&c| c == 'a'));

        assert_eq!(
            Grid::filled(usize::MAX, 2, 0u8).unwrap_err(),
            GridError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = GridError::JaggedRows {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "Row 2 has 3 cells, expected 4");

        let err = GridError::DimensionMismatch {
            width: 2,
            height: 2,
            len: 3,
        };
        assert_eq!(err.to_string(), "Cell count 3 does not match 2x2 grid");
    }

    #[test]
    fn test_serde_round_trip() {
        let g = sample();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"width":2,"height":3,"cells":[1,2,3,4,5,6]}"#);

        let back: Grid<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_serde_rejects_bad_cell_count() {
        let result: Result<Grid<i32>, _> =
            serde_json::from_str(r#"{"width":2,"height":2,"cells":[1,2,3]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("does not match"), "{}", err);
    }

    #[test]
    fn test_into_cells() {
        assert_eq!(sample().into_cells(), vec![1, 2, 3, 4, 5, 6]);
    }
}
