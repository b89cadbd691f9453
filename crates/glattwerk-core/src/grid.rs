// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grid — a rectangular 2D array of grayscale intensities stored as a flat
// row-major buffer.

use std::ops::{Index, IndexMut};

use crate::error::{GlattwerkError, Result};

/// A rectangular grid of intensity values, nominally in `[0, 255]`.
///
/// Values are kept as `f64` so filter output can stay real-valued; callers that
/// need 8-bit pixels quantize at the image boundary. Indexing is
/// `grid[(row, col)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Grid {
    // -- Construction ---------------------------------------------------------

    /// A `height` x `width` grid of zeros.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, 0.0)
    }

    /// A `height` x `width` grid with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: f64) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }

    /// Build a grid from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(height * width);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GlattwerkError::RaggedRows {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            height,
            width,
            data,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// True when the grid has no cells (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutably borrow one row.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    // -- Region helpers -------------------------------------------------------

    /// Set every cell of a block to `value`. The block is clipped to the grid.
    pub fn fill_rect(&mut self, top: usize, left: usize, height: usize, width: usize, value: f64) {
        let bottom = (top + height).min(self.height);
        let right = (left + width).min(self.width);
        if left >= right {
            return;
        }
        for row in top..bottom {
            let start = row * self.width;
            self.data[start + left..start + right].fill(value);
        }
    }

    /// Fail with `ShapeMismatch` unless `other` has the same dimensions.
    pub fn ensure_same_shape(&self, other: &Grid) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(GlattwerkError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            })
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.height && col < self.width,
            "index ({row}, {col}) out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        &self.data[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.height && col < self.width,
            "index ({row}, {col}) out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        &mut self.data[row * self.width + col]
    }
}
