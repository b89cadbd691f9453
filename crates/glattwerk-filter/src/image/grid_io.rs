// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversions between 8-bit grayscale images and intensity grids, plus
// file load/save.

use std::path::Path;

use glattwerk_core::error::{GlattwerkError, Result};
use glattwerk_core::Grid;
use image::{GrayImage, Luma};
use tracing::{debug, instrument};

use super::processor::ImageProcessor;

/// Widen an 8-bit grayscale image into a grid.
pub fn grid_from_luma(image: &GrayImage) -> Grid {
    Grid::from_fn(image.height() as usize, image.width() as usize, |row, col| {
        f64::from(image.get_pixel(col as u32, row as u32).0[0])
    })
}

/// Quantize a grid into an 8-bit grayscale image.
///
/// Values are rounded to the nearest integer and clipped to `[0, 255]`; NaN
/// maps to 0.
pub fn grid_to_luma(grid: &Grid) -> Result<GrayImage> {
    let width = dimension(grid.width())?;
    let height = dimension(grid.height())?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        Luma([quantize(grid[(y as usize, x as usize)])])
    }))
}

/// Round and clip one intensity to a byte.
pub fn quantize(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Load an image file as a grayscale grid.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let grid = ImageProcessor::open(path.as_ref())?.to_grid();
    debug!(height = grid.height(), width = grid.width(), "Grid loaded");
    Ok(grid)
}

/// Quantize `grid` and write it as an 8-bit grayscale image. The format is
/// inferred from the file extension.
#[instrument(skip_all, fields(height = grid.height(), width = grid.width(), path = %path.as_ref().display()))]
pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let image = grid_to_luma(grid)?;
    image.save(path.as_ref()).map_err(|err| {
        GlattwerkError::ImageError(format!(
            "failed to save image to {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    debug!("Grid saved");
    Ok(())
}

fn dimension(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| GlattwerkError::ImageError(format!("dimension {len} exceeds u32")))
}
