// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Before/after comparison render.

use std::path::Path;

use glattwerk_core::error::{GlattwerkError, Result};
use glattwerk_core::Grid;
use image::{GrayImage, Luma, imageops};

use super::grid_io::grid_to_luma;

/// Width in pixels of the white strip between the two panels.
pub const COMPARISON_GUTTER: u32 = 8;

/// Place `before` and `after` side by side on a white canvas, separated by
/// [`COMPARISON_GUTTER`] pixels. Both panels are top-aligned.
pub fn side_by_side(before: &Grid, after: &Grid) -> Result<GrayImage> {
    let left = grid_to_luma(before)?;
    let right = grid_to_luma(after)?;

    let width = left.width() + COMPARISON_GUTTER + right.width();
    let height = left.height().max(right.height());
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255u8]));

    imageops::replace(&mut canvas, &left, 0, 0);
    imageops::replace(
        &mut canvas,
        &right,
        i64::from(left.width() + COMPARISON_GUTTER),
        0,
    );
    Ok(canvas)
}

/// Render [`side_by_side`] and write it to `path`.
pub fn save_comparison(before: &Grid, after: &Grid, path: impl AsRef<Path>) -> Result<()> {
    side_by_side(before, after)?
        .save(path.as_ref())
        .map_err(|err| {
            GlattwerkError::ImageError(format!(
                "failed to save comparison to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_sit_either_side_of_gutter() {
        let before = Grid::filled(2, 3, 10.0);
        let after = Grid::filled(4, 2, 20.0);

        let canvas = side_by_side(&before, &after).unwrap();
        assert_eq!(canvas.dimensions(), (3 + COMPARISON_GUTTER + 2, 4));

        assert_eq!(canvas.get_pixel(0, 0).0[0], 10);
        assert_eq!(canvas.get_pixel(2, 1).0[0], 10);
        // Below the shorter left panel the canvas stays white.
        assert_eq!(canvas.get_pixel(0, 3).0[0], 255);
        assert_eq!(canvas.get_pixel(3, 0).0[0], 255);
        assert_eq!(canvas.get_pixel(3 + COMPARISON_GUTTER, 3).0[0], 20);
    }
}
