// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Replicate padding — extend a grid outward by copying its edge and corner
// values, so a centred square window fits over every source pixel.

use glattwerk_core::error::{GlattwerkError, Result, filter_radius};
use glattwerk_core::Grid;
use tracing::{debug, instrument};

/// Replicate-pad `grid` by `filter_size / 2` cells on every side.
///
/// The result has shape `(H + 2p, W + 2p)`. The interior is a copy of `grid`;
/// border rows and columns repeat the nearest source edge, and each `p x p`
/// corner block is filled with the nearest source corner pixel. With
/// `filter_size == 1` the grid is returned unchanged.
///
/// Fails with `InvalidFilterSize` for even or zero sizes and for sizes whose
/// padded shape would overflow, and with `EmptyGrid`
/// when padding is requested for a grid with no edge to replicate.
#[instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn pad(grid: &Grid, filter_size: usize) -> Result<Grid> {
    let p = filter_radius(filter_size)?;
    if p == 0 {
        return Ok(grid.clone());
    }
    if grid.is_empty() {
        return Err(GlattwerkError::EmptyGrid);
    }

    let (height, width) = grid.shape();
    let padded_dim = |len: usize| {
        p.checked_mul(2)
            .and_then(|border| len.checked_add(border))
            .ok_or(GlattwerkError::InvalidFilterSize(filter_size))
    };
    let mut padded = Grid::new(padded_dim(height)?, padded_dim(width)?);

    // Interior.
    for row in 0..height {
        padded.row_mut(p + row)[p..p + width].copy_from_slice(grid.row(row));
    }

    // Top and bottom bands over the horizontal extent of the source.
    let first_row = grid.row(0);
    let last_row = grid.row(height - 1);
    for offset in 0..p {
        padded.row_mut(offset)[p..p + width].copy_from_slice(first_row);
        padded.row_mut(p + height + offset)[p..p + width].copy_from_slice(last_row);
    }

    // Left and right bands over the vertical extent of the source.
    for row in 0..height {
        let left = grid[(row, 0)];
        let right = grid[(row, width - 1)];
        let target = padded.row_mut(p + row);
        target[..p].fill(left);
        target[p + width..].fill(right);
    }

    // Corner blocks take the nearest source corner.
    let (bottom, right) = (p + height, p + width);
    padded.fill_rect(0, 0, p, p, grid[(0, 0)]);
    padded.fill_rect(0, right, p, p, grid[(0, width - 1)]);
    padded.fill_rect(bottom, 0, p, p, grid[(height - 1, 0)]);
    padded.fill_rect(bottom, right, p, p, grid[(height - 1, width - 1)]);

    debug!(
        padded_height = padded.height(),
        padded_width = padded.width(),
        "Replicate padding applied"
    );
    Ok(padded)
}
