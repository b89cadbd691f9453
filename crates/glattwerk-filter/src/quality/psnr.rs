// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PSNR — peak signal-to-noise ratio between two equally sized grids.

use glattwerk_core::error::{GlattwerkError, Result};
use glattwerk_core::Grid;
use tracing::{debug, instrument};

/// Peak value of an 8-bit intensity, used as the PSNR signal ceiling.
pub const MAX_PIXEL_VALUE: f64 = 255.0;

/// Mean of the squared per-pixel differences between two grids.
///
/// Fails with `ShapeMismatch` when the shapes differ and with `EmptyGrid` when
/// both grids are empty.
pub fn mse(reference: &Grid, candidate: &Grid) -> Result<f64> {
    reference.ensure_same_shape(candidate)?;
    if reference.is_empty() {
        return Err(GlattwerkError::EmptyGrid);
    }

    let sum: f64 = reference
        .as_slice()
        .iter()
        .zip(candidate.as_slice())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(sum / reference.len() as f64)
}

/// PSNR in decibels: `20·log10(255) − 10·log10(MSE)`.
///
/// Identical grids have zero error and score `f64::INFINITY`. The metric is
/// symmetric in its arguments.
#[instrument(skip_all, fields(height = reference.height(), width = reference.width()))]
pub fn psnr(reference: &Grid, candidate: &Grid) -> Result<f64> {
    let error = mse(reference, candidate)?;
    if error == 0.0 {
        debug!("Grids are identical; PSNR is infinite");
        return Ok(f64::INFINITY);
    }

    let score = 20.0 * MAX_PIXEL_VALUE.log10() - 10.0 * error.log10();
    debug!(mse = error, psnr = score, "PSNR computed");
    Ok(score)
}
