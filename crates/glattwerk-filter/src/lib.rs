// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// glattwerk-filter — Grayscale smoothing for Glattwerk.
//
// Provides replicate padding and the mean/median window filters, the PSNR
// quality metric, image collaborators (grid load/save, grayscale, flip,
// rotate, side-by-side comparison), and file-to-file pipelines tying them
// together.

pub mod image;
pub mod pipeline;
pub mod quality;
pub mod smooth;

// Re-export the primary entry points so callers can use
// `glattwerk_filter::median_filter` etc.
pub use crate::image::processor::ImageProcessor;
pub use crate::image::{load_grid, save_grid};
pub use pipeline::{
    RunReport, SmoothingParams, TransformParams, TransformReport, run_smoothing, run_transforms,
};
pub use quality::{mse, psnr};
pub use smooth::{FilterKind, mean_filter, median_filter, pad};
