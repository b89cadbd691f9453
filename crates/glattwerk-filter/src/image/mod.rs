// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — file I/O for grids, grayscale/flip/rotate transforms, and
// before/after comparison renders.

pub mod compare;
pub mod grid_io;
pub mod processor;

pub use compare::{COMPARISON_GUTTER, save_comparison, side_by_side};
pub use grid_io::{grid_from_luma, grid_to_luma, load_grid, quantize, save_grid};
pub use processor::ImageProcessor;
