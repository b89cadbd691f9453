// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quality metrics — mean squared error and peak signal-to-noise ratio.

pub mod psnr;

pub use psnr::{MAX_PIXEL_VALUE, mse, psnr};
