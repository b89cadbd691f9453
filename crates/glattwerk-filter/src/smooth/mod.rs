// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Smoothing module — replicate padding and the mean/median window filters.

pub mod padding;
pub mod window;

pub use padding::pad;
pub use window::{FilterKind, mean_filter, median, median_filter};
