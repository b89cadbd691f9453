// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glattwerk — Core grid type, error definitions, and configuration shared
// across all crates.

pub mod config;
pub mod error;
pub mod grid;

pub use config::SmoothingConfig;
pub use error::{GlattwerkError, Result};
pub use grid::Grid;
