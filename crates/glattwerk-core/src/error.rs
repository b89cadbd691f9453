// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Glattwerk.

use thiserror::Error;

/// Top-level error type for all Glattwerk operations.
#[derive(Debug, Error)]
pub enum GlattwerkError {
    // -- Grid errors --
    #[error("grid shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        /// `(height, width)` of the left-hand grid.
        expected: (usize, usize),
        /// `(height, width)` of the right-hand grid.
        actual: (usize, usize),
    },

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid is empty")]
    EmptyGrid,

    // -- Filter errors --
    #[error("invalid filter size {0}: must be an odd number >= 1")]
    InvalidFilterSize(usize),

    // -- Image collaborator --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GlattwerkError>;

/// Validate a square filter size and return its padding radius (`size / 2`).
///
/// Even and zero sizes have no centre pixel and are rejected.
pub fn filter_radius(filter_size: usize) -> Result<usize> {
    if filter_size == 0 || filter_size % 2 == 0 {
        return Err(GlattwerkError::InvalidFilterSize(filter_size));
    }
    Ok(filter_size / 2)
}
