// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Smoothing configuration, persisted as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, filter_radius};

/// Persistent smoothing settings.
///
/// Missing fields in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Side length of the square filter window (odd, >= 1).
    pub filter_size: usize,
    /// Directory that receives filtered images and comparisons.
    pub output_dir: PathBuf,
    /// Write a before/after comparison image next to each filtered output.
    pub write_comparison: bool,
    /// Rotation applied by the transform pipeline, in degrees counter-clockwise.
    pub rotation_degrees: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            filter_size: 3,
            output_dir: PathBuf::from("output"),
            write_comparison: true,
            rotation_degrees: 45.0,
        }
    }
}

impl SmoothingConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the filters cannot run with.
    pub fn validate(&self) -> Result<()> {
        filter_radius(self.filter_size).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlattwerkError;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SmoothingConfig = serde_json::from_str(r#"{ "filter_size": 5 }"#).unwrap();
        assert_eq!(config.filter_size, 5);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.write_comparison);
    }

    #[test]
    fn load_reads_every_setting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glattwerk.json");

        let config = SmoothingConfig {
            filter_size: 7,
            output_dir: PathBuf::from("smoothed"),
            write_comparison: false,
            rotation_degrees: -30.0,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(SmoothingConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_rejects_even_filter_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "filter_size": 4 }"#).unwrap();

        assert!(matches!(
            SmoothingConfig::load(&path),
            Err(GlattwerkError::InvalidFilterSize(4))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SmoothingConfig::load(dir.path().join("absent.json")),
            Err(GlattwerkError::Io(_))
        ));
    }
}
