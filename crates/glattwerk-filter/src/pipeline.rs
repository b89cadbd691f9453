// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipelines — end-to-end runs over image files with explicit parameters:
// smoothing (mean + median, scored with PSNR) and the grayscale/flip/rotate
// transform chain.

use std::path::{Path, PathBuf};

use glattwerk_core::error::{Result, filter_radius};
use glattwerk_core::{Grid, SmoothingConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::image::{ImageProcessor, load_grid, save_comparison, save_grid};
use crate::quality::psnr;
use crate::smooth::FilterKind;

// -- Smoothing ----------------------------------------------------------------

/// Inputs for [`run_smoothing`].
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingParams {
    /// Noisy image to smooth.
    pub input: PathBuf,
    /// Clean image to score against. When absent, scores are taken against
    /// `input` itself.
    pub reference: Option<PathBuf>,
    /// Square window side (odd, >= 1).
    pub filter_size: usize,
    /// Directory for the filtered images; created if missing.
    pub output_dir: PathBuf,
    /// Also write a before/after comparison per filter.
    pub write_comparison: bool,
}

impl SmoothingParams {
    /// Build params for `input` from a config.
    pub fn from_config(
        input: impl Into<PathBuf>,
        reference: Option<PathBuf>,
        config: &SmoothingConfig,
    ) -> Self {
        Self {
            input: input.into(),
            reference,
            filter_size: config.filter_size,
            output_dir: config.output_dir.clone(),
            write_comparison: config.write_comparison,
        }
    }
}

/// Outcome of one filter within a smoothing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub kind: FilterKind,
    pub output: PathBuf,
    pub comparison: Option<PathBuf>,
    /// PSNR in dB; `null` in JSON when the output is identical to the
    /// reference (infinite score).
    #[serde(with = "finite_or_null")]
    pub psnr: f64,
}

/// Result of [`run_smoothing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub reference: Option<PathBuf>,
    pub filter_size: usize,
    pub outcomes: Vec<FilterOutcome>,
}

impl RunReport {
    /// The outcome for `kind`, if it ran.
    pub fn outcome(&self, kind: FilterKind) -> Option<&FilterOutcome> {
        self.outcomes.iter().find(|outcome| outcome.kind == kind)
    }
}

/// Smooth `params.input` with every [`FilterKind`], write the results, and
/// score each against the reference.
///
/// Output files are named `<stem>_<kind>_k<size>.png`, with comparisons at
/// `<stem>_<kind>_k<size>_compare.png`.
#[instrument(skip_all, fields(input = %params.input.display(), filter_size = params.filter_size))]
pub fn run_smoothing(params: &SmoothingParams) -> Result<RunReport> {
    filter_radius(params.filter_size)?;

    let noisy = load_grid(&params.input)?;
    let reference = match &params.reference {
        Some(path) => {
            let reference = load_grid(path)?;
            reference.ensure_same_shape(&noisy)?;
            Some(reference)
        }
        None => None,
    };
    let score_against: &Grid = reference.as_ref().unwrap_or(&noisy);

    std::fs::create_dir_all(&params.output_dir)?;
    let stem = file_stem(&params.input);

    let mut outcomes = Vec::with_capacity(FilterKind::ALL.len());
    for kind in FilterKind::ALL {
        let smoothed = kind.apply(&noisy, params.filter_size)?;

        let name = format!("{stem}_{kind}_k{}", params.filter_size);
        let output = params.output_dir.join(format!("{name}.png"));
        save_grid(&smoothed, &output)?;

        let comparison = if params.write_comparison {
            let path = params.output_dir.join(format!("{name}_compare.png"));
            save_comparison(&noisy, &smoothed, &path)?;
            Some(path)
        } else {
            None
        };

        let score = psnr(score_against, &smoothed)?;
        info!(filter = %kind, psnr = score, output = %output.display(), "Filter applied");

        outcomes.push(FilterOutcome {
            kind,
            output,
            comparison,
            psnr: score,
        });
    }

    Ok(RunReport {
        input: params.input.clone(),
        reference: params.reference.clone(),
        filter_size: params.filter_size,
        outcomes,
    })
}

// -- Transforms ---------------------------------------------------------------

/// Inputs for [`run_transforms`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Counter-clockwise rotation applied to the grayscale image.
    pub rotation_degrees: f32,
}

/// Files written by [`run_transforms`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformReport {
    pub grayscale: PathBuf,
    pub flipped: PathBuf,
    pub rotated: PathBuf,
}

/// Convert `params.input` to grayscale, then save it alongside a horizontally
/// flipped copy and a rotated copy.
#[instrument(skip_all, fields(input = %params.input.display(), degrees = params.rotation_degrees))]
pub fn run_transforms(params: &TransformParams) -> Result<TransformReport> {
    let gray = ImageProcessor::open(&params.input)?.grayscale();

    std::fs::create_dir_all(&params.output_dir)?;
    let stem = file_stem(&params.input);
    let report = TransformReport {
        grayscale: params.output_dir.join(format!("{stem}_gray.png")),
        flipped: params.output_dir.join(format!("{stem}_gray_flipped.png")),
        rotated: params.output_dir.join(format!("{stem}_gray_rotated.png")),
    };

    gray.save(&report.grayscale)?;
    let flipped = ImageProcessor::from_dynamic(gray.as_dynamic().clone()).flip_horizontal();
    flipped.save(&report.flipped)?;
    gray.rotate(params.rotation_degrees).save(&report.rotated)?;

    debug!(?report, "Transforms written");
    Ok(report)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned())
}

/// JSON has no infinity, so infinite scores are written as `null` and read
/// back as `f64::INFINITY`.
mod finite_or_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
