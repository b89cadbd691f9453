// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and their merge with the config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glattwerk_core::{Result, SmoothingConfig};
use glattwerk_filter::{SmoothingParams, TransformParams};

/// Glattwerk — grayscale image smoothing and transforms
#[derive(Parser, Debug)]
#[command(name = "glattwerk", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Smooth an image with mean and median filters and report PSNR
    Smooth(SmoothArgs),
    /// Write grayscale, flipped and rotated copies of an image
    Transform(TransformArgs),
}

#[derive(Args, Debug)]
pub struct SmoothArgs {
    /// Noisy input image
    pub input: PathBuf,

    /// Clean image to score against (defaults to the input itself)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Side of the square filter window; must be odd
    #[arg(short = 'k', long)]
    pub filter_size: Option<usize>,

    /// Directory for the filtered images
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the before/after comparison images
    #[arg(long, default_value_t = false)]
    pub no_compare: bool,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Input image
    pub input: PathBuf,

    /// Directory for the transformed images
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Counter-clockwise rotation in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<f32>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Load `path` if given, else defaults.
fn base_config(path: Option<&PathBuf>) -> Result<SmoothingConfig> {
    match path {
        Some(path) => SmoothingConfig::load(path),
        None => Ok(SmoothingConfig::default()),
    }
}

impl SmoothArgs {
    /// Resolve flags over the config file over defaults.
    pub fn to_params(&self) -> Result<SmoothingParams> {
        let mut config = base_config(self.config.as_ref())?;
        if let Some(size) = self.filter_size {
            config.filter_size = size;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_compare {
            config.write_comparison = false;
        }
        config.validate()?;

        Ok(SmoothingParams::from_config(
            self.input.clone(),
            self.reference.clone(),
            &config,
        ))
    }
}

impl TransformArgs {
    pub fn to_params(&self) -> Result<TransformParams> {
        let config = base_config(self.config.as_ref())?;
        Ok(TransformParams {
            input: self.input.clone(),
            output_dir: self.output_dir.clone().unwrap_or(config.output_dir),
            rotation_degrees: self.angle.unwrap_or(config.rotation_degrees),
        })
    }
}
