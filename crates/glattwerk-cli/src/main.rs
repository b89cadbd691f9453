// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glattwerk — command-line image smoothing and transforms.
//
// Entry point. Initialises logging, parses arguments, and runs the requested
// pipeline.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use glattwerk_core::Result;
use glattwerk_filter::{RunReport, run_smoothing, run_transforms};

use cli::{Cli, Command};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "glattwerk failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Smooth(args) => {
            let params = args.to_params()?;
            let report = run_smoothing(&params)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&report);
            }
        }
        Command::Transform(args) => {
            let params = args.to_params()?;
            let report = run_transforms(&params)?;
            println!("grayscale: {}", report.grayscale.display());
            println!("flipped:   {}", report.flipped.display());
            println!("rotated:   {}", report.rotated.display());
        }
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    let against = report.reference.as_ref().unwrap_or(&report.input);
    println!(
        "{} (filter size {}, PSNR against {})",
        report.input.display(),
        report.filter_size,
        against.display()
    );
    for outcome in &report.outcomes {
        println!(
            "  {:<6} PSNR {:>8.3} dB  -> {}",
            outcome.kind.name(),
            outcome.psnr,
            outcome.output.display()
        );
    }
}
