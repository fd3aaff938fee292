//! Main entry point for the `remould` CLI application.
//!
//! `remould` regenerates formatted resume documents from a single JSON
//! source. Each run loads the resume, normalizes it into template-ready
//! shape, and renders one artifact per requested (theme, format)
//! combination under `<output>/<theme>/`.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Validates configuration (input extension, theme directories) before
//!   any rendering
//! - Delegates data reshaping to [`normalize`] and artifact production to
//!   [`output::run`]
//!
//! # Flags of Interest
//! - `--themes LIST`: Render several themes in one run
//! - `--formats LIST`: Any of `html`, `pdf`, `txt`
//! - `--overwrite`: Replace existing artifacts without prompting
//! - `--use-name-in-files`: Name artifacts after `basics.name`
//!
//! # Modules
//! - [`normalize`] - pure resume reshaping
//! - [`render`] - theme template rendering
//! - [`output`] - artifact writing and PDF conversion

use anyhow::{bail, Context, Result};
use clap::Parser;

mod cli;
use cli::{dedup_preserve_order, Args, OutputFormat};
mod data;
use data::ResumeRecord;
mod error;
mod normalize;
use normalize::normalize;
mod render;
pub mod output;
use output::{PipelineOptions, StdinConfirm};

/// Initializes env_logger, honoring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Picks the artifact base name: `basics.name` when requested (falling
/// back to the input stem if the resume has no name), otherwise the input
/// file's stem.
fn output_name(args: &Args, record: &ResumeRecord) -> String {
    let stem = args
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("resume");

    if args.use_name_in_files {
        record.name().unwrap_or(stem).to_string()
    } else {
        stem.to_string()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let themes = dedup_preserve_order(&args.themes);
    let formats: Vec<OutputFormat> = dedup_preserve_order(&args.formats);

    args.validate(&themes)?;

    let record = ResumeRecord::from_path(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let normalized = normalize(&record, &args.phone, &args.email)?;

    let opts = PipelineOptions {
        theme_dir: args.theme_dir.clone(),
        output_dir: args.output.clone(),
        output_name: output_name(&args, &record),
        overwrite: args.overwrite,
    };

    let summary = output::run(&normalized, &themes, &formats, &opts, &mut StdinConfirm);

    println!(
        "{} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    );
    if summary.failed > 0 {
        bail!("{} combination(s) failed", summary.failed);
    }

    Ok(())
}
