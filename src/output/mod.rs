//! Output pipeline for the `remould` application.
//!
//! Drives rendering for every requested (theme, format) combination in the
//! order given on the command line, writing one artifact per combination
//! at `<output_dir>/<theme>/<name>.<ext>`. A failing combination is
//! reported and counted but never stops its siblings; the caller decides
//! the process exit status from the summary.

pub mod artifact;
pub mod pdf;

pub use artifact::{ConfirmOverwrite, StdinConfirm};

use crate::cli::OutputFormat;
use crate::data::NormalizedResume;
use crate::error::RenderError;
use crate::render::Renderer;
use log::{error, info};
use std::path::{Path, PathBuf};

/// Everything the pipeline needs besides the data itself.
///
/// All directories are explicit; nothing below this point reads the
/// process working directory.
pub struct PipelineOptions {
    /// Root directory containing one subdirectory per theme.
    pub theme_dir: PathBuf,
    /// Directory artifacts are written into, one subdirectory per theme.
    pub output_dir: PathBuf,
    /// Base name of every artifact file (without extension).
    pub output_name: String,
    /// Replace existing artifacts without prompting.
    pub overwrite: bool,
}

/// Counts of what happened across all combinations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Renders and writes every requested (theme, format) combination.
///
/// Combinations run in the given order. Render or conversion failures are
/// logged per combination and tallied in the summary; declined overwrite
/// prompts count as skips.
pub fn run(
    data: &NormalizedResume,
    themes: &[String],
    formats: &[OutputFormat],
    opts: &PipelineOptions,
    confirm: &mut dyn ConfirmOverwrite,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for theme in themes {
        let renderer = Renderer::new(opts.theme_dir.join(theme));
        for &format in formats {
            let target = artifact_path(opts, theme, format);
            match produce(data, &renderer, format, &target, opts.overwrite, confirm) {
                Ok(true) => {
                    info!("wrote {}", target.display());
                    summary.written += 1;
                }
                Ok(false) => {
                    info!("skipped {}", target.display());
                    summary.skipped += 1;
                }
                Err(err) => {
                    error!("{}/{}: {}", theme, format.extension(), err);
                    summary.failed += 1;
                }
            }
        }
    }

    summary
}

/// Builds the target path for one combination:
/// `<output_dir>/<theme>/<name>.<ext>`.
pub fn artifact_path(opts: &PipelineOptions, theme: &str, format: OutputFormat) -> PathBuf {
    opts.output_dir
        .join(theme)
        .join(format!("{}.{}", opts.output_name, format.extension()))
}

/// Renders and writes a single artifact. Returns `Ok(false)` when an
/// overwrite prompt was declined; a declined artifact is never rendered.
fn produce(
    data: &NormalizedResume,
    renderer: &Renderer,
    format: OutputFormat,
    target: &Path,
    overwrite: bool,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<bool, RenderError> {
    if !artifact::should_write(target, overwrite, confirm) {
        return Ok(false);
    }

    let rendered = renderer.render(data, format)?;

    match format {
        OutputFormat::Html | OutputFormat::Txt => artifact::write_text(target, &rendered)?,
        OutputFormat::Pdf => pdf::convert(&rendered, target)?,
    }

    Ok(true)
}
