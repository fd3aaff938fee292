//! CLI interface definitions for the `remould` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputFormat`]: the supported artifact formats (`html`, `pdf`, `txt`)
//!
//! # Example
//!
//! ```bash
//! remould --input resume.json --themes handmade,plain --formats html,txt
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `remould` resume renderer.
///
/// Unsupported formats are rejected by clap at parse time; theme names are
/// validated against the theme directory before any rendering starts.
#[derive(Parser, Debug)]
#[command(name = "remould", author = "Sam Green", version, about)]
pub struct Args {
    /// Path to the resume JSON file (must have a .json extension)
    #[arg(long, default_value = "resume.json")]
    pub input: PathBuf,

    /// Directory artifacts are written into, one subdirectory per theme
    #[arg(long, default_value = "./out")]
    pub output: PathBuf,

    /// Root directory containing one subdirectory per theme
    #[arg(long = "theme-dir", value_name = "DIR", default_value = "./themes")]
    pub theme_dir: PathBuf,

    /// Themes to render, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "handmade")]
    pub themes: Vec<String>,

    /// Output formats to produce, comma-separated
    #[arg(long, value_enum, value_delimiter = ',', default_value = "pdf,html,txt")]
    pub formats: Vec<OutputFormat>,

    /// Overwrite existing artifacts without prompting
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Name output files after `basics.name` instead of the input file stem
    #[arg(long = "use-name-in-files", default_value_t = false)]
    pub use_name_in_files: bool,

    /// Phone number substituted into the rendered resume (10 digits)
    #[arg(long, default_value = "5555555555")]
    pub phone: String,

    /// Email address substituted into the rendered resume
    #[arg(long, default_value = "resume@example.com")]
    pub email: String,

    /// Enable debug-level logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Rejects bad configuration before anything is rendered or written:
    /// the input file must carry a `.json` extension, and every requested
    /// theme must exist as a directory under the theme root.
    pub fn validate(&self, themes: &[String]) -> Result<()> {
        if self.input.extension().and_then(|ext| ext.to_str()) != Some("json") {
            bail!(
                "input file must have a .json extension: {}",
                self.input.display()
            );
        }
        for theme in themes {
            let theme_path = self.theme_dir.join(theme);
            if !theme_path.is_dir() {
                bail!(
                    "unknown theme '{}': no directory at {}",
                    theme,
                    theme_path.display()
                );
            }
        }
        Ok(())
    }
}

/// The artifact formats a theme can be rendered to.
///
/// `Html` and `Pdf` both render through the theme's HTML template; `Pdf`
/// additionally pipes the result through wkhtmltopdf.
#[derive(Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Debug)]
pub enum OutputFormat {
    Html,
    Pdf,
    Txt,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Txt => "txt",
        }
    }
}

/// Deduplicates a list while preserving first-occurrence order.
///
/// Multi-value options stay in the order the user gave them, so output
/// order is reproducible (unlike set-based iteration).
pub fn dedup_preserve_order<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}
