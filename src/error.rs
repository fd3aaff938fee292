//! Error types for the `remould` resume renderer.
//!
//! All library-level failures funnel into [`RenderError`]. The binary wraps
//! these with `anyhow` context at the top level; configuration problems
//! (bad input extension, unknown theme) are reported there before any
//! rendering starts and never reach this enum.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures that can occur while normalizing or rendering a resume.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The resume document does not have the expected structure
    /// (e.g. a profile entry without a `network` field).
    #[error("malformed resume: {0}")]
    MalformedResume(String),

    /// The supplied phone number does not reduce to exactly 10 digits.
    #[error("phone number must contain exactly 10 digits (got {digits:?})")]
    InvalidPhone { digits: String },

    /// A `date`-bearing field holds a value that cannot be interpreted
    /// as a calendar date. Fatal to the whole run, since normalization
    /// is a precondition for all rendering.
    #[error("cannot parse date field {field:?} with value {value:?}")]
    DateParse { field: String, value: String },

    /// The theme directory lacks the template file for the requested format.
    #[error("template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// The templating engine rejected the template or the data
    /// (missing field reference, unsupported operation).
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// The external HTML-to-PDF converter exited with a failure status.
    #[error("wkhtmltopdf exited with {status}")]
    ConversionFailed { status: ExitStatus },

    /// The external HTML-to-PDF converter could not be started at all.
    #[error("wkhtmltopdf could not be started: {0}")]
    ConverterUnavailable(std::io::Error),

    /// The input document is not valid JSON.
    #[error("invalid resume JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
