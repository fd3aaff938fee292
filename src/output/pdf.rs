//! HTML-to-PDF conversion via the external `wkhtmltopdf` executable.
//!
//! The rendered HTML is written to a temporary `<name>.pdf.html` file next
//! to the target, converted with a fixed option set (US Letter page size,
//! 1920x1080 viewport, local file access, print media type), and the
//! temporary file is removed whether or not conversion succeeded.

use crate::error::RenderError;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Converts a rendered HTML string into a PDF at `target`.
///
/// # Errors
/// * [`RenderError::ConverterUnavailable`] if `wkhtmltopdf` cannot be started
/// * [`RenderError::ConversionFailed`] if it exits with a non-zero status
pub fn convert(html: &str, target: &Path) -> Result<(), RenderError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = target.with_extension("pdf.html");
    fs::write(&tmp, html)?;

    debug!("running wkhtmltopdf on {}", tmp.display());
    let result = Command::new("wkhtmltopdf")
        .arg("--page-size")
        .arg("Letter")
        .arg("page")
        .arg(&tmp)
        .arg("--viewport-size")
        .arg("1920x1080")
        .arg("--enable-local-file-access")
        .arg("--print-media-type")
        .arg(target)
        .status();

    // Temp HTML must not outlive the conversion attempt, pass or fail
    if let Err(err) = fs::remove_file(&tmp) {
        warn!("failed to remove {}: {}", tmp.display(), err);
    }

    let status = result.map_err(RenderError::ConverterUnavailable)?;
    if !status.success() {
        return Err(RenderError::ConversionFailed { status });
    }

    Ok(())
}
