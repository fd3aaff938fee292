//! Artifact writing and overwrite protection.
//!
//! Text artifacts (HTML, plain text) are written directly; the PDF path
//! lives in [`crate::output::pdf`]. Overwrite confirmation goes through
//! the [`ConfirmOverwrite`] trait so the pipeline can be driven by a
//! scripted answer in tests while the binary prompts on stdin.

use crate::error::RenderError;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decides whether an existing artifact may be replaced.
pub trait ConfirmOverwrite {
    fn confirm(&mut self, path: &Path) -> bool;
}

/// Interactive confirmation on stdin. Any answer other than `y`/`yes`
/// (case-insensitive) declines.
pub struct StdinConfirm;

impl ConfirmOverwrite for StdinConfirm {
    fn confirm(&mut self, path: &Path) -> bool {
        print!("overwrite {}? [y/N] ", path.display());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Returns whether `path` may be written: always when it does not exist or
/// overwriting was requested up front, otherwise by asking `confirm`.
pub fn should_write(path: &Path, overwrite: bool, confirm: &mut dyn ConfirmOverwrite) -> bool {
    if overwrite || !path.exists() {
        return true;
    }
    confirm.confirm(path)
}

/// Writes a rendered artifact as UTF-8 text, creating parent directories
/// as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
