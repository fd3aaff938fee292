//! Template rendering via `minijinja`.
//!
//! A theme is a directory holding `template.html` and `template.txt`.
//! HTML and PDF outputs both render through the HTML template (PDF is a
//! conversion of the HTML render, not a separate template); plain text
//! uses the text template. Templates receive two bindings: `data`, the
//! normalized resume, and `ext`, the requested format's extension, so a
//! single template can branch on output type.

use crate::cli::OutputFormat;
use crate::data::NormalizedResume;
use crate::error::RenderError;
use minijinja::{context, Environment, UndefinedBehavior};
use std::fs;
use std::path::PathBuf;

/// Renders resume templates from one theme directory.
///
/// The theme directory is an explicit constructor argument; nothing here
/// consults the process working directory.
pub struct Renderer {
    theme_dir: PathBuf,
}

impl Renderer {
    pub fn new(theme_dir: impl Into<PathBuf>) -> Self {
        Renderer {
            theme_dir: theme_dir.into(),
        }
    }

    /// Resolves the template file used for a format: `template.html` for
    /// HTML and PDF, `template.txt` for plain text.
    pub fn template_path(&self, format: OutputFormat) -> PathBuf {
        match format {
            OutputFormat::Html | OutputFormat::Pdf => self.theme_dir.join("template.html"),
            OutputFormat::Txt => self.theme_dir.join("template.txt"),
        }
    }

    /// Renders the resume for one output format.
    ///
    /// # Errors
    /// * [`RenderError::TemplateNotFound`] if the theme lacks the template
    ///   file for this format
    /// * [`RenderError::Template`] if the template references a field the
    ///   data does not have (undefined lookups are strict) or otherwise
    ///   fails to render
    pub fn render(
        &self,
        data: &NormalizedResume,
        format: OutputFormat,
    ) -> Result<String, RenderError> {
        let path = self.template_path(format);
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound { path });
        }
        let source = fs::read_to_string(&path)?;

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        let rendered = env.render_str(
            &source,
            context! {
                data => data,
                ext => format.extension(),
            },
        )?;

        Ok(rendered)
    }
}
