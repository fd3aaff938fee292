//! Library crate for remould
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Normalization**: Pure reshaping of a raw resume into template-ready form
//! - **Template Rendering**: minijinja-backed theme templates for HTML and text
//! - **Output Pipeline**: One artifact per (theme, format) combination,
//!   including PDF conversion through wkhtmltopdf
//!
//! # Modules
//!
//! - [`data`]: Core document types (`ResumeRecord`, `NormalizedResume`, `CoercedDate`)
//! - [`cli`]: Command-line interface definitions
//! - [`normalize`]: The data normalizer
//! - [`render`]: Theme template rendering
//! - [`output`]: Artifact writing, overwrite prompts, and PDF conversion
//! - [`error`]: The `RenderError` taxonomy

pub mod cli;
pub mod data;
pub mod error;
pub mod normalize;
pub mod output;
pub mod render;

pub use cli::{Args, OutputFormat};
pub use data::{CoercedDate, NormalizedResume, ResumeRecord};
pub use error::RenderError;
pub use normalize::normalize;
pub use render::Renderer;
