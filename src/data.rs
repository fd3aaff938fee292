//! Data structures for resume documents.
//!
//! This module defines the two document states the tool moves between:
//! [`ResumeRecord`], the raw JSON resume as loaded from disk, and
//! [`NormalizedResume`], the template-ready shape produced by
//! [`crate::normalize::normalize`]. Both are thin newtypes over an ordered
//! JSON map — resume sections are free-form key/value objects, and field
//! order matters for the language transposition, so `serde_json` is built
//! with `preserve_order`.

use crate::error::RenderError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The resume categories whose entries may carry date-bearing fields.
pub const DATED_CATEGORIES: [&str; 5] =
    ["work", "volunteer", "education", "awards", "publications"];

/// A raw resume document, as loaded from a JSON file.
///
/// Sections (`basics`, `work`, `languages`, ...) are kept as free-form
/// JSON values; only the handful of fields the normalizer touches have
/// any structure imposed on them, and only at normalization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeRecord(pub Map<String, Value>);

impl ResumeRecord {
    /// Loads and parses a resume JSON file.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path)?;
        let record: ResumeRecord = serde_json::from_str(&text)?;
        Ok(record)
    }

    /// Returns `basics.name`, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("basics")?.get("name")?.as_str()
    }
}

/// The template-ready form of a resume.
///
/// Compared to [`ResumeRecord`]: profiles are keyed by network, phone and
/// email hold the externally supplied values, `date`-bearing fields carry
/// parsed [`CoercedDate`] objects, and a top-level `zipLanguages` holds the
/// transposed language table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedResume(pub Map<String, Value>);

/// A parsed calendar date, in the shape templates consume.
///
/// Templates can reach for `{{ item.startDate.year }}` or the canonical
/// `{{ item.startDate.iso }}` rendering without re-parsing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercedDate {
    pub iso: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub day: u32,
}

impl From<NaiveDate> for CoercedDate {
    fn from(date: NaiveDate) -> Self {
        CoercedDate {
            iso: date.format("%Y-%m-%d").to_string(),
            year: date.year(),
            month: date.month(),
            month_name: date.format("%B").to_string(),
            day: date.day(),
        }
    }
}
