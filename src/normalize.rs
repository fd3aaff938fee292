//! Resume normalization — the data-shaping core of `remould`.
//!
//! Raw resume JSON is close to template-ready but not quite: profiles come
//! as a list, dates come as strings, contact fields may be stale, and
//! language entries are row-oriented where templates want columns. This
//! module reshapes all of that in one pure pass:
//!
//! - `basics.profiles`: list → map keyed by lower-cased network name
//! - `basics.phone` / `basics.email`: replaced with supplied values,
//!   phone formatted as `(AAA) BBB - CCCC`
//! - any entry field in the dated categories whose name contains `date`
//!   (case-insensitive) is replaced with a parsed [`CoercedDate`]
//! - a top-level `zipLanguages` holds the transposed `languages` table
//!
//! The input record is never mutated; normalization is a pure function of
//! `(record, phone, email)`.

use crate::data::{CoercedDate, NormalizedResume, ResumeRecord, DATED_CATEGORIES};
use crate::error::RenderError;
use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

/// Produces the template-ready form of a resume.
///
/// # Arguments
/// * `record` - The raw resume document
/// * `phone` - Externally supplied phone number; any non-digit characters
///   are stripped, and the remainder must be exactly 10 digits
/// * `email` - Externally supplied email address, stored verbatim
///
/// # Errors
/// * [`RenderError::MalformedResume`] if the structure the reshaping
///   relies on is missing (no `basics` object, a profile without a
///   `network`, a non-array category)
/// * [`RenderError::InvalidPhone`] if the phone does not reduce to 10 digits
/// * [`RenderError::DateParse`] if a `date`-bearing field cannot be parsed
pub fn normalize(
    record: &ResumeRecord,
    phone: &str,
    email: &str,
) -> Result<NormalizedResume, RenderError> {
    let mut root = record.0.clone();

    let basics = root
        .get_mut("basics")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| RenderError::MalformedResume("missing `basics` object".to_string()))?;

    if let Some(profiles) = basics.get("profiles") {
        let reshaped = reshape_profiles(profiles)?;
        basics.insert("profiles".to_string(), Value::Object(reshaped));
    }

    basics.insert("phone".to_string(), Value::String(format_phone(phone)?));
    basics.insert("email".to_string(), Value::String(email.to_string()));

    for category in DATED_CATEGORIES {
        if let Some(value) = root.get_mut(category) {
            coerce_category_dates(category, value)?;
        }
    }

    let zipped = transpose_languages(root.get("languages"))?;
    root.insert("zipLanguages".to_string(), Value::Array(zipped));

    Ok(NormalizedResume(root))
}

/// Rebuilds the profile list as a map keyed by lower-cased network name.
/// Entries are visited in list order, so the last entry wins for a
/// duplicated network.
fn reshape_profiles(profiles: &Value) -> Result<Map<String, Value>, RenderError> {
    let entries = profiles.as_array().ok_or_else(|| {
        RenderError::MalformedResume("`basics.profiles` must be an array".to_string())
    })?;

    let mut reshaped = Map::new();
    for entry in entries {
        let network = entry
            .get("network")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RenderError::MalformedResume(
                    "profile entry without a string `network` field".to_string(),
                )
            })?;
        reshaped.insert(network.to_lowercase(), entry.clone());
    }

    Ok(reshaped)
}

/// Formats a phone number as `(AAA) BBB - CCCC`.
///
/// Non-digit characters are stripped first, so `555-123-4567` and
/// `(555) 1234567` are both accepted. Anything that does not reduce to
/// exactly 10 digits is rejected.
pub fn format_phone(raw: &str) -> Result<String, RenderError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(RenderError::InvalidPhone { digits });
    }
    Ok(format!(
        "({}) {} - {}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}

/// Replaces every `date`-bearing field in a category's entries with a
/// parsed [`CoercedDate`]. The match is a literal substring check on the
/// lower-cased field name: `startDate`, `releaseDate`, and even
/// `validated` qualify, while `verified` does not.
fn coerce_category_dates(category: &str, value: &mut Value) -> Result<(), RenderError> {
    let entries = value.as_array_mut().ok_or_else(|| {
        RenderError::MalformedResume(format!("`{}` must be an array", category))
    })?;

    for entry in entries {
        let Some(fields) = entry.as_object_mut() else {
            continue;
        };
        let date_keys: Vec<String> = fields
            .keys()
            .filter(|key| key.to_lowercase().contains("date"))
            .cloned()
            .collect();
        for key in date_keys {
            let raw = fields[&key].as_str().ok_or_else(|| RenderError::DateParse {
                field: key.clone(),
                value: fields[&key].to_string(),
            })?;
            let date = parse_date(raw).ok_or_else(|| RenderError::DateParse {
                field: key.clone(),
                value: raw.to_string(),
            })?;
            let coerced = serde_json::to_value(CoercedDate::from(date))?;
            fields.insert(key, coerced);
        }
    }

    Ok(())
}

/// Parses the date representations resumes use in the wild.
///
/// Accepted forms: RFC 3339 timestamps, `YYYY-MM-DD`, `YYYY-MM` (first of
/// the month), bare `YYYY` (January 1st), `MM/DD/YYYY`, and the textual
/// `Month D, YYYY` / `D Month YYYY` forms.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // YYYY-MM: pin the day to the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d") {
        return Some(date);
    }
    // Bare year: pin to January 1st
    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = trimmed.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

/// Transposes the `languages` table from rows to columns.
///
/// Each entry contributes its values in field order; tuple `k` collects
/// value `k` of every entry. Like Python's `zip(*rows)`, the output is
/// truncated to the shortest entry, so non-uniform entries degrade
/// deterministically instead of erroring. A missing or empty `languages`
/// section yields an empty list.
fn transpose_languages(languages: Option<&Value>) -> Result<Vec<Value>, RenderError> {
    let Some(languages) = languages else {
        return Ok(Vec::new());
    };
    let entries = languages.as_array().ok_or_else(|| {
        RenderError::MalformedResume("`languages` must be an array".to_string())
    })?;

    let mut rows: Vec<Vec<&Value>> = Vec::with_capacity(entries.len());
    for entry in entries {
        let fields = entry.as_object().ok_or_else(|| {
            RenderError::MalformedResume("`languages` entries must be objects".to_string())
        })?;
        rows.push(fields.values().collect());
    }

    let width = rows.iter().map(Vec::len).min().unwrap_or(0);
    let mut zipped = Vec::with_capacity(width);
    for k in 0..width {
        let tuple: Vec<Value> = rows.iter().map(|row| row[k].clone()).collect();
        zipped.push(Value::Array(tuple));
    }

    Ok(zipped)
}
