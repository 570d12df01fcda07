//! Template functions available to every section template.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use minijinja::Value;
use serde::Deserialize;

use crate::icons::icon_svg;

/// Number of glyphs in a rating row.
pub const STAR_COUNT: usize = 5;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// How dates are printed.
///
/// Output never depends on the host locale or timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `1/15/2024`, the en-US short form
    #[default]
    Numeric,
    /// `January 15, 2024`
    Long,
}

/// `icon(name, class?)`
pub fn icon(name: Option<Value>, class: Option<Value>) -> Value {
    let name = name.as_ref().and_then(|v| v.as_str()).unwrap_or_default();
    let class = class
        .as_ref()
        .and_then(|v| v.as_str())
        .unwrap_or("w-6 h-6");

    Value::from_safe_string(icon_svg(name, class))
}

/// `stars(rating)`
pub fn stars(rating: Option<Value>) -> Value {
    let rating = rating.as_ref().map(numeric).unwrap_or(f64::NAN);
    Value::from_safe_string(star_row(rating))
}

/// Render five star glyphs; glyph `i` (0-based) is filled when `i < rating`.
///
/// The rating is not clamped, so values above five fill the whole row and values at or
/// below zero (or NaN) leave it empty.
pub fn star_row(rating: f64) -> String {
    (0..STAR_COUNT)
        .map(|i| {
            let (state, color) = if (i as f64) < rating {
                ("filled", "text-yellow-400")
            } else {
                ("empty", "text-gray-300")
            };
            format!(
                r#"<svg class="w-5 h-5 {}" data-star="{}" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true"><path d="{}"/></svg>"#,
                color, state, STAR_PATH
            )
        })
        .collect()
}

/// Numeric value of a template value; numeric strings are accepted.
fn numeric(value: &Value) -> f64 {
    if let Some(s) = value.as_str() {
        return s.trim().parse().unwrap_or(f64::NAN);
    }
    f64::try_from(value.clone()).unwrap_or(f64::NAN)
}

/// Format a date value for display.
///
/// Missing values print nothing; values that are not a date print `Invalid Date`.
pub fn format_date(value: Option<&Value>, style: DateStyle) -> String {
    let Some(raw) = value.filter(|v| !v.is_undefined() && !v.is_none()) else {
        return String::new();
    };

    let text = raw.to_string();
    match parse_date(text.trim()) {
        Some(date) => match style {
            DateStyle::Numeric => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            DateStyle::Long => date.format("%B %-d, %Y").to_string(),
        },
        None => "Invalid Date".to_string(),
    }
}

/// Timestamps without an offset, as produced by `datetime-local` inputs and SQL exports.
const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Accepts RFC 3339 timestamps, naive local timestamps and plain `YYYY-MM-DD`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc().date());
    }
    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
