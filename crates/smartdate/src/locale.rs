//! Locale-rendered date components.
//!
//! Field strings come from chrono's bundled locale data (`unstable-locales`),
//! addressed by BCP-47 tag. [`localize`] is total: unrecognized tags fall
//! back to the POSIX locale, the closest analog of host-default behavior.

use chrono::{DateTime, Datelike, FixedOffset, Locale, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::error::FormatError;

/// Locale-rendered field strings for one calendar instant.
///
/// A pure value: derived from an instant and a locale tag on every call,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedComponents {
    /// Day of month, zero-padded to 2 digits ("05", "15").
    pub day: String,
    /// Month number, zero-padded to 2 digits ("01", "12").
    pub month: String,
    /// Full year string ("2024").
    pub year: String,
    /// Long weekday name ("lundi", "Monday").
    pub weekday: String,
    /// Short weekday name ("lun.", "Mon").
    pub weekday_short: String,
    /// Long month name ("janvier", "January").
    pub month_name: String,
    /// Short month name ("janv.", "Jan").
    pub month_name_short: String,
    /// Day of month, 1-31.
    pub day_number: u32,
    /// Month number, 1-12.
    pub month_number: u32,
    /// Calendar year.
    pub year_number: i32,
}

/// Strict BCP-47 tag lookup against chrono's locale data.
///
/// Tags use the `fr-FR` form; chrono's identifiers use the POSIX `fr_FR`
/// form, so the separator is normalized before lookup.
///
/// # Errors
///
/// Returns [`FormatError::UnknownLocale`] if the tag has no locale data.
pub fn resolve(tag: &str) -> Result<Locale, FormatError> {
    let posix = tag.replace('-', "_");
    Locale::try_from(posix.as_str()).map_err(|_| FormatError::UnknownLocale(tag.to_string()))
}

fn resolve_or_default(tag: &str) -> Locale {
    resolve(tag).unwrap_or_else(|_| {
        debug!("unknown locale '{tag}', falling back to POSIX");
        Locale::POSIX
    })
}

/// Render the locale-specific field strings for an instant.
///
/// Fields are read from the instant's wall clock, so shift the instant into
/// the target timezone first.
pub fn localize(instant: &DateTime<FixedOffset>, tag: &str) -> LocalizedComponents {
    let locale = resolve_or_default(tag);

    LocalizedComponents {
        day: instant.format_localized("%d", locale).to_string(),
        month: instant.format_localized("%m", locale).to_string(),
        year: instant.format_localized("%Y", locale).to_string(),
        weekday: instant.format_localized("%A", locale).to_string(),
        weekday_short: instant.format_localized("%a", locale).to_string(),
        month_name: instant.format_localized("%B", locale).to_string(),
        month_name_short: instant.format_localized("%b", locale).to_string(),
        day_number: instant.day(),
        month_number: instant.month(),
        year_number: instant.year(),
    }
}

/// Long weekday names for a locale, Monday first.
pub fn weekday_names(tag: &str) -> Vec<String> {
    let locale = resolve_or_default(tag);
    // Monday, January 4, 2021 anchors the week.
    (0..7)
        .filter_map(|i| NaiveDate::from_ymd_opt(2021, 1, 4 + i))
        .map(|d| d.format_localized("%A", locale).to_string())
        .collect()
}

/// Long month names for a locale, January first.
pub fn month_names(tag: &str) -> Vec<String> {
    let locale = resolve_or_default(tag);
    (1..=12)
        .filter_map(|m| NaiveDate::from_ymd_opt(2021, m, 1))
        .map(|d| d.format_localized("%B", locale).to_string())
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
