//! The public formatting entry point.
//!
//! Composes normalization, timezone shifting, smart-label classification,
//! and template rendering. When smart labels are enabled and a label fires,
//! locale components and the template are never computed.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::parse::DateInput;
use crate::{label, locale, parse, template, timezone};

/// Formatting options.
///
/// Each field defaults independently; use struct-update syntax to override
/// a subset:
///
/// ```
/// use smartdate::FormatOptions;
///
/// let options = FormatOptions {
///     locale: "en-US".to_string(),
///     ..FormatOptions::default()
/// };
/// assert_eq!(options.timezone, "Europe/Paris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// BCP-47 locale tag.
    pub locale: String,
    /// IANA timezone name.
    pub timezone: String,
    /// Template string, see [`crate::template::token_catalogue`].
    pub format: String,
    /// Whether to try relative labels ("Today") before the template.
    pub use_smart_labels: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: "fr-FR".to_string(),
            timezone: "Europe/Paris".to_string(),
            format: "DD/MM/YYYY".to_string(),
            use_smart_labels: true,
        }
    }
}

/// Format a date value with the default options.
///
/// # Errors
///
/// Returns [`FormatError::InvalidInput`] if the input cannot be normalized
/// to a calendar instant.
pub fn format_date(input: impl Into<DateInput>) -> Result<String, FormatError> {
    format_date_with_options(input, &FormatOptions::default())
}

/// Format a date value.
///
/// Steps: normalize the input, shift it into `options.timezone` (unknown
/// zones degrade to the unshifted instant), try a smart label when enabled,
/// otherwise localize the shifted instant and render the template.
///
/// # Errors
///
/// Returns [`FormatError::InvalidInput`] if the input cannot be normalized
/// to a calendar instant. Timezone and locale problems do not fail the
/// call; they degrade as described on [`timezone::shift`] and
/// [`locale::localize`].
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use smartdate::{format_date_with_options, FormatOptions};
///
/// let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();
/// let options = FormatOptions {
///     format: "DD MMMM YYYY".to_string(),
///     timezone: "UTC".to_string(),
///     use_smart_labels: false,
///     ..FormatOptions::default()
/// };
/// assert_eq!(
///     format_date_with_options(instant, &options).unwrap(),
///     "15 janvier 2024"
/// );
/// ```
pub fn format_date_with_options(
    input: impl Into<DateInput>,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let instant = parse::normalize(input.into())?;
    let shifted = timezone::shift(instant, &options.timezone);

    if options.use_smart_labels {
        if let Some(smart_label) = label::smart_label(&shifted, &options.locale) {
            return Ok(smart_label.to_string());
        }
    }

    let components = locale::localize(&shifted, &options.locale);
    Ok(template::render(&options.format, &components, &shifted))
}

// ── Tests ───────────────────────────────────────────────────────────────────
