//! Timezone shifting over the IANA database.
//!
//! Shifting never changes the absolute instant, only the wall-clock offset
//! it is expressed in. Unknown zone names degrade to the unshifted instant
//! rather than failing the whole format call; [`resolve`] is the strict
//! variant for callers that want the error.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::error::FormatError;

/// Strict IANA timezone lookup.
///
/// # Errors
///
/// Returns [`FormatError::UnknownTimezone`] if `name` is not a valid IANA
/// timezone name.
pub fn resolve(name: &str) -> Result<Tz, FormatError> {
    name.parse::<Tz>()
        .map_err(|_| FormatError::UnknownTimezone(name.to_string()))
}

/// Re-express `instant` in the named timezone.
///
/// Same absolute time, new wall-clock fields. An unrecognized zone name
/// emits a warning and returns the instant unshifted.
pub fn shift(instant: DateTime<FixedOffset>, timezone: &str) -> DateTime<FixedOffset> {
    match resolve(timezone) {
        Ok(tz) => instant.with_timezone(&tz).fixed_offset(),
        Err(_) => {
            warn!("unknown timezone '{timezone}', keeping instant unshifted");
            instant
        }
    }
}

/// UTC offset of the named timezone at a given instant.
///
/// # Errors
///
/// Returns [`FormatError::UnknownTimezone`] if `name` is not a valid IANA
/// timezone name.
pub fn utc_offset_at(name: &str, instant: DateTime<Utc>) -> Result<FixedOffset, FormatError> {
    let tz = resolve(name)?;
    Ok(instant.with_timezone(&tz).offset().fix())
}

/// UTC offset of the named timezone right now, in hours.
///
/// Fractional for zones like Asia/Kolkata (+5.5). Unknown zones yield `0.0`.
pub fn utc_offset_hours(name: &str) -> f64 {
    utc_offset_at(name, Utc::now())
        .map(|offset| f64::from(offset.local_minus_utc()) / 3600.0)
        .unwrap_or(0.0)
}

// ── Tests ───────────────────────────────────────────────────────────────────
