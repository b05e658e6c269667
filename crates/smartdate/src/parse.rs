//! Input normalization: heterogeneous date values → one calendar instant.
//!
//! Every public formatting operation starts here. [`DateInput`] covers the
//! accepted input shapes (typed chrono values, epoch milliseconds, date
//! strings), and [`normalize`] collapses them into a `DateTime<FixedOffset>`
//! — an absolute instant carrying the wall-clock offset it is expressed in.
//!
//! Naive values (no offset) are interpreted in the ambient local timezone.

use std::time::SystemTime;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use crate::error::FormatError;

/// A date value accepted by [`normalize`].
///
/// Construct via the `From` impls rather than naming variants directly:
/// `DateTime<Utc>`, `DateTime<FixedOffset>`, `DateTime<Local>`,
/// `NaiveDateTime`, `NaiveDate`, `SystemTime`, `i64` (epoch milliseconds),
/// `&str` and `String` all convert.
#[derive(Debug, Clone)]
pub enum DateInput {
    /// An absolute instant with an explicit UTC offset.
    Instant(DateTime<FixedOffset>),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// A wall-clock datetime without offset, read in the ambient local timezone.
    Naive(NaiveDateTime),
    /// A date string in one of the recognized shapes.
    Text(String),
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Instant(dt)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt.fixed_offset())
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Instant(dt.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Naive(date.and_time(NaiveTime::MIN))
    }
}

impl From<SystemTime> for DateInput {
    fn from(t: SystemTime) -> Self {
        Self::Instant(DateTime::<Utc>::from(t).fixed_offset())
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::EpochMillis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Normalize any accepted input into a calendar instant.
///
/// # Errors
///
/// Returns [`FormatError::InvalidInput`] for an unparseable string, an
/// out-of-range epoch timestamp, or a naive datetime that does not exist
/// in the ambient local timezone (DST gap with no earliest mapping).
pub fn normalize(input: DateInput) -> Result<DateTime<FixedOffset>, FormatError> {
    match input {
        DateInput::Instant(dt) => Ok(dt),
        DateInput::EpochMillis(millis) => DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| {
                FormatError::InvalidInput(format!("timestamp out of range: {millis}"))
            }),
        DateInput::Naive(naive) => from_ambient_local(naive),
        DateInput::Text(text) => parse_text(text.trim()),
    }
}

/// Read a naive datetime in the ambient local timezone.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
fn from_ambient_local(naive: NaiveDateTime) -> Result<DateTime<FixedOffset>, FormatError> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| FormatError::InvalidInput(format!("nonexistent local time: {naive}")))
}

/// Try each recognized string shape in order of specificity.
fn parse_text(s: &str) -> Result<DateTime<FixedOffset>, FormatError> {
    if s.is_empty() {
        return Err(FormatError::InvalidInput("empty date string".to_string()));
    }

    // RFC 3339 with explicit offset ("2024-01-15T14:30:45Z", "...+01:00")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    // ISO datetime without offset, optional fractional seconds → ambient local
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return from_ambient_local(naive);
    }

    // ISO date → ambient local midnight
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return from_ambient_local(date.and_time(NaiveTime::MIN));
    }

    // Slash date, day-first ("15/01/2024")
    if let Some(naive) = parse_slash_date(s) {
        return from_ambient_local(naive);
    }

    // RFC 2822 ("Mon, 15 Jan 2024 14:30:45 +0100")
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt);
    }

    Err(FormatError::InvalidInput(format!(
        "unable to parse date string: '{s}'"
    )))
}

/// Parse `D/M/YYYY` with a 4-digit year. Day-first; when day-first is not a
/// valid calendar date ("01/13/2024"), the month-first reading is accepted.
fn parse_slash_date(s: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 || parts[0].len() > 2 || parts[1].len() > 2 || parts[2].len() != 4 {
        return None;
    }

    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, second, first)
        .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
        .map(|d| d.and_time(NaiveTime::MIN))
}

// ── Tests ───────────────────────────────────────────────────────────────────
