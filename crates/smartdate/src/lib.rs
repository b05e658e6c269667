//! # smartdate
//!
//! Locale-aware date formatting for applications that want readable dates
//! without a full internationalization framework.
//!
//! A single entry point turns any date-ish value (chrono types, epoch
//! milliseconds, common date strings) into a display string driven by a
//! template, a BCP-47 locale, an IANA timezone, and an optional "smart
//! label" pass that prefers relative wording ("Aujourd'hui", "Last week")
//! over absolute dates when the value is close to now.
//!
//! ## Modules
//!
//! - [`parse`] — heterogeneous input → calendar instant
//! - [`timezone`] — IANA timezone shifting, offset queries
//! - [`locale`] — locale-rendered field strings (day, month, weekday names)
//! - [`label`] — relative-date classification and label tables
//! - [`template`] — token substitution and the token catalogue
//! - [`format`] — the composed `format_date` entry point
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use chrono::TimeZone;
//! use smartdate::{format_date_with_options, FormatOptions};
//!
//! let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();
//! let options = FormatOptions {
//!     timezone: "UTC".to_string(),
//!     use_smart_labels: false,
//!     ..FormatOptions::default()
//! };
//! assert_eq!(format_date_with_options(instant, &options).unwrap(), "15/01/2024");
//! ```
//!
//! All functions are pure with respect to their inputs and the crate keeps
//! no mutable state; the label tables and token catalogue are immutable
//! statics, so everything is safe to call from multiple threads.

pub mod error;
pub mod format;
pub mod label;
pub mod locale;
pub mod parse;
pub mod template;
pub mod timezone;

pub use error::{FormatError, Result};
pub use format::{format_date, format_date_with_options, FormatOptions};
pub use label::{
    classify, labels_for, smart_label, smart_label_at, supported_locales, LabelSet, RelativeLabel,
};
pub use locale::{localize, month_names, weekday_names, LocalizedComponents};
pub use parse::{normalize, DateInput};
pub use template::{render, token_catalogue, TokenCategory, TokenSpec};
pub use timezone::{shift, utc_offset_at, utc_offset_hours};
