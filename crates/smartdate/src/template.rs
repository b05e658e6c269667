//! Template token substitution.
//!
//! [`render`] replaces the fixed token vocabulary (`DD`, `MMMM`, `h`, …)
//! inside a template string with rendered field values. Tokens share
//! prefixes (`D`/`DD`, `m`/`mm`) and rendered values can contain token
//! characters ("May" contains `M`, "dimanche" contains `d`), so
//! substitution runs in two passes: tokens to private-use placeholders,
//! longest token first, then placeholders to values. The placeholder
//! alphabet (`U+E000`/`U+E001`) cannot occur in any rendered field value,
//! which makes the second pass collision-free.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::Serialize;

use crate::locale::LocalizedComponents;

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// What kind of field a token renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
    Millisecond,
    Meridiem,
    Timestamp,
}

/// One entry of the token catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSpec {
    pub category: TokenCategory,
    pub token: &'static str,
    pub description: &'static str,
}

const TOKENS: &[TokenSpec] = &[
    TokenSpec { category: TokenCategory::Day, token: "DD", description: "Day of month, 2 digits with leading zeros (01 to 31)" },
    TokenSpec { category: TokenCategory::Day, token: "D", description: "Day of month (1 to 31)" },
    TokenSpec { category: TokenCategory::Day, token: "dddd", description: "Full day name (Monday)" },
    TokenSpec { category: TokenCategory::Day, token: "ddd", description: "Short day name (Mon)" },
    TokenSpec { category: TokenCategory::Day, token: "dd", description: "Min day name (Mo)" },
    TokenSpec { category: TokenCategory::Day, token: "d", description: "Day of week (0 Sunday, 6 Saturday)" },
    TokenSpec { category: TokenCategory::Month, token: "MMMM", description: "Full month name (January)" },
    TokenSpec { category: TokenCategory::Month, token: "MMM", description: "Short month name (Jan)" },
    TokenSpec { category: TokenCategory::Month, token: "MM", description: "Month number, 2 digits (01 to 12)" },
    TokenSpec { category: TokenCategory::Month, token: "M", description: "Month number (1 to 12)" },
    TokenSpec { category: TokenCategory::Year, token: "YYYY", description: "Full year (2021)" },
    TokenSpec { category: TokenCategory::Year, token: "YY", description: "Two digit year (21)" },
    TokenSpec { category: TokenCategory::Hour, token: "HH", description: "Hour, 24-hour format, 2 digits (00 to 23)" },
    TokenSpec { category: TokenCategory::Hour, token: "H", description: "Hour, 24-hour format (0 to 23)" },
    TokenSpec { category: TokenCategory::Hour, token: "hh", description: "Hour, 12-hour format, 2 digits (01 to 12)" },
    TokenSpec { category: TokenCategory::Hour, token: "h", description: "Hour, 12-hour format (1 to 12)" },
    TokenSpec { category: TokenCategory::Minute, token: "mm", description: "Minutes, 2 digits (00 to 59)" },
    TokenSpec { category: TokenCategory::Minute, token: "m", description: "Minutes (0 to 59)" },
    TokenSpec { category: TokenCategory::Second, token: "ss", description: "Seconds, 2 digits (00 to 59)" },
    TokenSpec { category: TokenCategory::Second, token: "s", description: "Seconds (0 to 59)" },
    TokenSpec { category: TokenCategory::Millisecond, token: "SSS", description: "Milliseconds, 3 digits (000 to 999)" },
    TokenSpec { category: TokenCategory::Millisecond, token: "SS", description: "Milliseconds, 2 digits (00 to 99)" },
    TokenSpec { category: TokenCategory::Millisecond, token: "S", description: "Milliseconds, 1 digit (0 to 9)" },
    TokenSpec { category: TokenCategory::Meridiem, token: "A", description: "AM/PM" },
    TokenSpec { category: TokenCategory::Meridiem, token: "a", description: "am/pm" },
    TokenSpec { category: TokenCategory::Timestamp, token: "X", description: "Unix timestamp in seconds" },
    TokenSpec { category: TokenCategory::Timestamp, token: "x", description: "Unix timestamp in milliseconds" },
];

/// Every template token, with category and human description.
pub fn token_catalogue() -> &'static [TokenSpec] {
    TOKENS
}

/// Substitute template tokens with rendered field values.
///
/// Total over any template string: text that is not a token passes through
/// unchanged. Locale-dependent fields come from `components`; absolute
/// fields (time of day, milliseconds, epoch) from `instant`'s wall clock.
pub fn render(
    template: &str,
    components: &LocalizedComponents,
    instant: &DateTime<FixedOffset>,
) -> String {
    let values = token_values(components, instant);

    // Longest token first, so `DD` is consumed before `D` and `dddd`
    // before `dd`.
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(values[i].0.len()));

    // First pass: tokens → placeholders. Substituting final values here
    // would let a later, shorter token match inside an already-rendered
    // value.
    let mut rendered = template.to_string();
    let mut staged: Vec<(String, usize)> = Vec::new();
    for idx in order {
        let token = values[idx].0;
        if rendered.contains(token) {
            let placeholder = format!("{PLACEHOLDER_OPEN}{idx}{PLACEHOLDER_CLOSE}");
            rendered = rendered.replace(token, &placeholder);
            staged.push((placeholder, idx));
        }
    }

    // Second pass: placeholders → values.
    for (placeholder, idx) in staged {
        rendered = rendered.replace(&placeholder, &values[idx].1);
    }

    rendered
}

/// Rendered value of every token for one instant.
fn token_values(
    components: &LocalizedComponents,
    instant: &DateTime<FixedOffset>,
) -> [(&'static str, String); 27] {
    let hour = instant.hour();
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let millis = instant.timestamp_subsec_millis();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };

    [
        ("DD", components.day.clone()),
        ("D", components.day_number.to_string()),
        ("dddd", components.weekday.clone()),
        ("ddd", components.weekday_short.clone()),
        ("dd", components.weekday_short.chars().take(2).collect()),
        ("d", instant.weekday().num_days_from_sunday().to_string()),
        ("MMMM", components.month_name.clone()),
        ("MMM", components.month_name_short.clone()),
        ("MM", components.month.clone()),
        ("M", components.month_number.to_string()),
        ("YYYY", components.year.clone()),
        ("YY", last_chars(&components.year, 2)),
        ("HH", format!("{hour:02}")),
        ("H", hour.to_string()),
        ("hh", format!("{hour12:02}")),
        ("h", hour12.to_string()),
        ("mm", format!("{:02}", instant.minute())),
        ("m", instant.minute().to_string()),
        ("ss", format!("{:02}", instant.second())),
        ("s", instant.second().to_string()),
        ("SSS", format!("{millis:03}")),
        ("SS", format!("{:02}", millis / 10)),
        ("S", (millis / 100).to_string()),
        ("A", meridiem.to_string()),
        ("a", meridiem.to_lowercase()),
        ("X", instant.timestamp().to_string()),
        ("x", instant.timestamp_millis().to_string()),
    ]
}

fn last_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
