//! Relative-date classification and locale label tables.
//!
//! [`classify`] buckets a calendar date against an explicit "today" anchor
//! into one of nine relative categories; [`smart_label`] resolves the bucket
//! to a locale string, anchoring on the current date. Day matches win over
//! week matches, week matches over month matches.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate};
use serde::Serialize;

/// The nine relative-time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeLabel {
    Today,
    Yesterday,
    Tomorrow,
    ThisWeek,
    LastWeek,
    NextWeek,
    ThisMonth,
    LastMonth,
    NextMonth,
}

/// One locale's strings for the nine buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub today: &'static str,
    pub yesterday: &'static str,
    pub tomorrow: &'static str,
    pub this_week: &'static str,
    pub last_week: &'static str,
    pub next_week: &'static str,
    pub this_month: &'static str,
    pub last_month: &'static str,
    pub next_month: &'static str,
}

impl LabelSet {
    /// The string for one bucket.
    pub fn get(&self, label: RelativeLabel) -> &'static str {
        match label {
            RelativeLabel::Today => self.today,
            RelativeLabel::Yesterday => self.yesterday,
            RelativeLabel::Tomorrow => self.tomorrow,
            RelativeLabel::ThisWeek => self.this_week,
            RelativeLabel::LastWeek => self.last_week,
            RelativeLabel::NextWeek => self.next_week,
            RelativeLabel::ThisMonth => self.this_month,
            RelativeLabel::LastMonth => self.last_month,
            RelativeLabel::NextMonth => self.next_month,
        }
    }
}

const FR_FR: LabelSet = LabelSet {
    today: "Aujourd'hui",
    yesterday: "Hier",
    tomorrow: "Demain",
    this_week: "Cette semaine",
    last_week: "La semaine dernière",
    next_week: "La semaine prochaine",
    this_month: "Ce mois-ci",
    last_month: "Le mois dernier",
    next_month: "Le mois prochain",
};

const EN_US: LabelSet = LabelSet {
    today: "Today",
    yesterday: "Yesterday",
    tomorrow: "Tomorrow",
    this_week: "This week",
    last_week: "Last week",
    next_week: "Next week",
    this_month: "This month",
    last_month: "Last month",
    next_month: "Next month",
};

const ES_ES: LabelSet = LabelSet {
    today: "Hoy",
    yesterday: "Ayer",
    tomorrow: "Mañana",
    this_week: "Esta semana",
    last_week: "La semana pasada",
    next_week: "La próxima semana",
    this_month: "Este mes",
    last_month: "El mes pasado",
    next_month: "El próximo mes",
};

const DE_DE: LabelSet = LabelSet {
    today: "Heute",
    yesterday: "Gestern",
    tomorrow: "Morgen",
    this_week: "Diese Woche",
    last_week: "Letzte Woche",
    next_week: "Nächste Woche",
    this_month: "Diesen Monat",
    last_month: "Letzten Monat",
    next_month: "Nächsten Monat",
};

const LOCALES: &[(&str, &LabelSet)] = &[
    ("fr-FR", &FR_FR),
    ("en-US", &EN_US),
    ("es-ES", &ES_ES),
    ("de-DE", &DE_DE),
];

/// The label table for a locale tag. Unknown tags fall back to `fr-FR`.
pub fn labels_for(tag: &str) -> &'static LabelSet {
    LOCALES
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, set)| *set)
        .unwrap_or(&FR_FR)
}

/// Locale tags with a label table.
pub fn supported_locales() -> Vec<&'static str> {
    LOCALES.iter().map(|(tag, _)| *tag).collect()
}

/// The Monday on or before `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Bucket `target` relative to `today`.
///
/// Exact-day matches are checked first, then Monday-start weeks, then
/// months; the first match wins. Returns `None` when the date falls in
/// none of the nine buckets.
pub fn classify(target: NaiveDate, today: NaiveDate) -> Option<RelativeLabel> {
    let diff_days = (target - today).num_days();
    match diff_days {
        0 => return Some(RelativeLabel::Today),
        -1 => return Some(RelativeLabel::Yesterday),
        1 => return Some(RelativeLabel::Tomorrow),
        _ => {}
    }

    let week_diff = (week_start(target) - week_start(today)).num_days() / 7;
    if week_diff == 0 && diff_days.abs() <= 6 {
        return Some(RelativeLabel::ThisWeek);
    }
    match week_diff {
        -1 => return Some(RelativeLabel::LastWeek),
        1 => return Some(RelativeLabel::NextWeek),
        _ => {}
    }

    let month_diff = i64::from(target.year() - today.year()) * 12
        + (i64::from(target.month()) - i64::from(today.month()));
    match month_diff {
        0 => Some(RelativeLabel::ThisMonth),
        -1 => Some(RelativeLabel::LastMonth),
        1 => Some(RelativeLabel::NextMonth),
        _ => None,
    }
}

/// Smart label for an instant, anchored on today's date in the ambient
/// local timezone.
///
/// The comparison uses the instant's wall-clock calendar date (shift it
/// into the target timezone first) against the process-local current date.
pub fn smart_label(instant: &DateTime<FixedOffset>, tag: &str) -> Option<&'static str> {
    smart_label_at(instant, tag, Local::now().date_naive())
}

/// Smart label with an explicit "today" anchor.
pub fn smart_label_at(
    instant: &DateTime<FixedOffset>,
    tag: &str,
    today: NaiveDate,
) -> Option<&'static str> {
    classify(instant.date_naive(), today).map(|label| labels_for(tag).get(label))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Wednesday, January 17, 2024. Week runs Mon Jan 15 – Sun Jan 21.
    fn anchor() -> NaiveDate {
        d(2024, 1, 17)
    }

    #[test]
    fn test_classify_exact_days() {
        assert_eq!(classify(d(2024, 1, 17), anchor()), Some(RelativeLabel::Today));
        assert_eq!(
            classify(d(2024, 1, 16), anchor()),
            Some(RelativeLabel::Yesterday)
        );
        assert_eq!(
            classify(d(2024, 1, 18), anchor()),
            Some(RelativeLabel::Tomorrow)
        );
    }

    #[test]
    fn test_classify_this_week() {
        // Monday and Sunday of the anchor's week, beyond the ±1 day band
        assert_eq!(
            classify(d(2024, 1, 15), anchor()),
            Some(RelativeLabel::ThisWeek)
        );
        assert_eq!(
            classify(d(2024, 1, 21), anchor()),
            Some(RelativeLabel::ThisWeek)
        );
    }

    #[test]
    fn test_classify_last_and_next_week() {
        assert_eq!(
            classify(d(2024, 1, 10), anchor()),
            Some(RelativeLabel::LastWeek)
        );
        assert_eq!(
            classify(d(2024, 1, 25), anchor()),
            Some(RelativeLabel::NextWeek)
        );
    }

    #[test]
    fn test_classify_week_precedes_day_distance() {
        // Monday Jan 22 is only 5 days out, but it belongs to the next
        // Monday-start week, so the week bucket decides.
        assert_eq!(
            classify(d(2024, 1, 22), anchor()),
            Some(RelativeLabel::NextWeek)
        );
    }

    #[test]
    fn test_classify_sunday_belongs_to_preceding_monday_week() {
        // Anchored on a Sunday, the Monday six days earlier is the same week.
        let sunday = d(2024, 1, 21);
        assert_eq!(
            classify(d(2024, 1, 15), sunday),
            Some(RelativeLabel::ThisWeek)
        );
        assert_eq!(
            classify(d(2024, 1, 22), sunday),
            Some(RelativeLabel::Tomorrow)
        );
    }

    #[test]
    fn test_classify_months() {
        assert_eq!(
            classify(d(2024, 1, 31), anchor()),
            Some(RelativeLabel::ThisMonth)
        );
        assert_eq!(
            classify(d(2023, 12, 5), anchor()),
            Some(RelativeLabel::LastMonth)
        );
        assert_eq!(
            classify(d(2024, 2, 20), anchor()),
            Some(RelativeLabel::NextMonth)
        );
    }

    #[test]
    fn test_classify_month_across_year_boundary() {
        let january = d(2024, 1, 17);
        assert_eq!(
            classify(d(2023, 12, 1), january),
            Some(RelativeLabel::LastMonth)
        );

        let december = d(2023, 12, 15);
        assert_eq!(
            classify(d(2024, 1, 30), december),
            Some(RelativeLabel::NextMonth)
        );
    }

    #[test]
    fn test_classify_distant_dates_are_absent() {
        assert_eq!(classify(d(2024, 6, 1), anchor()), None);
        assert_eq!(classify(d(2020, 1, 17), anchor()), None);
        assert_eq!(classify(d(2024, 3, 17), anchor()), None);
    }

    #[test]
    fn test_labels_for_known_locales() {
        assert_eq!(labels_for("fr-FR").today, "Aujourd'hui");
        assert_eq!(labels_for("en-US").yesterday, "Yesterday");
        assert_eq!(labels_for("es-ES").tomorrow, "Mañana");
        assert_eq!(labels_for("de-DE").this_week, "Diese Woche");
    }

    #[test]
    fn test_labels_for_unknown_locale_falls_back_to_french() {
        assert_eq!(labels_for("xx-XX").today, "Aujourd'hui");
    }

    #[test]
    fn test_supported_locales() {
        let locales = supported_locales();
        assert_eq!(locales, vec!["fr-FR", "en-US", "es-ES", "de-DE"]);
    }

    #[test]
    fn test_smart_label_at_resolves_locale_string() {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 16, 9, 0, 0)
            .unwrap()
            .fixed_offset();
        assert_eq!(smart_label_at(&instant, "fr-FR", anchor()), Some("Hier"));
        assert_eq!(smart_label_at(&instant, "en-US", anchor()), Some("Yesterday"));
    }

    #[test]
    fn test_smart_label_at_absent_for_distant_date() {
        let instant = Utc
            .with_ymd_and_hms(2019, 6, 1, 9, 0, 0)
            .unwrap()
            .fixed_offset();
        assert_eq!(smart_label_at(&instant, "fr-FR", anchor()), None);
    }

    #[test]
    fn test_smart_label_today_against_ambient_clock() {
        // "Today" is anchored on the ambient local date, not the instant's
        // offset. Using the local current time keeps the two aligned.
        let now = Local::now().fixed_offset();
        assert_eq!(smart_label(&now, "fr-FR"), Some("Aujourd'hui"));
        assert_eq!(smart_label(&now, "en-US"), Some("Today"));
    }

    #[test]
    fn test_classify_time_of_day_is_discarded() {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 17, 23, 59, 59)
            .unwrap()
            .fixed_offset();
        assert_eq!(smart_label_at(&instant, "en-US", anchor()), Some("Today"));
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn arb_date() -> impl Strategy<Value = NaiveDate> {
            (-30_000i64..=30_000).prop_map(|offset| {
                NaiveDate::from_ymd_opt(2024, 1, 17).unwrap() + Duration::days(offset)
            })
        }

        proptest! {
            #[test]
            fn classify_is_total(target in arb_date(), today in arb_date()) {
                // Never panics; at most one bucket.
                let _ = classify(target, today);
            }

            #[test]
            fn exact_day_matches_take_precedence(today in arb_date()) {
                prop_assert_eq!(classify(today, today), Some(RelativeLabel::Today));
                prop_assert_eq!(
                    classify(today - Duration::days(1), today),
                    Some(RelativeLabel::Yesterday)
                );
                prop_assert_eq!(
                    classify(today + Duration::days(1), today),
                    Some(RelativeLabel::Tomorrow)
                );
            }

            #[test]
            fn same_week_dates_never_miss(today in arb_date(), offset in -6i64..=6) {
                // Within the anchor's Monday-start week, some bucket always
                // fires (day, week, or nothing more distant).
                let target = today + Duration::days(offset);
                if week_start(target) == week_start(today) {
                    let got = classify(target, today);
                    prop_assert!(matches!(
                        got,
                        Some(RelativeLabel::Today)
                            | Some(RelativeLabel::Yesterday)
                            | Some(RelativeLabel::Tomorrow)
                            | Some(RelativeLabel::ThisWeek)
                    ));
                }
            }
        }
    }
}
