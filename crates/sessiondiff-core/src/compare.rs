//! Holiday versus normal-day schedule comparison.
//!
//! Checks run in a fixed order for each date and the first divergence wins:
//! half day, whole day off, session count, then session ids in order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{CalendarDate, Security};
use crate::error::{CompareError, ValidationError};
use crate::index::SecurityStore;

/// Distinct timestamp day prefixes that mark a half-day date.
const HALF_DAY_PREFIX_SPAN: usize = 3;

/// How a holiday schedule differs from the normal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Classification {
    SameSchedule,
    WholeDayOff,
    HalfDay,
    SessionCountDiffered,
    SessionDiffered,
}

impl Classification {
    pub const ALL: [Self; 5] = [
        Self::SameSchedule,
        Self::WholeDayOff,
        Self::HalfDay,
        Self::SessionCountDiffered,
        Self::SessionDiffered,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameSchedule => "SameSchedule",
            Self::WholeDayOff => "WholeDayOff",
            Self::HalfDay => "HalfDay",
            Self::SessionCountDiffered => "SessionCountDiffered",
            Self::SessionDiffered => "SessionDiffered",
        }
    }

    /// Human-readable wording for terminal output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameSchedule => "Same Schedule",
            Self::WholeDayOff => "The whole day was off",
            Self::HalfDay => "Had a half day",
            Self::SessionCountDiffered => "Different Number of Sessions",
            Self::SessionDiffered => "A Session Differed",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How baseline dates are paired with holiday dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// The i-th baseline date is paired with the i-th holiday date.
    #[default]
    Positional,
    /// Each baseline date is paired with the holiday date of the same `date_string`.
    ByDate,
}

impl Alignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::ByDate => "by-date",
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "by-date" | "by_date" => Ok(Self::ByDate),
            other => Err(ValidationError::InvalidAlignment {
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub alignment: Alignment,
}

/// True when the sessions of `date` start on exactly three distinct calendar days.
///
/// A shortened session inserted into the holiday list shows up this way: the
/// sessions spill over the day before, the half day itself and the day after.
pub fn is_three_day_date(date: &CalendarDate) -> bool {
    date.distinct_day_prefixes().len() == HALF_DAY_PREFIX_SPAN
}

/// Compares two schedules pairing dates by list position.
pub fn compare(baseline: &Security, holiday: &Security) -> Result<Classification, CompareError> {
    compare_with(baseline, holiday, &CompareOptions::default())
}

pub fn compare_with(
    baseline: &Security,
    holiday: &Security,
    options: &CompareOptions,
) -> Result<Classification, CompareError> {
    match options.alignment {
        Alignment::Positional => compare_positional(baseline, holiday),
        Alignment::ByDate => Ok(compare_by_date(baseline, holiday)),
    }
}

fn compare_positional(
    baseline: &Security,
    holiday: &Security,
) -> Result<Classification, CompareError> {
    for (index, baseline_date) in baseline.dates.iter().enumerate() {
        let holiday_date =
            holiday
                .dates
                .get(index)
                .ok_or_else(|| CompareError::DateIndexOutOfRange {
                    key: baseline.security_group.clone(),
                    index,
                    len: holiday.dates.len(),
                })?;

        if is_half_day(baseline_date, holiday_date) {
            return Ok(Classification::HalfDay);
        }
        if holiday.declared_date_count < baseline.declared_date_count {
            return Ok(Classification::WholeDayOff);
        }
        if let Some(divergence) = diff_sessions(baseline_date, holiday_date) {
            return Ok(divergence);
        }
    }

    Ok(Classification::SameSchedule)
}

fn compare_by_date(baseline: &Security, holiday: &Security) -> Classification {
    for baseline_date in &baseline.dates {
        let Some(holiday_date) = holiday.date(&baseline_date.date_string) else {
            return Classification::WholeDayOff;
        };

        if is_half_day(baseline_date, holiday_date) {
            return Classification::HalfDay;
        }
        if let Some(divergence) = diff_sessions(baseline_date, holiday_date) {
            return divergence;
        }
    }

    Classification::SameSchedule
}

// An unchanged date is never a half day, even when it spans three days.
fn is_half_day(baseline_date: &CalendarDate, holiday_date: &CalendarDate) -> bool {
    is_three_day_date(holiday_date) && baseline_date != holiday_date
}

fn diff_sessions(baseline_date: &CalendarDate, holiday_date: &CalendarDate) -> Option<Classification> {
    if baseline_date.declared_session_count != holiday_date.declared_session_count {
        return Some(Classification::SessionCountDiffered);
    }

    baseline_date
        .sessions
        .iter()
        .zip(&holiday_date.sessions)
        .any(|(normal, holiday)| normal.session_id != holiday.session_id)
        .then_some(Classification::SessionDiffered)
}

/// Comparison result for one baseline security group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    pub security_group: String,
    pub product_complex: String,
    pub outcome: Result<Classification, CompareError>,
}

/// Compares every baseline group, in ascending key order, against the holiday store.
///
/// A group missing from the holiday store yields [`CompareError::UnknownKey`]
/// for that entry; it is never compared against an empty record.
pub fn compare_indices<B, H>(baseline: &B, holiday: &H, options: &CompareOptions) -> Vec<ComparisonEntry>
where
    B: SecurityStore + ?Sized,
    H: SecurityStore + ?Sized,
{
    let entries = baseline
        .keys()
        .into_iter()
        .filter_map(|key| baseline.get(key))
        .map(|normal| {
            let outcome = match holiday.get(&normal.security_group) {
                Some(holiday_security) => compare_with(normal, holiday_security, options),
                None => Err(CompareError::UnknownKey {
                    key: normal.security_group.clone(),
                }),
            };
            debug!(security_group = %normal.security_group, ?outcome, "compared schedules");
            ComparisonEntry {
                security_group: normal.security_group.clone(),
                product_complex: normal.product_complex.clone(),
                outcome,
            }
        })
        .collect::<Vec<_>>();

    let summary = ComparisonSummary::from_entries(&entries);
    info!(
        total = summary.total,
        same_schedule = summary.same_schedule,
        errors = summary.errors,
        alignment = %options.alignment,
        "comparison pass complete"
    );

    entries
}

/// Tally of classifications over a comparison pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub same_schedule: usize,
    pub whole_day_off: usize,
    pub half_day: usize,
    pub session_count_differed: usize,
    pub session_differed: usize,
    pub errors: usize,
}

impl ComparisonSummary {
    pub fn from_entries(entries: &[ComparisonEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.outcome {
                Ok(classification) => *summary.slot(classification) += 1,
                Err(_) => summary.errors += 1,
            }
        }
        summary
    }

    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::SameSchedule => self.same_schedule,
            Classification::WholeDayOff => self.whole_day_off,
            Classification::HalfDay => self.half_day,
            Classification::SessionCountDiffered => self.session_count_differed,
            Classification::SessionDiffered => self.session_differed,
        }
    }

    fn slot(&mut self, classification: Classification) -> &mut usize {
        match classification {
            Classification::SameSchedule => &mut self.same_schedule,
            Classification::WholeDayOff => &mut self.whole_day_off,
            Classification::HalfDay => &mut self.half_day,
            Classification::SessionCountDiffered => &mut self.session_count_differed,
            Classification::SessionDiffered => &mut self.session_differed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Session;

    fn date(day: &str, sessions: &[(u32, &str)]) -> CalendarDate {
        CalendarDate::from_sessions(
            day,
            sessions
                .iter()
                .map(|(id, ts)| Session::new(*id, *ts))
                .collect(),
        )
    }

    fn security(dates: Vec<CalendarDate>) -> Security {
        let count = dates.len();
        Security::new(74, "Equity", "ES", count, dates).expect("valid")
    }

    #[test]
    fn three_day_detection_counts_distinct_prefixes() {
        let sessions = [
            (99, "2018021522000000"),
            (99, "2018021608000000"),
            (99, "2018021622000000"),
            (99, "2018021722000000"),
        ];
        assert!(is_three_day_date(&date("20180216", &sessions)));
        assert!(!is_three_day_date(&date("20180216", &sessions[..3])));
        assert!(!is_three_day_date(&date("20180216", &sessions[..1])));
        assert!(!is_three_day_date(&date("20180216", &[])));

        let four_days = [
            (99, "2018021522000000"),
            (99, "2018021608000000"),
            (99, "2018021722000000"),
            (99, "2018021822000000"),
        ];
        assert!(!is_three_day_date(&date("20180216", &four_days)));
    }

    #[test]
    fn detects_differing_session_id() {
        let normal = security(vec![date("20180528", &[(21, "2018052722000000"), (17, "2018052722300000")])]);
        let holiday = security(vec![date("20180528", &[(21, "2018052722000000"), (2, "2018052722300000")])]);
        assert_eq!(compare(&normal, &holiday), Ok(Classification::SessionDiffered));
    }

    #[test]
    fn detects_session_count_change() {
        let normal = security(vec![date("20180528", &[(21, "2018052722000000"), (17, "2018052722300000")])]);
        let holiday = security(vec![date("20180528", &[(21, "2018052722000000")])]);
        assert_eq!(compare(&normal, &holiday), Ok(Classification::SessionCountDiffered));
    }

    #[test]
    fn half_day_wins_over_count_difference() {
        let normal = security(vec![date("20180216", &[(21, "2018021522000000"), (17, "2018021608000000")])]);
        let holiday = security(vec![date(
            "20180216",
            &[(21, "2018021522000000"), (17, "2018021608000000"), (4, "2018021722000000")],
        )]);
        assert_eq!(compare(&normal, &holiday), Ok(Classification::HalfDay));
    }

    #[test]
    fn half_day_wins_when_both_dates_span_three_days() {
        let spread = [
            (21, "2018021522000000"),
            (17, "2018021608000000"),
            (4, "2018021722000000"),
        ];
        let normal = security(vec![date("20180216", &spread)]);
        let holiday = security(vec![date(
            "20180216",
            &[
                (21, "2018021522000000"),
                (17, "2018021608000000"),
                (2, "2018021612000000"),
                (4, "2018021722000000"),
            ],
        )]);

        assert_eq!(compare(&normal, &holiday), Ok(Classification::HalfDay));
        assert_eq!(compare(&normal, &normal), Ok(Classification::SameSchedule));
    }

    #[test]
    fn classification_serializes_as_variant_name() {
        let json = serde_json::to_string(&Classification::SessionCountDiffered).expect("json");
        assert_eq!(json, "\"SessionCountDiffered\"");
        assert_eq!(Classification::HalfDay.to_string(), "HalfDay");
    }

    #[test]
    fn positional_overrun_is_an_error() {
        let normal = security(vec![date("20180528", &[])]);
        let holiday = security(Vec::new());
        let err = compare(&normal, &holiday).expect_err("must fail");
        assert!(matches!(err, CompareError::DateIndexOutOfRange { index: 0, len: 0, .. }));
    }

    #[test]
    fn by_date_alignment_skips_reordered_dates() {
        let monday = date("20180528", &[(21, "2018052722000000"), (17, "2018052722300000")]);
        let tuesday = date("20180529", &[(21, "2018052822000000")]);
        let normal = security(vec![monday.clone(), tuesday.clone()]);
        let holiday = security(vec![tuesday, monday]);
        let options = CompareOptions {
            alignment: Alignment::ByDate,
        };

        assert_eq!(
            compare(&normal, &holiday),
            Ok(Classification::SessionCountDiffered)
        );
        assert_eq!(
            compare_with(&normal, &holiday, &options),
            Ok(Classification::SameSchedule)
        );
    }

    #[test]
    fn by_date_alignment_reports_missing_date_as_day_off() {
        let normal = security(vec![
            date("20180528", &[(21, "2018052722000000")]),
            date("20180529", &[(21, "2018052822000000")]),
        ]);
        let holiday = security(vec![date("20180529", &[(21, "2018052822000000")])]);
        let options = CompareOptions {
            alignment: Alignment::ByDate,
        };

        assert_eq!(
            compare_with(&normal, &holiday, &options),
            Ok(Classification::WholeDayOff)
        );
    }

    #[test]
    fn parses_alignment() {
        assert_eq!(Alignment::from_str("by-date"), Ok(Alignment::ByDate));
        let err = Alignment::from_str("fuzzy").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidAlignment { .. }));
    }
}
