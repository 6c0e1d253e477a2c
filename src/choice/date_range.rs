use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    choice::{Action, Error},
    shared::{add_months, calendar_months_between, month_label},
};

/// Fixed selectable bounds plus the currently selected sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub bounds: (NaiveDate, NaiveDate),
    pub range: (NaiveDate, NaiveDate),
}

#[derive(Deserialize)]
struct RawDateRange {
    bounds: (NaiveDate, NaiveDate),
    range: (NaiveDate, NaiveDate),
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = Error;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::with_range(raw.bounds, raw.range)
    }
}

impl DateRange {
    /// A range covering the whole bounds.
    pub fn new(bounds: (NaiveDate, NaiveDate)) -> Result<Self, Error> {
        Self::with_range(bounds, bounds)
    }

    pub fn with_range(
        bounds: (NaiveDate, NaiveDate),
        range: (NaiveDate, NaiveDate),
    ) -> Result<Self, Error> {
        if bounds.0 > bounds.1 {
            return Err(Error::InvalidRange(format!(
                "bounds start {} is after end {}",
                bounds.0, bounds.1
            )));
        }
        let value = Self { bounds, range };
        value.check_range(range)?;
        Ok(value)
    }

    /// Checks that `range` is ordered and lies within the bounds.
    pub fn check_range(&self, range: (NaiveDate, NaiveDate)) -> Result<(), Error> {
        if range.0 > range.1 {
            return Err(Error::InvalidRange(format!(
                "start {} is after end {}",
                range.0, range.1
            )));
        }
        if range.0 < self.bounds.0 || range.1 > self.bounds.1 {
            return Err(Error::InvalidRange(format!(
                "{}..{} is outside {}..{}",
                range.0, range.1, self.bounds.0, self.bounds.1
            )));
        }
        Ok(())
    }

    /// Whole calendar months between the bounds, i.e. the slider maximum.
    pub fn month_span(&self) -> u32 {
        calendar_months_between(self.bounds.0, self.bounds.1).max(0) as u32
    }

    /// The selected range as month offsets from the lower bound.
    pub fn range_offsets(&self) -> (u32, u32) {
        let start = calendar_months_between(self.bounds.0, self.range.0).max(0) as u32;
        let end = calendar_months_between(self.bounds.0, self.range.1).max(0) as u32;
        (start, end)
    }

    /// Turns slider offsets back into dates.
    pub fn range_from_offsets(&self, start: u32, end: u32) -> Result<(NaiveDate, NaiveDate), Error> {
        let span = self.month_span();
        if start > end || end > span {
            return Err(Error::InvalidRange(format!(
                "offsets {start}..{end} do not fit 0..{span}"
            )));
        }
        let overflow = || Error::InvalidRange(format!("offset {end} overflows the calendar"));
        let from = add_months(self.bounds.0, start).ok_or_else(overflow)?;
        let to = add_months(self.bounds.0, end).ok_or_else(overflow)?;
        // Offsets count calendar months, so the last one can overshoot a
        // mid-month upper bound.
        let range = (from.min(self.bounds.1), to.min(self.bounds.1));
        self.check_range(range)?;
        Ok(range)
    }

    pub fn offset_label(&self, offset: u32) -> Option<String> {
        add_months(self.bounds.0, offset).map(month_label)
    }

    /// The action a month slider sends when the user lets go of it.
    pub fn set_range_action(&self, start: u32, end: u32) -> Result<Action, Error> {
        let range = self.range_from_offsets(start, end)?;
        Ok(Action::SetDateRange { range })
    }
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
fn year_2021() -> DateRange {
    DateRange::new((date(2021, 1, 1), date(2021, 12, 1))).unwrap()
}

#[test]
fn new_covers_bounds() {
    let value = year_2021();
    assert_eq!(value.range, value.bounds);
    assert_eq!(value.range_offsets(), (0, 11));
}

#[test]
fn reversed_bounds_rejected() {
    assert!(DateRange::new((date(2021, 5, 1), date(2021, 1, 1))).is_err());
}

#[test]
fn range_outside_bounds_rejected() {
    let result = DateRange::with_range(
        (date(2021, 1, 1), date(2021, 12, 1)),
        (date(2020, 12, 1), date(2021, 3, 1)),
    );
    assert!(matches!(result, Err(Error::InvalidRange(_))));
}

#[test]
fn month_span_counts_calendar_months() {
    assert_eq!(year_2021().month_span(), 11);
}

#[test]
fn offsets_to_dates() {
    let range = year_2021().range_from_offsets(2, 5).unwrap();
    assert_eq!(range, (date(2021, 3, 1), date(2021, 6, 1)));
}

#[test]
fn reversed_offsets_rejected() {
    assert!(year_2021().range_from_offsets(5, 2).is_err());
}

#[test]
fn offsets_past_span_rejected() {
    assert!(year_2021().range_from_offsets(0, 12).is_err());
}

#[test]
fn last_offset_within_mid_month_bounds() {
    let value = DateRange::new((date(2021, 1, 15), date(2021, 12, 10))).unwrap();
    assert_eq!(value.month_span(), 11);
    assert_eq!(
        value.range_from_offsets(0, 11).unwrap(),
        (date(2021, 1, 15), date(2021, 12, 10))
    );
    let range = value.range_from_offsets(11, 11).unwrap();
    assert_eq!(range, (date(2021, 12, 10), date(2021, 12, 10)));
    let selected = DateRange::with_range(value.bounds, range).unwrap();
    assert_eq!(selected.range_offsets(), (11, 11));
}

#[test]
fn deserialize_checks_range() {
    let valid = r#"{"bounds":["2021-01-01","2021-12-01"],"range":["2021-03-01","2021-06-01"]}"#;
    let value: DateRange = serde_json::from_str(valid).unwrap();
    assert_eq!(value.range_offsets(), (2, 5));

    let reversed = r#"{"bounds":["2021-01-01","2021-12-01"],"range":["2021-06-01","2021-03-01"]}"#;
    assert!(serde_json::from_str::<DateRange>(reversed).is_err());
    let outside = r#"{"bounds":["2021-01-01","2021-12-01"],"range":["2020-06-01","2021-03-01"]}"#;
    assert!(serde_json::from_str::<DateRange>(outside).is_err());
}

#[test]
fn labels_follow_offsets() {
    let value = year_2021();
    assert_eq!(value.offset_label(0).as_deref(), Some("1/2021"));
    assert_eq!(value.offset_label(11).as_deref(), Some("12/2021"));
}

#[test]
fn slider_action_carries_range() {
    let action = year_2021().set_range_action(1, 1).unwrap();
    assert_eq!(
        action,
        Action::SetDateRange {
            range: (date(2021, 2, 1), date(2021, 2, 1))
        }
    );
}
