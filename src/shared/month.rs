use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Number of calendar months from `from` to `to`, ignoring the day of month.
/// Negative when `to` lies in an earlier month.
pub fn calendar_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// `date` moved forward by `months` calendar months.
/// The day is clamped to the end of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Last day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    add_months(date.with_day(1)?, 1)?.pred_opt()
}

/// Short month label such as `3/2021`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%-m/%Y").to_string()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn months_between_same_month() {
    assert_eq!(calendar_months_between(date(2021, 3, 1), date(2021, 3, 31)), 0);
}

#[test]
fn months_between_across_years() {
    assert_eq!(calendar_months_between(date(2020, 11, 15), date(2021, 2, 1)), 3);
}

#[test]
fn months_between_backwards() {
    assert_eq!(calendar_months_between(date(2021, 5, 1), date(2021, 2, 1)), -3);
}

#[test]
fn add_months_clamps_day() {
    assert_eq!(add_months(date(2021, 1, 31), 1), Some(date(2021, 2, 28)));
}

#[test]
fn last_day_handles_leap_years() {
    assert_eq!(last_day_of_month(date(2020, 2, 10)), Some(date(2020, 2, 29)));
    assert_eq!(last_day_of_month(date(2021, 12, 1)), Some(date(2021, 12, 31)));
}

#[test]
fn label_has_no_padding() {
    assert_eq!(month_label(date(2021, 3, 1)), "3/2021");
    assert_eq!(month_label(date(2021, 12, 1)), "12/2021");
}

#[test]
fn weekend_detection() {
    // 2021-06-05 is a Saturday
    assert!(is_weekend(date(2021, 6, 5)));
    assert!(is_weekend(date(2021, 6, 6)));
    assert!(!is_weekend(date(2021, 6, 7)));
}
