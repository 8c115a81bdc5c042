//! Month and week grid construction, anchored to week-start Sunday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Hard cap on grid length, guarding against date-arithmetic runaway.
pub const GRID_CAP: usize = 42;

/// Build the cell sequence for a month view: every date from the Sunday on
/// or before the 1st, through the Saturday that completes the month's final
/// week. The length is always a multiple of 7 and at most [`GRID_CAP`].
///
/// Out-of-month dates are included, not excluded; callers dim them by
/// comparing each cell's month against `month`.
pub fn month_grid(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year/month");
    let last = last_day_of_month(year, month);

    let mut current = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let mut days = Vec::new();

    while current <= last || current.weekday() != Weekday::Sun {
        days.push(current);
        current += Duration::days(1);
        if days.len() >= GRID_CAP {
            break;
        }
    }

    days
}

/// The Sunday-anchored week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// Last calendar day of a month.
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("previous day exists")
}
