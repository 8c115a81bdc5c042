//! View types and the date arithmetic behind prev/next navigation.

use chrono::{Datelike, Duration, NaiveDate};

use crate::grid::{last_day_of_month, week_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
    Month,
    Year,
}

impl ViewType {
    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
            ViewType::Month => "Month",
            ViewType::Year => "Year",
        }
    }
}

/// Move a view's anchor date by `delta` steps: days for the day view, weeks
/// for the week view, months/years for the month and year views. Month and
/// year steps clamp the day-of-month to the target month's length, so
/// Jan 31 -> Feb 29 -> Mar 29 rather than skipping into March.
pub fn step(view: ViewType, date: NaiveDate, delta: i32) -> NaiveDate {
    match view {
        ViewType::Day => date + Duration::days(delta as i64),
        ViewType::Week => date + Duration::days(7 * delta as i64),
        ViewType::Month => shift_month(date, delta),
        ViewType::Year => shift_month(date, 12 * delta),
    }
}

fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + delta_months;
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u32;
    let day = date.day().min(last_day_of_month(year, month).day());
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is valid")
}

/// The navigation-bar title for a view.
pub fn heading(view: ViewType, date: NaiveDate) -> String {
    match view {
        ViewType::Day => date.format("%B %-d, %Y").to_string(),
        ViewType::Week => {
            let week = week_of(date);
            format!(
                "{} – {}",
                week[0].format("%b %-d"),
                week[6].format("%b %-d, %Y")
            )
        }
        ViewType::Month => date.format("%B %Y").to_string(),
        ViewType::Year => date.format("%Y").to_string(),
    }
}
