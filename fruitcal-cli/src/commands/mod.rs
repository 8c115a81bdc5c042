pub mod add;
pub mod day;
pub mod delete;
pub mod edit;
pub mod list;
pub mod month;
pub mod week;
pub mod year;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date_arg(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse an optional `YYYY-MM` argument into the first of that month,
/// defaulting to the current month.
pub fn parse_month_arg(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s)),
        None => {
            let today = Local::now().date_naive();
            Ok(today.with_day(1).expect("day 1 is valid"))
        }
    }
}
