//! Year view: twelve mini month grids, three per row.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use fruitcal_core::session::CalendarSession;
use fruitcal_core::view::{self, ViewType};
use owo_colors::OwoColorize;

use crate::render::{self, MonthTitle};

pub fn run(session: &CalendarSession, year: Option<i32>, step: i32) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().date_naive().year());
    let anchor = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid year '{}'", year))?;
    let anchor = view::step(ViewType::Year, anchor, step);

    println!("{}", view::heading(ViewType::Year, anchor).bold());
    println!();

    // The year view always shows initials and never a week-number column.
    let blocks: Vec<Vec<String>> = (1..=12)
        .map(|month| render::month_block(anchor.year(), month, None, false, true, MonthTitle::Month))
        .collect();

    for chunk in blocks.chunks(3) {
        println!("{}", render::join_columns(chunk, render::block_width(false), "   "));
        println!();
    }

    if session.settings().navigator_visible(ViewType::Year) {
        println!("{}", render::sidebar(session, anchor));
    }

    Ok(())
}
