//! Month view: the full grid, then the month's events grouped by day.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use fruitcal_core::grid;
use fruitcal_core::session::CalendarSession;
use fruitcal_core::view::{self, ViewType};
use owo_colors::OwoColorize;

use crate::render::{self, MonthTitle};

pub fn run(session: &CalendarSession, anchor: NaiveDate, step: i32) -> Result<()> {
    let anchor = view::step(ViewType::Month, anchor, step);
    let settings = session.settings();

    println!("{}", view::heading(ViewType::Month, anchor).bold());
    println!();

    let block = render::month_block(
        anchor.year(),
        anchor.month(),
        None,
        settings.week_numbers,
        settings.weekday_initials,
        MonthTitle::None,
    );
    for line in &block {
        println!("{}", line);
    }

    let mut any = false;
    for day in grid::month_grid(anchor.year(), anchor.month()) {
        if day.month() != anchor.month() {
            continue;
        }
        let events = session.events_on(day);
        if events.is_empty() {
            continue;
        }
        if !any {
            println!();
            any = true;
        }
        println!("{}", day.format("%b %-d").to_string().bold());
        for event in events {
            println!("  {}", render::event_line(event));
        }
    }

    if settings.navigator_visible(ViewType::Month) {
        println!();
        println!("{}", render::sidebar(session, anchor));
    }

    Ok(())
}
