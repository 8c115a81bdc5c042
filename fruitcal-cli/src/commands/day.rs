//! Day view: one date's events plus the sidebar.

use anyhow::Result;
use chrono::NaiveDate;
use fruitcal_core::session::CalendarSession;
use fruitcal_core::view::{self, ViewType};
use owo_colors::OwoColorize;

use crate::render;

pub fn run(session: &CalendarSession, date: NaiveDate, step: i32) -> Result<()> {
    let date = view::step(ViewType::Day, date, step);

    println!("{}", view::heading(ViewType::Day, date).bold());
    println!();

    let events = session.events_on(date);
    if events.is_empty() {
        println!("  {}", "No events".dimmed());
    } else {
        for event in events {
            println!("  {}", render::event_line(event));
        }
    }

    if session.settings().navigator_visible(ViewType::Day) {
        println!();
        println!("{}", render::sidebar(session, date));
    }

    Ok(())
}
