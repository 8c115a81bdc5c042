//! Week view: seven Sunday-anchored rows with the ISO week number on the
//! first row.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use fruitcal_core::session::CalendarSession;
use fruitcal_core::view::{self, ViewType};
use fruitcal_core::{grid, weeknum};
use owo_colors::OwoColorize;

use crate::render;

pub fn run(session: &CalendarSession, date: NaiveDate, step: i32) -> Result<()> {
    let date = view::step(ViewType::Week, date, step);

    println!("{}", view::heading(ViewType::Week, date).bold());
    println!();

    for (idx, day) in grid::week_of(date).iter().enumerate() {
        let label = format!("{} {:>2}", day.format("%a"), day.day());
        if idx == 0 {
            println!(
                "{} {}",
                label.bold(),
                format!("W{}", weeknum::iso_week(*day)).dimmed()
            );
        } else {
            println!("{}", label.bold());
        }

        let events = session.events_on(*day);
        if events.is_empty() {
            println!("    {}", "—".dimmed());
        } else {
            for event in events {
                println!("    {}", render::event_line(event));
            }
        }
    }

    if session.settings().navigator_visible(ViewType::Week) {
        println!();
        println!("{}", render::sidebar(session, date));
    }

    Ok(())
}
