//! List events in insertion order, optionally as the grid-widget JSON
//! projection.

use anyhow::Result;
use fruitcal_core::event::GridEvent;
use fruitcal_core::session::CalendarSession;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(session: &CalendarSession, json: bool) -> Result<()> {
    if json {
        let projected: Vec<GridEvent> = session
            .events()
            .iter()
            .map(|e| e.to_grid_event())
            .collect();
        println!("{}", serde_json::to_string_pretty(&projected)?);
        return Ok(());
    }

    if session.events().is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in session.events() {
        println!("  {}", render::event_row(event));
    }

    Ok(())
}
