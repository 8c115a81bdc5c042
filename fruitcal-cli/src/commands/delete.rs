//! Delete an event.

use anyhow::Result;
use fruitcal_core::session::CalendarSession;
use owo_colors::OwoColorize;

pub fn run(session: &mut CalendarSession, id: &str) -> Result<()> {
    let title = match session.events().iter().find(|e| e.id == id) {
        Some(event) => event.title.clone(),
        None => anyhow::bail!("No event with id '{}'", id),
    };

    session.delete_event(id);

    println!("{}", format!("  Deleted: {}", title).red());
    Ok(())
}
