//! Update fields of an existing event.

use anyhow::Result;
use fruitcal_core::event::EventPatch;
use fruitcal_core::session::CalendarSession;
use owo_colors::OwoColorize;

use super::add::parse_category;

#[allow(clippy::too_many_arguments)]
pub fn run(
    session: &mut CalendarSession,
    id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    color: Option<String>,
    category: Option<String>,
    photo: Option<String>,
    url: Option<String>,
) -> Result<()> {
    if !session.events().iter().any(|e| e.id == id) {
        anyhow::bail!("No event with id '{}'", id);
    }

    let patch = EventPatch {
        title,
        category: parse_category(category.as_deref())?,
        start,
        end,
        color,
        photo,
        url,
    };
    session.update_event(id, patch);

    let event = session
        .events()
        .iter()
        .find(|e| e.id == id)
        .expect("event still present after update");
    println!("{}", format!("  Updated: {}", event.title).yellow());
    Ok(())
}
