//! Add an event.

use anyhow::Result;
use fruitcal_core::event::{EventCategory, EventDraft, DEFAULT_COLORS};
use fruitcal_core::session::CalendarSession;
use owo_colors::OwoColorize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    session: &mut CalendarSession,
    title: String,
    start: String,
    end: String,
    color: Option<String>,
    category: Option<String>,
    photo: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let category = parse_category(category.as_deref())?;

    let draft = EventDraft {
        owner_id: session.settings().owner_id,
        title,
        category,
        start,
        end,
        color: color.unwrap_or_else(|| DEFAULT_COLORS[0].to_string()),
        photo: photo.filter(|p| !p.is_empty()),
        url: url.filter(|u| !u.is_empty()),
    };
    draft.validate()?;

    let id = session.add_event(draft);
    let event = session
        .events()
        .iter()
        .find(|e| e.id == id)
        .expect("event was just added");

    println!("{}", format!("  Created: {}", event.title).green());
    println!("  {}", id.dimmed());
    Ok(())
}

pub fn parse_category(arg: Option<&str>) -> Result<Option<EventCategory>> {
    arg.map(|s| s.parse::<EventCategory>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()
}
