//! Calendar event types and event-to-date binning.
//!
//! Event start/end values are stored as ISO-8601 local date-time strings
//! (`YYYY-MM-DDTHH:MM`, optionally with seconds). The format is zero-padded
//! and fixed-width, so lexical ordering matches chronological ordering and
//! all comparisons work directly on the strings.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Colors offered by the event editor. New events default to the first entry.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#3788d8", "#34a853", "#ff6d00", "#ea4335", "#9c27b0", "#808080",
];

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub owner_id: u32,
    pub title: String,
    pub category: Option<EventCategory>,
    /// Local date-time string, `YYYY-MM-DDTHH:MM[:SS]`
    pub start: String,
    /// Local date-time string, `YYYY-MM-DDTHH:MM[:SS]`
    pub end: String,
    /// Hex RGB display color, e.g. `#3788d8`
    pub color: String,
    /// When set, this event's photo replaces the day's default image
    pub photo: Option<String>,
    pub url: Option<String>,
}

impl CalendarEvent {
    /// Parse the start field as a local date-time, if well formed.
    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        parse_local_datetime(&self.start)
    }

    /// Project this event into the payload shape a grid calendar widget
    /// consumes: the event color maps to the border only, the background is
    /// forced transparent.
    pub fn to_grid_event(&self) -> GridEvent {
        GridEvent {
            id: self.id.clone(),
            title: self.title.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            border_color: self.color.clone(),
            background_color: "transparent".to_string(),
            text_color: "#000".to_string(),
        }
    }
}

/// Parse `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Event category, shown as a glyph next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Meeting,
    Phone,
    Appointment,
    Alarm,
}

impl EventCategory {
    pub fn glyph(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "👥",
            EventCategory::Phone => "📞",
            EventCategory::Appointment => "📅",
            EventCategory::Alarm => "⏰",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "Meeting",
            EventCategory::Phone => "Phone Call",
            EventCategory::Appointment => "Appointment",
            EventCategory::Alarm => "Alarm",
        }
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meeting" => Ok(EventCategory::Meeting),
            "phone" => Ok(EventCategory::Phone),
            "appointment" => Ok(EventCategory::Appointment),
            "alarm" => Ok(EventCategory::Alarm),
            other => Err(format!(
                "Unknown category '{}'. Expected meeting, phone, appointment or alarm",
                other
            )),
        }
    }
}

/// An event as submitted by the editor, before an id is assigned.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub owner_id: u32,
    pub title: String,
    pub category: Option<EventCategory>,
    pub start: String,
    pub end: String,
    pub color: String,
    pub photo: Option<String>,
    pub url: Option<String>,
}

impl EventDraft {
    /// The editor's save guard: title, start and end must all be non-empty.
    /// Inverted ranges (end before start) are accepted.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.title.is_empty() {
            return Err(CalendarError::MissingField("title"));
        }
        if self.start.is_empty() {
            return Err(CalendarError::MissingField("start"));
        }
        if self.end.is_empty() {
            return Err(CalendarError::MissingField("end"));
        }
        Ok(())
    }

    pub(crate) fn into_event(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            owner_id: self.owner_id,
            title: self.title,
            category: self.category,
            start: self.start,
            end: self.end,
            color: self.color,
            photo: self.photo,
            url: self.url,
        }
    }
}

/// A partial update to an event. Fields left as `None` are untouched.
/// An empty string for `photo` or `url` clears the field.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub category: Option<EventCategory>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub photo: Option<String>,
    pub url: Option<String>,
}

impl EventPatch {
    pub fn apply(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(category) = self.category {
            event.category = Some(category);
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
        if let Some(photo) = self.photo {
            event.photo = if photo.is_empty() { None } else { Some(photo) };
        }
        if let Some(url) = self.url {
            event.url = if url.is_empty() { None } else { Some(url) };
        }
    }
}

/// Serializable projection for grid calendar widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub border_color: String,
    pub background_color: String,
    pub text_color: String,
}

/// All events falling on `date`, sorted ascending by start time.
///
/// An event belongs to a date when its start string's date portion equals the
/// date's `YYYY-MM-DD` form. The sort is stable, so events sharing a start
/// keep their insertion order.
pub fn events_on<'a>(events: &'a [CalendarEvent], date: NaiveDate) -> Vec<&'a CalendarEvent> {
    let key = date.format("%Y-%m-%d").to_string();

    let mut hits: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.start.starts_with(&key))
        .collect();
    hits.sort_by(|a, b| a.start.cmp(&b.start));
    hits
}

/// The dataset a fresh session starts from when storage is empty.
pub fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "1".to_string(),
            owner_id: 1,
            title: "Team Meeting".to_string(),
            category: Some(EventCategory::Meeting),
            start: "2024-10-29T10:00:00".to_string(),
            end: "2024-10-29T11:00:00".to_string(),
            color: "#3788d8".to_string(),
            photo: None,
            url: None,
        },
        CalendarEvent {
            id: "2".to_string(),
            owner_id: 1,
            title: "Client Call".to_string(),
            category: Some(EventCategory::Phone),
            start: "2024-10-29T14:00:00".to_string(),
            end: "2024-10-29T15:00:00".to_string(),
            color: "#00ccff".to_string(),
            photo: None,
            url: None,
        },
        CalendarEvent {
            id: "3".to_string(),
            owner_id: 1,
            title: "Lunch Break".to_string(),
            category: None,
            start: "2024-10-30T12:00:00".to_string(),
            end: "2024-10-30T13:00:00".to_string(),
            color: "#34a853".to_string(),
            photo: None,
            url: None,
        },
    ]
}
