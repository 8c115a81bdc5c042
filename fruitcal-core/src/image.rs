//! The image-of-the-day roster and resolver.
//!
//! Each date maps to one decorative image: by default the fruit roster entry
//! at `(day_of_year - 1) mod 9`, unless an event on that date carries a
//! custom photo, in which case the earliest such event wins.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::{events_on, CalendarEvent};

/// A decorative image: either a fixed roster entry or a synthetic record
/// wrapping an event's custom photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitImage {
    pub id: u32,
    pub name: String,
    /// Asset reference or photo URL
    pub image: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

static ROSTER: LazyLock<Vec<FruitImage>> = LazyLock::new(|| {
    vec![
        fruit(1, "Apple", "assets/apple.png", "A crisp and sweet red apple"),
        fruit(2, "Apricot", "assets/apricot.png", "A golden apricot with velvety skin"),
        fruit(3, "Banana", "assets/banana.png", "A yellow banana full of potassium"),
        fruit(4, "Kiwi", "assets/kiwi.png", "A tangy kiwi with bright green flesh"),
        fruit(
            5,
            "Mango",
            "assets/mango.png",
            "A popular variety found in the Caribbean and South American countries",
        ),
        fruit(6, "Orange", "assets/orange.png", "A juicy orange packed with vitamin C"),
        fruit(7, "Peach", "assets/peach.png", "A soft and fuzzy peach"),
        fruit(8, "Pear", "assets/pear.png", "A sweet yellow pear"),
        fruit(
            9,
            "Pomegranate",
            "assets/pomegranate.png",
            "A ruby red pomegranate with jeweled seeds",
        ),
    ]
});

fn fruit(id: u32, name: &str, image: &str, description: &str) -> FruitImage {
    FruitImage {
        id,
        name: name.to_string(),
        image: image.to_string(),
        description: Some(description.to_string()),
        url: None,
    }
}

/// The fixed image roster, cycled by day of year.
pub fn roster() -> &'static [FruitImage] {
    &ROSTER
}

/// 1-based ordinal of `date` within its year: whole days since the day
/// before January 1. Jan 1 yields 1, Dec 31 yields 365 or 366.
pub fn day_of_year(date: NaiveDate) -> i64 {
    let jan0 = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .expect("valid date")
        .pred_opt()
        .expect("previous day exists");
    (date - jan0).num_days()
}

/// Resolve the image for a date. Always yields exactly one image.
pub fn image_for_date(date: NaiveDate, events: &[CalendarEvent]) -> FruitImage {
    let index = (day_of_year(date) - 1).rem_euclid(ROSTER.len() as i64) as usize;

    // An event photo on this date overrides the roster entry; ties on the
    // same date resolve to the earliest start.
    let with_photo: Vec<&CalendarEvent> = events_on(events, date)
        .into_iter()
        .filter(|e| e.photo.as_deref().is_some_and(|p| !p.is_empty()))
        .collect();

    if let Some(event) = with_photo.first() {
        if let Some(photo) = &event.photo {
            return FruitImage {
                id: 0,
                name: "Custom".to_string(),
                image: photo.clone(),
                description: None,
                url: event.url.clone(),
            };
        }
    }

    ROSTER[index].clone()
}
