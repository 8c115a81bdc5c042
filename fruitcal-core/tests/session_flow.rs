//! End-to-end session flow: storage load, mutation, binning, image
//! resolution, and durable mirroring through the public API.

use chrono::NaiveDate;
use fruitcal_core::event::{EventCategory, EventDraft, DEFAULT_COLORS};
use fruitcal_core::storage::{KeyValueStorage, MemoryStorage, EVENTS_KEY};
use fruitcal_core::{CalendarSession, SettingsPatch};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(title: &str, start: &str, end: &str) -> EventDraft {
    EventDraft {
        owner_id: 1,
        title: title.to_string(),
        category: None,
        start: start.to_string(),
        end: end.to_string(),
        color: DEFAULT_COLORS[0].to_string(),
        photo: None,
        url: None,
    }
}

#[test]
fn fresh_session_serves_the_sample_calendar() {
    let session = CalendarSession::load(Box::new(MemoryStorage::new()));

    let oct_29 = session.events_on(date(2024, 10, 29));
    assert_eq!(oct_29.len(), 2);
    assert_eq!(oct_29[0].title, "Team Meeting");
    assert_eq!(oct_29[0].category, Some(EventCategory::Meeting));
    assert_eq!(oct_29[1].title, "Client Call");

    let oct_30 = session.events_on(date(2024, 10, 30));
    assert_eq!(oct_30.len(), 1);
    assert_eq!(oct_30[0].title, "Lunch Break");
}

#[test]
fn added_event_appears_once_and_in_start_order() {
    let storage = MemoryStorage::new();
    storage.write(EVENTS_KEY, "[]").unwrap();
    let mut session = CalendarSession::load(Box::new(storage));

    session.add_event(draft(
        "Afternoon Review",
        "2024-10-29T15:00:00",
        "2024-10-29T16:00:00",
    ));
    let meeting = draft("Team Meeting", "2024-10-29T10:00:00", "2024-10-29T11:00:00");
    meeting.validate().unwrap();
    session.add_event(meeting);

    let bound = session.events_on(date(2024, 10, 29));
    let titles: Vec<&str> = bound.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Team Meeting", "Afternoon Review"]);
    assert_eq!(
        bound.iter().filter(|e| e.title == "Team Meeting").count(),
        1
    );
}

#[test]
fn photo_event_overrides_the_day_image_until_deleted() {
    let storage = MemoryStorage::new();
    storage.write(EVENTS_KEY, "[]").unwrap();
    let mut session = CalendarSession::load(Box::new(storage));

    let day = date(2024, 3, 15);
    let roster_image = session.current_image(day);
    assert_ne!(roster_image.name, "Custom");

    let mut with_photo = draft("Birthday", "2024-03-15T12:00", "2024-03-15T13:00");
    with_photo.photo = Some("photos/cake.png".to_string());
    with_photo.url = Some("https://example.com/party".to_string());
    let id = session.add_event(with_photo);

    let overridden = session.current_image(day);
    assert_eq!(overridden.name, "Custom");
    assert_eq!(overridden.image, "photos/cake.png");
    assert_eq!(overridden.url.as_deref(), Some("https://example.com/party"));

    session.delete_event(&id);
    assert_eq!(session.current_image(day), roster_image);
}

#[test]
fn mutations_round_trip_through_storage_across_sessions() {
    let storage = MemoryStorage::new();
    storage.write(EVENTS_KEY, "[]").unwrap();

    let mut session = CalendarSession::load(Box::new(storage.clone()));
    let id = session.add_event(draft("Keeper", "2024-11-04T09:00", "2024-11-04T10:00"));
    session.add_event(draft("Goner", "2024-11-05T09:00", "2024-11-05T10:00"));

    let mut second = CalendarSession::load(Box::new(storage.clone()));
    assert_eq!(second.events().len(), 2);

    let goner_id = second
        .events()
        .iter()
        .find(|e| e.title == "Goner")
        .map(|e| e.id.clone())
        .unwrap();
    second.delete_event(&goner_id);

    let third = CalendarSession::load(Box::new(storage));
    assert_eq!(third.events().len(), 1);
    assert_eq!(third.events()[0].id, id);
}

#[test]
fn logged_in_session_keeps_mutations_off_storage() {
    let storage = MemoryStorage::new();
    storage.write(EVENTS_KEY, "[]").unwrap();

    let mut session = CalendarSession::load(Box::new(storage.clone()));
    session.update_settings(SettingsPatch {
        logged_in: Some(true),
        ..Default::default()
    });
    session.add_event(draft("Private", "2024-11-04T09:00", "2024-11-04T10:00"));

    assert_eq!(session.events().len(), 1);
    assert_eq!(storage.read(EVENTS_KEY).unwrap().as_deref(), Some("[]"));
}
