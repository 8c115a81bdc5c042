//! The per-session calendar service: settings, the event collection, and
//! durable mirroring.
//!
//! A `CalendarSession` is constructed once at startup and passed by
//! reference to whatever renders or mutates the calendar. All operations
//! are synchronous; a mutation is visible to every dependent computation
//! (binning, image resolution) as soon as it returns.

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::event::{events_on, sample_events, CalendarEvent, EventDraft, EventPatch};
use crate::image::{image_for_date, FruitImage};
use crate::settings::{CalendarSettings, SettingsPatch};
use crate::storage::{KeyValueStorage, EVENTS_KEY};

pub struct CalendarSession {
    settings: CalendarSettings,
    events: Vec<CalendarEvent>,
    storage: Box<dyn KeyValueStorage>,
}

impl CalendarSession {
    /// Start a session from storage. Missing or unreadable stored data falls
    /// back to the built-in sample events rather than failing the session.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let events = match storage.read(EVENTS_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(events) => events,
                Err(err) => {
                    warn!("stored events are unreadable, starting from samples: {}", err);
                    sample_events()
                }
            },
            Ok(None) => sample_events(),
            Err(err) => {
                warn!("could not read stored events, starting from samples: {}", err);
                sample_events()
            }
        };

        CalendarSession {
            settings: CalendarSettings::default(),
            events,
            storage,
        }
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Merge a partial settings update. Settings are session-scoped and
    /// never written to storage.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Add an event and return its freshly assigned id.
    pub fn add_event(&mut self, draft: EventDraft) -> String {
        let id = Uuid::new_v4().to_string();
        self.events.push(draft.into_event(id.clone()));
        self.persist();
        id
    }

    /// Merge a partial update into an event. No-op when the id is absent.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            patch.apply(event);
            self.persist();
        }
    }

    /// Remove an event. No-op when the id is absent.
    pub fn delete_event(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() != before {
            self.persist();
        }
    }

    /// Events on `date`, sorted ascending by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        events_on(&self.events, date)
    }

    /// The image of the day for `date`, honoring event photo overrides.
    pub fn current_image(&self, date: NaiveDate) -> FruitImage {
        image_for_date(date, &self.events)
    }

    // Mirror the whole collection to storage. Authenticated sessions skip
    // the mirror; write failures are logged and dropped.
    fn persist(&self) {
        if self.settings.logged_in {
            return;
        }

        let payload = match serde_json::to_string(&self.events) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("could not serialize events: {}", err);
                return;
            }
        };

        match self.storage.write(EVENTS_KEY, &payload) {
            Ok(()) => debug!("persisted {} events", self.events.len()),
            Err(err) => warn!("could not persist events: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DEFAULT_COLORS;
    use crate::storage::MemoryStorage;

    fn empty_session() -> (CalendarSession, MemoryStorage) {
        let storage = MemoryStorage::new();
        storage.write(EVENTS_KEY, "[]").unwrap();
        (CalendarSession::load(Box::new(storage.clone())), storage)
    }

    fn draft(title: &str, start: &str) -> EventDraft {
        EventDraft {
            owner_id: 1,
            title: title.to_string(),
            category: None,
            start: start.to_string(),
            end: start.to_string(),
            color: DEFAULT_COLORS[0].to_string(),
            photo: None,
            url: None,
        }
    }

    fn stored_events(storage: &MemoryStorage) -> Vec<CalendarEvent> {
        let payload = storage.read(EVENTS_KEY).unwrap().unwrap();
        serde_json::from_str(&payload).unwrap()
    }

    // --- loading ---

    #[test]
    fn empty_storage_starts_from_samples() {
        let session = CalendarSession::load(Box::new(MemoryStorage::new()));
        assert_eq!(session.events().len(), 3);
        assert_eq!(session.events()[0].title, "Team Meeting");
    }

    #[test]
    fn malformed_storage_falls_back_to_samples() {
        let storage = MemoryStorage::new();
        storage.write(EVENTS_KEY, "{not json").unwrap();

        let session = CalendarSession::load(Box::new(storage));
        assert_eq!(session.events().len(), 3);
    }

    #[test]
    fn stored_events_survive_a_reload() {
        let (mut session, storage) = empty_session();
        session.add_event(draft("Standup", "2024-11-04T09:00"));

        let reloaded = CalendarSession::load(Box::new(storage));
        assert_eq!(reloaded.events().len(), 1);
        assert_eq!(reloaded.events()[0].title, "Standup");
    }

    // --- mutations ---

    #[test]
    fn add_assigns_a_fresh_unused_id() {
        let (mut session, _storage) = empty_session();

        let first = session.add_event(draft("One", "2024-11-04T09:00"));
        let second = session.add_event(draft("Two", "2024-11-04T10:00"));

        assert!(!first.is_empty());
        assert_ne!(first, second);
        assert!(session.events().iter().any(|e| e.id == first));
        assert!(session.events().iter().any(|e| e.id == second));
    }

    #[test]
    fn rapid_adds_never_collide() {
        let (mut session, _storage) = empty_session();
        let ids: Vec<String> = (0..50)
            .map(|i| session.add_event(draft(&format!("E{}", i), "2024-11-04T09:00")))
            .collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn update_merges_partially() {
        let (mut session, _storage) = empty_session();
        let id = session.add_event(draft("Standup", "2024-11-04T09:00"));

        session.update_event(
            &id,
            EventPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        );

        let event = &session.events()[0];
        assert_eq!(event.title, "Renamed");
        assert_eq!(event.start, "2024-11-04T09:00");
    }

    #[test]
    fn update_with_absent_id_is_a_noop() {
        let (mut session, _storage) = empty_session();
        session.add_event(draft("Standup", "2024-11-04T09:00"));

        session.update_event(
            "no-such-id",
            EventPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(session.events()[0].title, "Standup");
    }

    #[test]
    fn delete_removes_and_absent_id_is_a_noop() {
        let (mut session, _storage) = empty_session();
        let id = session.add_event(draft("Standup", "2024-11-04T09:00"));

        session.delete_event("no-such-id");
        assert_eq!(session.events().len(), 1);

        session.delete_event(&id);
        assert!(session.events().is_empty());
    }

    #[test]
    fn back_to_back_mutations_apply_in_order() {
        let (mut session, storage) = empty_session();

        let id = session.add_event(draft("One", "2024-11-04T09:00"));
        session.add_event(draft("Two", "2024-11-04T10:00"));
        session.delete_event(&id);

        let titles: Vec<&str> = session.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Two"]);
        assert_eq!(stored_events(&storage).len(), 1);
    }

    // --- persistence gating ---

    #[test]
    fn mutations_mirror_to_storage_while_logged_out() {
        let (mut session, storage) = empty_session();
        session.add_event(draft("Standup", "2024-11-04T09:00"));

        assert_eq!(stored_events(&storage).len(), 1);
    }

    #[test]
    fn logged_in_sessions_do_not_touch_storage() {
        let (mut session, storage) = empty_session();
        session.update_settings(SettingsPatch {
            logged_in: Some(true),
            ..Default::default()
        });

        session.add_event(draft("Standup", "2024-11-04T09:00"));

        // Storage still holds the empty collection written before login.
        assert!(stored_events(&storage).is_empty());
    }
}
