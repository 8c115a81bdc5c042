//! Core calendar logic for fruitcal.
//!
//! This crate provides everything below the presentation layer:
//! - `CalendarEvent` and related types, plus event-to-date binning
//! - month/week grid construction and ISO week numbering
//! - the image-of-the-day roster and resolver
//! - `CalendarSession`, the per-session event store with durable mirroring

pub mod error;
pub mod event;
pub mod grid;
pub mod image;
pub mod session;
pub mod settings;
pub mod storage;
pub mod view;
pub mod weeknum;

pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EventCategory, EventDraft, EventPatch};
pub use image::FruitImage;
pub use session::CalendarSession;
pub use settings::{CalendarSettings, SettingsPatch};
pub use view::ViewType;
