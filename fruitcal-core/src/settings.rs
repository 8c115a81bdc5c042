//! Session-scoped calendar settings.
//!
//! Settings live in memory for the lifetime of a session and are never
//! persisted; every session starts from the same defaults.

use crate::view::ViewType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSettings {
    /// Authenticated sessions do not mirror events to local storage.
    pub logged_in: bool,
    pub owner_id: u32,
    pub week_numbers: bool,
    pub weekday_initials: bool,
    pub day_navigator: bool,
    pub week_navigator: bool,
    pub month_navigator: bool,
    pub year_navigator: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings {
            logged_in: false,
            owner_id: 1,
            week_numbers: true,
            weekday_initials: true,
            day_navigator: true,
            week_navigator: true,
            month_navigator: true,
            year_navigator: true,
        }
    }
}

impl CalendarSettings {
    /// Whether the navigator sidebar is shown for a view.
    pub fn navigator_visible(&self, view: ViewType) -> bool {
        match view {
            ViewType::Day => self.day_navigator,
            ViewType::Week => self.week_navigator,
            ViewType::Month => self.month_navigator,
            ViewType::Year => self.year_navigator,
        }
    }

    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(logged_in) = patch.logged_in {
            self.logged_in = logged_in;
        }
        if let Some(owner_id) = patch.owner_id {
            self.owner_id = owner_id;
        }
        if let Some(week_numbers) = patch.week_numbers {
            self.week_numbers = week_numbers;
        }
        if let Some(weekday_initials) = patch.weekday_initials {
            self.weekday_initials = weekday_initials;
        }
        if let Some(day_navigator) = patch.day_navigator {
            self.day_navigator = day_navigator;
        }
        if let Some(week_navigator) = patch.week_navigator {
            self.week_navigator = week_navigator;
        }
        if let Some(month_navigator) = patch.month_navigator {
            self.month_navigator = month_navigator;
        }
        if let Some(year_navigator) = patch.year_navigator {
            self.year_navigator = year_navigator;
        }
    }
}

/// A partial settings update. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub logged_in: Option<bool>,
    pub owner_id: Option<u32>,
    pub week_numbers: Option<bool>,
    pub weekday_initials: Option<bool>,
    pub day_navigator: Option<bool>,
    pub week_navigator: Option<bool>,
    pub month_navigator: Option<bool>,
    pub year_navigator: Option<bool>,
}
