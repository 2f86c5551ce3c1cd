//! Reactive copy of the session record shared by every view.
//!
//! The session store is the source of truth; views write to it through the
//! services and then publish the returned record here so guards re-evaluate.

use dioxus::prelude::*;

use mockview_core::model::{FontChoice, SessionRecord};

#[derive(Clone, Copy, PartialEq)]
pub struct UiSession {
    record: Signal<Option<SessionRecord>>,
    font: Signal<FontChoice>,
}

impl UiSession {
    /// Not loaded yet; guards wait instead of redirecting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            record: Signal::new(None),
            font: Signal::new(FontChoice::default()),
        }
    }

    #[must_use]
    pub fn preloaded(record: SessionRecord) -> Self {
        Self {
            record: Signal::new(Some(record)),
            font: Signal::new(FontChoice::default()),
        }
    }

    /// `None` until the store has been read once.
    #[must_use]
    pub fn record(&self) -> Option<SessionRecord> {
        self.record.read().clone()
    }

    /// The loaded record, or an anonymous one while loading.
    #[must_use]
    pub fn current(&self) -> SessionRecord {
        self.record().unwrap_or_default()
    }

    pub fn publish(&mut self, record: SessionRecord) {
        self.record.set(Some(record));
    }

    #[must_use]
    pub fn font(&self) -> FontChoice {
        *self.font.read()
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.font.set(font);
    }
}

impl Default for UiSession {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub fn use_ui_session() -> UiSession {
    use_context::<UiSession>()
}
