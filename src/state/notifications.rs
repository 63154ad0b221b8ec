//! Header notification list and dropdown state.
//!
//! DESIGN
//! ======
//! The list is seeded from a bundled JSON file and only ever lives in
//! memory; read/delete/clear actions are not persisted anywhere.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::{Deserialize, Serialize};

/// Bundled notification seed.
const SEED_JSON: &str = include_str!("../../data/notifications.json");
/// Highest unread count shown verbatim on the bell badge.
const BADGE_MAX: usize = 9;

/// Category of a notification; drives the icon accent color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Primary,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// CSS modifier class for the icon bubble.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Self::Success => "notification__icon--success",
            Self::Warning => "notification__icon--warning",
            Self::Info => "notification__icon--info",
            Self::Primary => "notification__icon--primary",
            Self::Other => "notification__icon--neutral",
        }
    }
}

/// A single notification entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Preformatted relative time ("2 min ago").
    pub time: String,
    /// Short glyph rendered inside the icon bubble.
    pub icon: String,
    #[serde(default)]
    pub is_read: bool,
}

/// Dropdown state plus the notification list.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub open: bool,
}

impl NotificationsState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items, open: false }
    }

    /// State seeded from the bundled JSON list.
    pub fn seeded() -> Self {
        Self::new(parse_seed(SEED_JSON))
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn has_unread(&self) -> bool {
        self.items.iter().any(|n| !n.is_read)
    }

    /// Bell badge text: the unread count, `9+` past nine, none at zero.
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
            n => Some(n.to_string()),
        }
    }

    /// Dropdown subtitle, e.g. `3 unread notifications`.
    pub fn unread_summary(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            1 => Some("1 unread notification".to_owned()),
            n => Some(format!("{n} unread notifications")),
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    pub fn delete(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop every notification and close the dropdown.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.open = false;
    }
}

/// Parse a notification list, yielding an empty list on malformed input.
pub fn parse_seed(raw: &str) -> Vec<Notification> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("notifications: ignoring malformed seed: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            Vec::new()
        }
    }
}
