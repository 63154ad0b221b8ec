//! Local UI chrome state (tabs, modal visibility, viewport size).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `notifications`) so rendering controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    DataIngestion,
}

impl DashboardTab {
    pub const ALL: [Self; 2] = [Self::Overview, Self::DataIngestion];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::DataIngestion => "Data Ingestion",
        }
    }
}

/// UI state for tabs, the chat modal, and responsive layout.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: DashboardTab,
    pub chat_open: bool,
    /// Bumped on every open so the modal re-initializes even when the
    /// subject is unchanged.
    pub chat_open_seq: u64,
    pub chat_subject: Option<String>,
    pub small_screen: bool,
}

impl UiState {
    /// Open the chat modal about `subject`.
    pub fn open_chat(&mut self, subject: Option<String>) {
        self.chat_subject = subject;
        self.chat_open = true;
        self.chat_open_seq += 1;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }
}
