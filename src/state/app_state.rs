//! Application state definitions

use super::forms::FormState;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Reset confirmation waiting for an answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingReset {
    /// true = Reset highlighted, false = Cancel highlighted
    pub selected_option: bool,
}

impl PendingReset {
    pub fn toggle(&mut self) {
        self.selected_option = !self.selected_option;
    }
}

/// UI-only state that lives outside the store
#[derive(Debug, Default)]
pub struct AppState {
    // Form controls
    pub form: FormState,

    // Modals
    pub pending_reset: Option<PendingReset>,
    pub error_queue: VecDeque<String>,

    // Status bar
    pub status_message: Option<String>,
    pub last_prediction_at: Option<DateTime<Local>>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
