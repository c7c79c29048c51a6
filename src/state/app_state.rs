//! Application state definitions

use super::forms::PersonEditForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    PersonEdit,
    /// A page reached by navigation, identified by its route
    Listing { route: String },
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Route of the page currently shown
    pub location: String,
    pub form: PersonEditForm,
    /// Native constraint failure from the last submit attempt
    pub validation_message: Option<String>,
    /// Number of update requests still in flight
    pub pending_requests: usize,
    /// Alerts waiting to be dismissed, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(location: String, form: PersonEditForm) -> Self {
        Self {
            location,
            form,
            ..Default::default()
        }
    }

    /// Queue an alert. The oldest one is shown until dismissed.
    pub fn push_error(&mut self, message: String) {
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
