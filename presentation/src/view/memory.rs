//! In-memory view
//!
//! Holds the page state a browser would keep in the DOM: the two form
//! fields, the submit control, the loading indicator and the results and
//! content containers. Used directly in tests and as the state store of
//! [`TerminalView`](super::terminal::TerminalView).

use council_application::{DEFAULT_ROUNDS, DiscussionView};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Snapshot of everything a view tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub topic: String,
    pub rounds: String,
    pub submit_enabled: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub content: String,
    /// Times the results container was scrolled into view
    pub scroll_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            rounds: DEFAULT_ROUNDS.to_string(),
            submit_enabled: true,
            loading_visible: false,
            results_visible: false,
            content: String::new(),
            scroll_count: 0,
        }
    }
}

/// View whose state lives entirely in memory
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<PageState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View with both form fields filled in
    pub fn with_form(topic: impl Into<String>, rounds: impl Into<String>) -> Self {
        let view = Self::new();
        view.fill(topic, rounds);
        view
    }

    /// Replace the form field values, as a user typing would
    pub fn fill(&self, topic: impl Into<String>, rounds: impl Into<String>) {
        let mut state = self.state();
        state.topic = topic.into();
        state.rounds = rounds.into();
    }

    pub fn snapshot(&self) -> PageState {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiscussionView for MemoryView {
    fn topic(&self) -> String {
        self.state().topic.clone()
    }

    fn rounds_text(&self) -> String {
        self.state().rounds.clone()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state().submit_enabled = enabled;
    }

    fn set_loading_visible(&self, visible: bool) {
        self.state().loading_visible = visible;
    }

    fn set_results_visible(&self, visible: bool) {
        self.state().results_visible = visible;
    }

    fn clear_content(&self) {
        self.state().content.clear();
    }

    fn set_content(&self, html: &str) {
        self.state().content = html.to_string();
    }

    fn scroll_results_into_view(&self) {
        self.state().scroll_count += 1;
    }
}
