//! Terminal view
//!
//! Maps the page elements onto a terminal: the loading indicator is a
//! spinner on stderr, and revealing the results container writes the
//! content to stdout or to a file.

use super::memory::{MemoryView, PageState};
use crate::progress::spinner::LoadingSpinner;
use council_application::DiscussionView;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Where revealed results go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    #[default]
    Stdout,
    /// Overwritten on every reveal
    File(PathBuf),
}

/// View used by the CLI and the REPL
pub struct TerminalView {
    page: MemoryView,
    spinner: Option<LoadingSpinner>,
    sink: OutputSink,
}

impl TerminalView {
    /// A file sink always gets plain text, whatever the terminal supports.
    pub fn new(sink: OutputSink) -> Self {
        if matches!(sink, OutputSink::File(_)) {
            colored::control::set_override(false);
        }
        Self {
            page: MemoryView::new(),
            spinner: Some(LoadingSpinner::new()),
            sink,
        }
    }

    /// Disable the spinner (`--quiet`)
    pub fn without_spinner(mut self) -> Self {
        self.spinner = None;
        self
    }

    /// Set the form field values for the next submission
    pub fn fill(&self, topic: impl Into<String>, rounds: impl Into<String>) {
        self.page.fill(topic, rounds);
    }

    pub fn snapshot(&self) -> PageState {
        self.page.snapshot()
    }

    fn emit(&self, content: &str) {
        match &self.sink {
            OutputSink::Stdout => println!("{}", content),
            OutputSink::File(path) => match std::fs::write(path, content) {
                Ok(()) => info!("Wrote results to {}", path.display()),
                Err(e) => warn!("Could not write results to {}: {}", path.display(), e),
            },
        }
    }
}

impl DiscussionView for TerminalView {
    fn topic(&self) -> String {
        self.page.topic()
    }

    fn rounds_text(&self) -> String {
        self.page.rounds_text()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.page.set_submit_enabled(enabled);
    }

    fn set_loading_visible(&self, visible: bool) {
        self.page.set_loading_visible(visible);
        if let Some(spinner) = &self.spinner {
            if visible {
                spinner.show();
            } else {
                spinner.hide();
            }
        }
    }

    fn set_results_visible(&self, visible: bool) {
        let was_visible = self.page.snapshot().results_visible;
        self.page.set_results_visible(visible);
        if visible && !was_visible {
            // The spinner shares the terminal with the results
            if let Some(spinner) = &self.spinner {
                spinner.hide();
            }
            self.emit(&self.page.snapshot().content);
        }
    }

    fn clear_content(&self) {
        self.page.clear_content();
    }

    fn set_content(&self, html: &str) {
        self.page.set_content(html);
    }

    fn scroll_results_into_view(&self) {
        self.page.scroll_results_into_view();
        debug!("Results revealed");
    }
}
