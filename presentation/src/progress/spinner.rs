//! Loading indicator backed by an indicatif spinner

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

const DEFAULT_MESSAGE: &str = "The council is deliberating...";

/// Spinner shown while a request is in flight
pub struct LoadingSpinner {
    bar: Mutex<Option<ProgressBar>>,
    message: String,
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self::with_message(DEFAULT_MESSAGE)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            bar: Mutex::new(None),
            message: message.into(),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning; no-op if already visible
    pub fn show(&self) {
        let mut bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        if bar.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(self.message.clone());
        pb.enable_steady_tick(Duration::from_millis(100));
        *bar = Some(pb);
    }

    /// Stop and erase the spinner
    pub fn hide(&self) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadingSpinner {
    fn drop(&mut self) {
        self.hide();
    }
}
