//! View port
//!
//! The context object the submission handler works against. A view is
//! constructed once, binding the form fields, the submit control, the
//! loading indicator and the results/content containers, then handed to
//! every submission.
//!
//! Methods take `&self`; implementations keep their state behind interior
//! mutability so a view can be shared with progress displays.

/// UI surface bound once at initialization
pub trait DiscussionView: Send + Sync {
    /// Current value of the topic field
    fn topic(&self) -> String;

    /// Raw text of the round-count field
    fn rounds_text(&self) -> String;

    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Show or hide the loading indicator
    fn set_loading_visible(&self, visible: bool);

    /// Show or hide the results container
    fn set_results_visible(&self, visible: bool);

    /// Empty the content container
    fn clear_content(&self);

    /// Replace the content container's markup
    fn set_content(&self, html: &str);

    /// Bring the top of the results container into view
    fn scroll_results_into_view(&self);
}
