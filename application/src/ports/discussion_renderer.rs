//! Renderer port
//!
//! Turns a validated discussion (or a failure) into the markup written to
//! the content container. Implementations live in the presentation layer.

use council_domain::DiscussionResponse;

/// Produces content-container markup
pub trait DiscussionRenderer: Send + Sync {
    /// Render every round, in order, as one atomic chunk of markup
    fn render_discussion(&self, response: &DiscussionResponse) -> String;

    /// Render a failure with a hint pointing at `origin`
    fn render_error(&self, message: &str, origin: &str) -> String;
}
