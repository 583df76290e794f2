//! Renderers for discussion results
//!
//! Each renderer implements the application's
//! [`DiscussionRenderer`](council_application::DiscussionRenderer) port.

pub mod console;
pub mod html;
pub mod json;

use console::ConsoleFormatter;
use council_application::DiscussionRenderer;
use council_domain::OutputFormat;
use html::HtmlRenderer;
use json::JsonFormatter;

/// Pick the renderer for an output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn DiscussionRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::fragment()),
        OutputFormat::Page => Box::new(HtmlRenderer::page()),
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
