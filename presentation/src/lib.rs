//! Presentation layer for council-client
//!
//! This crate contains the renderers that turn a discussion into markup or
//! terminal text, the view implementations the submission use case drives,
//! CLI definitions, and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use chat::{DiscussionRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use output::{
    console::ConsoleFormatter,
    html::{HtmlRenderer, escape_html},
    json::JsonFormatter,
    renderer_for,
};
pub use progress::spinner::LoadingSpinner;
pub use view::{
    memory::{MemoryView, PageState},
    terminal::{OutputSink, TerminalView},
};
