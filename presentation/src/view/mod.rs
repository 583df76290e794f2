//! Implementations of the [`DiscussionView`](council_application::DiscussionView) port
//!
//! - [`memory::MemoryView`] — in-memory page state, no I/O
//! - [`terminal::TerminalView`] — spinner for loading, stdout or a file for results

pub mod memory;
pub mod terminal;
