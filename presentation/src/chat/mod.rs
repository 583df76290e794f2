//! Interactive discussion module
//!
//! Provides a readline-based interactive interface to the council.

mod repl;

pub use repl::{DiscussionRepl, ReplCommand};
