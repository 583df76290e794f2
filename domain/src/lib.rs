//! Domain layer for council-client
//!
//! This crate contains the value objects exchanged with an LLM council
//! backend. It has no dependencies on transport or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Discussion
//!
//! A discussion is requested with a free-form topic and a round count. The
//! backend answers with an ordered list of rounds:
//!
//! - **Numbered rounds**: each participant's contribution to one turn
//! - **Summary round**: the chairman's closing summary, tagged `"Summary"`
//!
//! ## Response validation
//!
//! Decoded JSON is converted into [`DiscussionResponse`] through
//! [`DiscussionResponse::from_value`], which rejects anything that does not
//! match the round shape before a single byte is rendered.

pub mod config;
pub mod core;
pub mod discussion;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use discussion::{
    members::CouncilMembers,
    request::{DiscussionRequest, RoundCount},
    response::{DiscussionResponse, ParticipantResponse, RoundResult, RoundTag, SUMMARY_TAG},
};
