//! Application layer for council-client
//!
//! This crate contains the submission use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_BACKEND_ORIGIN, DEFAULT_ROUNDS};
pub use ports::{
    discussion_gateway::{DiscussionGateway, GatewayError},
    discussion_renderer::DiscussionRenderer,
    discussion_view::DiscussionView,
};
pub use use_cases::submit_discussion::{SubmissionOutcome, SubmitDiscussionUseCase};
