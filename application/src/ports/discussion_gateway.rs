//! Discussion gateway port
//!
//! Defines the interface for talking to the council backend.

use async_trait::async_trait;
use council_domain::{CouncilMembers, DiscussionRequest, DomainError};
use thiserror::Error;

/// Errors that can occur while requesting a discussion.
///
/// Every variant ends up in the same user-visible error block; the
/// distinction exists for logging and for tests.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived with a status outside 2xx
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    /// The body was JSON but not shaped like a discussion
    #[error(transparent)]
    MalformedResponse(#[from] DomainError),
}

impl GatewayError {
    /// Status code for [`GatewayError::HttpStatus`]
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Gateway to the council backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DiscussionGateway: Send + Sync {
    /// Origin requests are sent to, shown in the error hint
    fn origin(&self) -> &str;

    /// `POST /council/discuss` and return the decoded, unvalidated JSON body
    async fn discuss(
        &self,
        request: &DiscussionRequest,
    ) -> Result<serde_json::Value, GatewayError>;

    /// `GET /council/members`
    async fn members(&self) -> Result<CouncilMembers, GatewayError>;
}
