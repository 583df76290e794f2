//! Discussion subdomain
//!
//! - [`request::DiscussionRequest`] — what is sent to `/council/discuss`
//! - [`response::DiscussionResponse`] — the validated ordered rounds
//! - [`members::CouncilMembers`] — who sits on the council

pub mod members;
pub mod request;
pub mod response;
