//! Infrastructure layer for council-client
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the reqwest-backed council gateway and the
//! configuration file loader.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileDiscussionConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use http::{DISCUSS_PATH, HttpDiscussionGateway, MEMBERS_PATH};
