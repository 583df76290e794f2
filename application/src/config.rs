//! Application-level configuration.
//!
//! Values the submission use case needs at runtime, resolved by the
//! infrastructure config loader and the CLI before the use case is built.

/// Backend origin used when nothing else is configured
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8000";

/// Round count pre-filled in the form, matching the backend's default
pub const DEFAULT_ROUNDS: &str = "2";

/// Client behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the council backend, without trailing slash
    pub origin: String,
}

impl ClientConfig {
    /// Creates a config for `origin`, dropping any trailing slashes.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of an endpoint path such as `/council/discuss`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_ORIGIN)
    }
}
