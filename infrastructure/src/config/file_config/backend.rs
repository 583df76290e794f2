//! Backend configuration from TOML (`[backend]` section)

use super::ConfigValidationError;
use council_application::DEFAULT_BACKEND_ORIGIN;
use serde::{Deserialize, Serialize};

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Origin of the council API, e.g. `http://localhost:8000`
    pub origin: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_BACKEND_ORIGIN.to_string(),
        }
    }
}

impl FileBackendConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let origin = self.origin.trim();
        if origin.is_empty() {
            return Err(ConfigValidationError::EmptyOrigin);
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidOriginScheme(origin.to_string()));
        }
        Ok(())
    }
}
