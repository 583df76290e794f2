//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod discussion;
mod output;
mod repl;

pub use backend::FileBackendConfig;
pub use discussion::FileDiscussionConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use council_application::ClientConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.origin cannot be empty")]
    EmptyOrigin,

    #[error("backend.origin must start with http:// or https://, got '{0}'")]
    InvalidOriginScheme(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the council backend lives
    pub backend: FileBackendConfig,
    /// Form defaults
    pub discussion: FileDiscussionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.backend.validate()
    }

    /// Application config for building the gateway
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend.origin.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
origin = "http://council.internal:9000/"

[discussion]
rounds = "4"

[output]
format = "page"
color = false

[repl]
history_file = "/tmp/council-history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.origin, "http://council.internal:9000/");
        assert_eq!(config.discussion.rounds, "4");
        assert_eq!(config.output.format, Some(OutputFormat::Page));
        assert!(!config.output.color);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("/tmp/council-history.txt")
        );
        assert_eq!(
            config.client_config().endpoint("/council/discuss"),
            "http://council.internal:9000/council/discuss"
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
format = "text"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.origin, "http://localhost:8000");
        assert_eq!(config.discussion.rounds, "2");
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.client_config(), ClientConfig::default());
    }
}
