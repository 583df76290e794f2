//! Output format value object

use serde::{Deserialize, Serialize};

/// How a rendered discussion is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment for the content container (default)
    #[default]
    Html,
    /// Standalone HTML document with styles
    Page,
    /// Colored terminal text
    Text,
    /// Pretty-printed JSON
    Json,
}
