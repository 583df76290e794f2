//! Discussion defaults from TOML (`[discussion]` section)

use council_application::DEFAULT_ROUNDS;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw discussion configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiscussionConfig {
    /// Text pre-filled in the rounds field.
    ///
    /// Kept as text so it is parsed exactly like typed input; integers are
    /// accepted too (`rounds = 3`, `COUNCIL_DISCUSSION__ROUNDS=3`).
    #[serde(deserialize_with = "text_or_integer")]
    pub rounds: String,
}

impl Default for FileDiscussionConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS.to_string(),
        }
    }
}

fn text_or_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Integer(n) => n.to_string(),
    })
}
