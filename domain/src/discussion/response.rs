//! Discussion response value objects and shape validation.
//!
//! The backend's JSON is trusted for nothing: [`DiscussionResponse::from_value`]
//! walks the decoded value and either produces fully-typed rounds or a
//! [`DomainError::MalformedResponse`] naming the first offending path.

use crate::core::error::DomainError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Round tag that marks the chairman's closing summary
pub const SUMMARY_TAG: &str = "Summary";

/// Identifier of a round: a number, or a label such as `"Summary"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundTag {
    Number(Number),
    Label(String),
}

impl RoundTag {
    /// True only for the exact string `"Summary"`
    pub fn is_summary(&self) -> bool {
        matches!(self, RoundTag::Label(label) if label == SUMMARY_TAG)
    }
}

impl fmt::Display for RoundTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundTag::Number(n) => match n.as_f64() {
                // Integral floats print without a fraction, like a JS number
                Some(v) if n.is_f64() && v.is_finite() && v.fract() == 0.0 => {
                    if v == 0.0 {
                        write!(f, "0")
                    } else {
                        write!(f, "{:.0}", v)
                    }
                }
                _ => write!(f, "{}", n),
            },
            RoundTag::Label(label) => write!(f, "{}", label),
        }
    }
}

impl From<i64> for RoundTag {
    fn from(value: i64) -> Self {
        RoundTag::Number(value.into())
    }
}

impl From<i32> for RoundTag {
    fn from(value: i32) -> Self {
        RoundTag::Number(value.into())
    }
}

impl From<&str> for RoundTag {
    fn from(value: &str) -> Self {
        RoundTag::Label(value.to_string())
    }
}

/// One participant's contribution to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantResponse {
    pub name: String,
    pub content: String,
}

impl ParticipantResponse {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Chairman entries are visually distinguished; nothing else differs.
    pub fn is_chairman(&self) -> bool {
        self.name.contains("Chairman")
    }
}

/// A single round of the discussion
///
/// `responses` keeps the order in which the backend listed participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub round: RoundTag,
    #[serde(serialize_with = "serialize_responses")]
    pub responses: Vec<ParticipantResponse>,
}

impl RoundResult {
    pub fn new(round: impl Into<RoundTag>) -> Self {
        Self {
            round: round.into(),
            responses: Vec::new(),
        }
    }

    pub fn with_response(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.responses.push(ParticipantResponse::new(name, content));
        self
    }

    pub fn is_summary(&self) -> bool {
        self.round.is_summary()
    }

    /// Heading shown above the round: "Final Summary" or "Round {tag}"
    pub fn title(&self) -> String {
        if self.is_summary() {
            "Final Summary".to_string()
        } else {
            format!("Round {}", self.round)
        }
    }

    fn from_value(value: &Value, path: &str) -> Result<Self, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::malformed(path, "an object"))?;

        let round = match object.get("round") {
            Some(Value::Number(n)) => RoundTag::Number(n.clone()),
            Some(Value::String(s)) => RoundTag::Label(s.clone()),
            _ => {
                return Err(DomainError::malformed(
                    format!("{}.round", path),
                    "a string or a number",
                ));
            }
        };

        let responses = object
            .get("responses")
            .and_then(Value::as_object)
            .ok_or_else(|| DomainError::malformed(format!("{}.responses", path), "an object"))?
            .iter()
            .map(|(name, content)| match content {
                Value::String(text) => Ok(ParticipantResponse::new(name, text)),
                _ => Err(DomainError::malformed(
                    format!("{}.responses[{:?}]", path, name),
                    "a string",
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { round, responses })
    }
}

fn serialize_responses<S: Serializer>(
    responses: &[ParticipantResponse],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(responses.len()))?;
    for response in responses {
        map.serialize_entry(&response.name, &response.content)?;
    }
    map.end()
}

/// Validated body of a successful `/council/discuss` call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiscussionResponse {
    /// Topic echoed back by the backend, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub rounds: Vec<RoundResult>,
}

impl DiscussionResponse {
    pub fn new(rounds: Vec<RoundResult>) -> Self {
        Self { topic: None, rounds }
    }

    /// Validate a decoded JSON body against the round shape.
    ///
    /// Extra fields are ignored. A missing or non-string `topic` is treated
    /// as absent since it is never rendered as a heading.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let object: Map<String, Value> = match value {
            Value::Object(map) => map,
            _ => return Err(DomainError::malformed("response", "a JSON object")),
        };

        let rounds = object
            .get("rounds")
            .and_then(Value::as_array)
            .ok_or_else(|| DomainError::malformed("rounds", "an array"))?
            .iter()
            .enumerate()
            .map(|(i, round)| RoundResult::from_value(round, &format!("rounds[{}]", i)))
            .collect::<Result<Vec<_>, _>>()?;

        let topic = object
            .get("topic")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { topic, rounds })
    }
}
