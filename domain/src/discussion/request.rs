//! Discussion request value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of discussion rounds as typed into the form.
///
/// Parsing follows integer-prefix rules: leading whitespace is skipped, an
/// optional sign and a run of digits are read, anything after is ignored.
/// Text without a leading integer is "not a number" and is passed through
/// to the backend as JSON `null`, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundCount(Option<i64>);

impl RoundCount {
    /// A count that parsed to an integer
    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// The not-a-number count
    pub fn not_a_number() -> Self {
        Self(None)
    }

    /// Parse the raw text of the rounds field
    pub fn parse(text: &str) -> Self {
        Self(parse_int_prefix(text))
    }

    /// The parsed integer, if any
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for RoundCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "NaN"),
        }
    }
}

impl From<i64> for RoundCount {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for RoundCount {
    fn from(value: i32) -> Self {
        Self::new(value.into())
    }
}

/// Read a leading integer, accepting a `0x` prefix for hexadecimal.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if s.len() >= 2 && (s.starts_with("0x") || s.starts_with("0X")) {
        (16, &s[2..])
    } else {
        (10, s)
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let signed = if negative {
        format!("-{}", &digits[..end])
    } else {
        digits[..end].to_string()
    };
    i64::from_str_radix(&signed, radix).ok()
}

/// Body of `POST /council/discuss`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionRequest {
    /// Free-form topic, sent exactly as entered
    pub topic: String,
    /// Round count, `null` on the wire when not a number
    pub rounds: RoundCount,
}

impl DiscussionRequest {
    pub fn new(topic: impl Into<String>, rounds: impl Into<RoundCount>) -> Self {
        Self {
            topic: topic.into(),
            rounds: rounds.into(),
        }
    }

    /// Build a request from the two raw form field values
    pub fn from_form(topic: impl Into<String>, rounds_text: &str) -> Self {
        Self::new(topic, RoundCount::parse(rounds_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(RoundCount::parse("3").value(), Some(3));
        assert_eq!(RoundCount::parse("  42").value(), Some(42));
        assert_eq!(RoundCount::parse("-2").value(), Some(-2));
        assert_eq!(RoundCount::parse("+7").value(), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(RoundCount::parse("3 rounds").value(), Some(3));
        assert_eq!(RoundCount::parse("2.9").value(), Some(2));
        assert_eq!(RoundCount::parse("12abc").value(), Some(12));
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(RoundCount::parse("0x10").value(), Some(16));
        assert!(RoundCount::parse("0x").is_nan());
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(RoundCount::parse("").is_nan());
        assert!(RoundCount::parse("abc").is_nan());
        assert!(RoundCount::parse("-").is_nan());
        assert!(RoundCount::parse(" . 5").is_nan());
        assert_eq!(RoundCount::parse("abc").to_string(), "NaN");
    }

    #[test]
    fn test_parse_overflow_is_nan() {
        assert!(RoundCount::parse("99999999999999999999999").is_nan());
        assert!(RoundCount::parse("9223372036854775808").is_nan());
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(RoundCount::parse("-9223372036854775808").value(), Some(i64::MIN));
        assert_eq!(RoundCount::parse("9223372036854775807").value(), Some(i64::MAX));
        assert_eq!(RoundCount::parse("-0x10").value(), Some(-16));
    }

    #[test]
    fn test_request_serializes_topic_and_rounds() {
        let request = DiscussionRequest::from_form("Is Rust fun?", "3");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"topic": "Is Rust fun?", "rounds": 3})
        );
    }

    #[test]
    fn test_nan_rounds_serialize_as_null() {
        let request = DiscussionRequest::from_form("topic", "many");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"topic":"topic","rounds":null}"#);
    }

    #[test]
    fn test_topic_is_sent_verbatim() {
        let topic = "  <b>spaces</b> & \"quotes\"\n";
        let request = DiscussionRequest::from_form(topic, "1");
        assert_eq!(request.topic, topic);
    }
}
