//! Council membership as reported by `GET /council/members`

use serde::{Deserialize, Serialize};

/// Names of the chairman and the council members
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CouncilMembers {
    pub chairman: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CouncilMembers {
    /// Every seat, chairman first
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.chairman.as_str()).chain(self.members.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_members() {
        let members: CouncilMembers = serde_json::from_str(
            r#"{"chairman": "Chairman (Gemini)", "members": ["Council Member 1 (Mistral)"]}"#,
        )
        .unwrap();
        assert_eq!(
            members.all().collect::<Vec<_>>(),
            vec!["Chairman (Gemini)", "Council Member 1 (Mistral)"]
        );
    }

    #[test]
    fn test_members_default_to_empty() {
        let members: CouncilMembers = serde_json::from_str(r#"{"chairman": "C"}"#).unwrap();
        assert!(members.members.is_empty());
    }
}
