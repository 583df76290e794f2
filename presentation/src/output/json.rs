//! JSON output for discussion results

use council_application::DiscussionRenderer;
use council_domain::DiscussionResponse;
use serde_json::json;

/// Emits the validated discussion as pretty-printed JSON
pub struct JsonFormatter;

impl DiscussionRenderer for JsonFormatter {
    fn render_discussion(&self, response: &DiscussionResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_error(&self, message: &str, origin: &str) -> String {
        let body = json!({
            "error": message,
            "hint": format!("Make sure the backend server is running on {}", origin),
        });
        serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::RoundResult;
    use serde_json::Value;

    #[test]
    fn test_discussion_json_keeps_order() {
        let response = DiscussionResponse::new(vec![
            RoundResult::new(1).with_response("Zed", "z").with_response("Amy", "a"),
        ]);
        let output = JsonFormatter.render_discussion(&response);
        assert!(output.find("Zed").unwrap() < output.find("Amy").unwrap());

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rounds"][0]["round"], 1);
    }

    #[test]
    fn test_error_json() {
        let output = JsonFormatter.render_error("HTTP error! status: 500", "http://localhost:8000");
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "HTTP error! status: 500");
        assert_eq!(
            value["hint"],
            "Make sure the backend server is running on http://localhost:8000"
        );
    }
}
