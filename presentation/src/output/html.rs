//! HTML renderer for discussion results
//!
//! Produces the markup written into the content container. Every piece of
//! text that came from the backend or from an error goes through
//! [`escape_html`] first, so model output can never inject markup.

use council_application::DiscussionRenderer;
use council_domain::{DiscussionResponse, ParticipantResponse, RoundResult};
use std::fmt::Write;

/// Escape text the way a DOM text node serializes it.
///
/// `&`, `<`, `>` and non-breaking spaces become entities; everything else,
/// quotes included, is kept as-is since the result is only ever placed in
/// element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

const PAGE_STYLE: &str = r#"
body { font-family: Arial, sans-serif; max-width: 900px; margin: 50px auto; color: #222; }
.round-container { background: #f5f5f5; padding: 15px; margin: 10px 0; border-radius: 5px; }
.round-header { font-size: 1.2em; font-weight: bold; margin-bottom: 10px; }
.response-card { margin: 10px 0; padding: 10px; background: white; border-left: 4px solid #007bff; }
.response-name { font-weight: bold; }
.response-name.chairman { color: #b8860b; }
.response-content { margin-top: 6px; white-space: pre-wrap; }
.error { background: #fdecea; color: #a12622; padding: 15px; border-radius: 5px; }
"#;

/// Renders rounds as nested `div` blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    standalone: bool,
}

impl HtmlRenderer {
    /// Markup for the content container only
    pub fn fragment() -> Self {
        Self { standalone: false }
    }

    /// Markup wrapped in a complete, styled HTML document
    pub fn page() -> Self {
        Self { standalone: true }
    }

    /// Render every round in order
    pub fn render(response: &DiscussionResponse) -> String {
        let mut html = String::new();
        for round in &response.rounds {
            Self::push_round(&mut html, round);
        }
        html
    }

    /// Render the error block with the backend hint
    pub fn render_error_block(message: &str, origin: &str) -> String {
        format!(
            r#"
            <div class="error">
                <strong>Error:</strong> {}
                <br><br>
                Make sure the backend server is running on {}
            </div>
        "#,
            escape_html(message),
            escape_html(origin)
        )
    }

    /// Wrap a content fragment in a standalone document
    pub fn render_page(fragment: &str, topic: Option<&str>) -> String {
        let heading = match topic {
            Some(topic) => format!("<h2>{}</h2>\n", escape_html(topic)),
            None => String::new(),
        };
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>LLM Council</title>
<style>{}</style>
</head>
<body>
<h1>LLM Council Discussion</h1>
<div id="results">
{}<div id="discussion-content">{}</div>
</div>
</body>
</html>
"#,
            PAGE_STYLE, heading, fragment
        )
    }

    fn push_round(html: &mut String, round: &RoundResult) {
        let _ = write!(
            html,
            r#"
            <div class="round-container">
                <div class="round-header">{}</div>
        "#,
            escape_html(&round.title())
        );

        for response in &round.responses {
            Self::push_response(html, response);
        }

        html.push_str("</div>");
    }

    fn push_response(html: &mut String, response: &ParticipantResponse) {
        let class = if response.is_chairman() {
            "response-name chairman"
        } else {
            "response-name"
        };
        let _ = write!(
            html,
            r#"
                <div class="response-card">
                    <div class="response-header">
                        <span class="{}">{}</span>
                    </div>
                    <div class="response-content">{}</div>
                </div>
            "#,
            class,
            escape_html(&response.name),
            escape_html(&response.content)
        );
    }
}

impl DiscussionRenderer for HtmlRenderer {
    fn render_discussion(&self, response: &DiscussionResponse) -> String {
        let fragment = Self::render(response);
        if self.standalone {
            Self::render_page(&fragment, response.topic.as_deref())
        } else {
            fragment
        }
    }

    fn render_error(&self, message: &str, origin: &str) -> String {
        let fragment = Self::render_error_block(message, origin);
        if self.standalone {
            Self::render_page(&fragment, None)
        } else {
            fragment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn texts(doc: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn sample() -> DiscussionResponse {
        DiscussionResponse::new(vec![
            RoundResult::new(1).with_response("A", "x"),
            RoundResult::new("Summary").with_response("Chairman", "y"),
        ])
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("\"quoted\" 'single'"), "\"quoted\" 'single'");
        assert_eq!(escape_html("no\u{a0}break"), "no&nbsp;break");
    }

    #[test]
    fn test_headings_in_order() {
        let doc = Html::parse_fragment(&HtmlRenderer::render(&sample()));
        assert_eq!(texts(&doc, ".round-header"), vec!["Round 1", "Final Summary"]);
    }

    #[test]
    fn test_chairman_distinguished() {
        let doc = Html::parse_fragment(&HtmlRenderer::render(&sample()));
        assert_eq!(texts(&doc, ".response-name.chairman"), vec!["Chairman"]);
        assert_eq!(texts(&doc, ".response-name"), vec!["A", "Chairman"]);
    }

    #[test]
    fn test_participants_keep_backend_order() {
        let response = DiscussionResponse::new(vec![
            RoundResult::new(1)
                .with_response("Zed", "1")
                .with_response("Chairman (Gemini)", "2")
                .with_response("Amy", "3"),
        ]);
        let doc = Html::parse_fragment(&HtmlRenderer::render(&response));
        assert_eq!(
            texts(&doc, ".response-name"),
            vec!["Zed", "Chairman (Gemini)", "Amy"]
        );
        assert_eq!(texts(&doc, ".response-content"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_markup_in_content_is_inert() {
        let payload = "<script>alert('x')</script><img src=x onerror=alert(1)>";
        let response = DiscussionResponse::new(vec![
            RoundResult::new(1).with_response("<b>Mallory</b>", payload),
        ]);
        let html = HtmlRenderer::render(&response);
        let doc = Html::parse_fragment(&html);

        assert!(!html.contains("<script>"));
        assert_eq!(texts(&doc, "script").len(), 0);
        assert_eq!(texts(&doc, "img").len(), 0);
        assert_eq!(texts(&doc, "b").len(), 0);
        assert_eq!(texts(&doc, ".response-content"), vec![payload]);
        assert_eq!(texts(&doc, ".response-name"), vec!["<b>Mallory</b>"]);
    }

    #[test]
    fn test_empty_rounds_render_nothing() {
        assert!(HtmlRenderer::render(&DiscussionResponse::default()).is_empty());
    }

    #[test]
    fn test_error_block() {
        let html = HtmlRenderer::fragment()
            .render_error("HTTP error! status: 500", "http://localhost:8000");
        let doc = Html::parse_fragment(&html);
        let block = texts(&doc, ".error").join(" ");
        assert!(block.contains("Error: HTTP error! status: 500"));
        assert!(block.contains("Make sure the backend server is running on http://localhost:8000"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = HtmlRenderer::render_error_block("<script>x</script>", "http://h");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_page_wraps_fragment() {
        let mut response = sample();
        response.topic = Some("Tabs & spaces".to_string());
        let html = HtmlRenderer::page().render_discussion(&response);
        let doc = Html::parse_document(&html);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(texts(&doc, "h2"), vec!["Tabs & spaces"]);
        assert_eq!(
            texts(&doc, "#results #discussion-content .round-header"),
            vec!["Round 1", "Final Summary"]
        );
    }
}
