//! Console output formatter for discussion results

use colored::Colorize;
use council_application::DiscussionRenderer;
use council_domain::{CouncilMembers, DiscussionResponse};

/// Formats discussion results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every round with colored headings
    pub fn format(response: &DiscussionResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Council Discussion"));
        output.push('\n');

        if let Some(topic) = &response.topic {
            output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));
        }

        for round in &response.rounds {
            output.push_str(&Self::section_header(&round.title()));
            for entry in &round.responses {
                let name = format!("── {} ──", entry.name);
                let name = if entry.is_chairman() {
                    name.yellow().bold()
                } else {
                    name.bold()
                };
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    name,
                    Self::indent(&entry.content, "  ")
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a failure with the backend hint
    pub fn format_error(message: &str, origin: &str) -> String {
        format!(
            "{} {}\n\nMake sure the backend server is running on {}\n",
            "Error:".red().bold(),
            message,
            origin
        )
    }

    /// Format the council's seats
    pub fn format_members(members: &CouncilMembers) -> String {
        let mut output = format!("{}\n", "Council members:".cyan().bold());
        for (i, seat) in members.all().enumerate() {
            if i == 0 {
                output.push_str(&format!("  {} {}\n", "*".yellow(), seat.yellow()));
            } else {
                output.push_str(&format!("  - {}\n", seat));
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DiscussionRenderer for ConsoleFormatter {
    fn render_discussion(&self, response: &DiscussionResponse) -> String {
        Self::format(response)
    }

    fn render_error(&self, message: &str, origin: &str) -> String {
        Self::format_error(message, origin)
    }
}
