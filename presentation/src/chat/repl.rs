//! REPL (Read-Eval-Print Loop) for interactive discussions

use crate::ConsoleFormatter;
use crate::view::terminal::TerminalView;
use council_application::{
    DEFAULT_ROUNDS, DiscussionGateway, DiscussionRenderer, SubmissionOutcome,
    SubmitDiscussionUseCase,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// `/rounds` with no argument shows the current value
    Rounds(Option<String>),
    Members,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let mut parts = line.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/rounds" | "/r" => ReplCommand::Rounds(arg),
            "/members" => ReplCommand::Members,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive discussion REPL
pub struct DiscussionRepl<G: DiscussionGateway + 'static> {
    use_case: SubmitDiscussionUseCase<G>,
    view: TerminalView,
    renderer: Box<dyn DiscussionRenderer>,
    rounds: String,
    history_path: Option<PathBuf>,
}

impl<G: DiscussionGateway + 'static> DiscussionRepl<G> {
    /// Create a new DiscussionRepl
    pub fn new(gateway: Arc<G>, view: TerminalView, renderer: Box<dyn DiscussionRenderer>) -> Self {
        Self {
            use_case: SubmitDiscussionUseCase::new(gateway),
            view,
            renderer,
            rounds: DEFAULT_ROUNDS.to_string(),
            history_path: dirs::data_dir().map(|p| p.join("council-client").join("history.txt")),
        }
    }

    /// Set the round text used for every submission
    pub fn with_rounds(mut self, rounds: impl Into<String>) -> Self {
        self.rounds = rounds.into();
        self
    }

    /// Override where the line history is kept
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    pub fn rounds(&self) -> &str {
        &self.rounds
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    println!();
                    self.submit(line).await;
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Submit one topic with the current round text
    pub async fn submit(&self, topic: &str) -> SubmissionOutcome {
        self.view.fill(topic, self.rounds.as_str());
        self.use_case
            .execute(&self.view, self.renderer.as_ref())
            .await
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        LLM Council - Interactive Mode       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Backend: {}", self.use_case.gateway().origin());
        println!("Rounds:  {}", self.rounds);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /rounds <n>       - Set the number of rounds");
        println!("  /members          - Show the council members");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Rounds(Some(rounds)) => {
                self.rounds = rounds;
                println!("Rounds set to {}", self.rounds);
            }
            ReplCommand::Rounds(None) => {
                println!("Rounds: {}", self.rounds);
            }
            ReplCommand::Members => match self.use_case.gateway().members().await {
                Ok(members) => {
                    println!();
                    print!("{}", ConsoleFormatter::format_members(&members));
                    println!();
                }
                Err(e) => {
                    eprintln!(
                        "{}",
                        ConsoleFormatter::format_error(
                            &e.to_string(),
                            self.use_case.gateway().origin()
                        )
                    );
                }
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }
}
