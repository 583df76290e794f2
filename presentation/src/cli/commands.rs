//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_application::DEFAULT_ROUNDS;
use std::path::PathBuf;

/// Output format for discussion results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment for the content container
    Html,
    /// Standalone HTML page
    Page,
    /// Colored terminal text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for council_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => council_domain::OutputFormat::Html,
            OutputFormat::Page => council_domain::OutputFormat::Page,
            OutputFormat::Text => council_domain::OutputFormat::Text,
            OutputFormat::Json => council_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for council-client
#[derive(Parser, Debug)]
#[command(name = "council-client")]
#[command(author, version, about = "LLM Council - Ask the council to discuss a topic")]
#[command(long_about = r#"
council-client submits a topic to an LLM council backend and renders the
discussion: one block per round, with the chairman's final summary last.

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>       Explicit config file
3. ./council.toml        Project-level config
4. ~/.config/council-client/config.toml   Global config

Example:
  council-client "Should we rewrite it in Rust?"
  council-client -r 3 -o page --out-file council.html "Tabs or spaces?"
  council-client --interactive --origin http://localhost:8000
"#)]
pub struct Cli {
    /// The topic to discuss (not required in interactive mode)
    pub topic: Option<String>,

    /// Number of discussion rounds, parsed like the form field
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub rounds: Option<String>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write results to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out_file: Option<PathBuf>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// List the council members and exit
    #[arg(long)]
    pub members: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Round text from the flag, else the configured value, else the default
    pub fn rounds_or<'a>(&'a self, configured: &'a str) -> &'a str {
        match (&self.rounds, configured.is_empty()) {
            (Some(rounds), _) => rounds,
            (None, false) => configured,
            (None, true) => DEFAULT_ROUNDS,
        }
    }
}
