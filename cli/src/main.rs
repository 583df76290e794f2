//! CLI entrypoint for council-client
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use council_application::{DiscussionGateway, SubmitDiscussionUseCase};
use council_domain::OutputFormat;
use council_infrastructure::{ConfigLoader, HttpDiscussionGateway};
use council_presentation::{
    Cli, ConsoleFormatter, DiscussionRepl, OutputSink, TerminalView, renderer_for,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags win over every file and env source
    if let Some(origin) = &cli.origin {
        config.backend.origin = origin.clone();
    }
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let rounds = cli.rounds_or(&config.discussion.rounds).to_string();
    let format = match (cli.output, config.output.format) {
        (Some(format), _) => format.into(),
        (None, Some(format)) => format,
        // Markup is unreadable at a prompt
        (None, None) if cli.interactive => OutputFormat::Text,
        (None, None) => OutputFormat::default(),
    };

    info!("Starting council-client against {}", config.backend.origin);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpDiscussionGateway::new(config.client_config()));

    if cli.members {
        let members = gateway.members().await.with_context(|| {
            format!(
                "Could not fetch council members. Make sure the backend server is running on {}",
                gateway.origin()
            )
        })?;
        print!("{}", ConsoleFormatter::format_members(&members));
        return Ok(ExitCode::SUCCESS);
    }

    let sink = match cli.out_file.clone() {
        Some(path) => OutputSink::File(path),
        None => OutputSink::Stdout,
    };
    let mut view = TerminalView::new(sink);
    if cli.quiet {
        view = view.without_spinner();
    }
    let renderer = renderer_for(format);

    // Interactive mode
    if cli.interactive {
        let mut repl = DiscussionRepl::new(gateway, view, renderer)
            .with_rounds(rounds)
            .with_history_file(config.repl.history_file.map(PathBuf::from));

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single topic mode - topic is required
    let topic = match cli.topic {
        Some(topic) => topic,
        None => bail!("Topic is required. Use --interactive for interactive mode."),
    };

    view.fill(topic, rounds);
    let use_case = SubmitDiscussionUseCase::new(gateway);
    let outcome = use_case.execute(&view, renderer.as_ref()).await;

    if outcome.is_rendered() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
