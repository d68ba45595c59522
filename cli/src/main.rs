//! CLI entrypoint for answer-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use panel_application::{ComparisonSession, NoProgress, SubmissionNotifier};
use panel_domain::ViewState;
use panel_infrastructure::{ConfigLoader, FileConfig, FileOutputFormat, HttpAggregationGateway};
use panel_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, TuiApp,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.is_interactive())?;

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting answer-panel (endpoint {})", config.endpoint.url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpAggregationGateway::new(
        &config.endpoint.to_endpoint_config(),
    )?);
    let session = ComparisonSession::new(gateway);

    match cli.question {
        None => {
            let mut app = TuiApp::new(session)
                .with_tick_rate(Duration::from_millis(config.tui.tick_millis));
            app.run().await?;
            Ok(())
        }
        Some(question) => {
            let format = cli.output.unwrap_or(match config.output.format {
                Some(FileOutputFormat::Json) => OutputFormat::Json,
                Some(FileOutputFormat::Text) | None => OutputFormat::Text,
            });
            ask_once(session, question, format, cli.quiet).await
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// The interactive UI owns the terminal, so its logs go to a daily file
/// under the data directory; one-shot runs log to stderr.
fn init_logging(verbose: u8, interactive: bool) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(&log_dir, "answer-panel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("answer-panel")
        .join("logs")
}

/// Load configuration files, then apply CLI flag overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = Some(timeout);
    }
    if cli.no_color {
        config.output.color = false;
    }

    config.validate()?;
    Ok(config)
}

/// Ask a single question, print the answers, and exit
async fn ask_once(
    mut session: ComparisonSession,
    question: String,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    session.update_question(question);

    let progress: Box<dyn SubmissionNotifier> = if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let state = match session.submit_and_wait(progress.as_ref()).await {
        Some(state) => state.clone(),
        None => bail!("The question is empty"),
    };
    let question = session.question().trim();

    match (&state, format) {
        (ViewState::Failed(message), OutputFormat::Text) => {
            warn!("Request failed: {}", message);
            bail!("{}", message)
        }
        (ViewState::Failed(message), OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_json(question, &state));
            bail!("{}", message)
        }
        (_, OutputFormat::Text) => {
            println!("{}", ConsoleFormatter::format(question, &state));
            Ok(())
        }
        (_, OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_json(question, &state));
            Ok(())
        }
    }
}
