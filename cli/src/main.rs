//! CLI entrypoint for qachat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use qachat_application::{ConversationLogger, SubmitQueryUseCase};
use qachat_domain::{ChatState, OutputFormat as DomainOutputFormat};
use qachat_infrastructure::{ConfigLoader, FileConfig, HttpAskGateway, JsonlConversationLogger};
use qachat_presentation::{
    ChatApp, ChatViewConfig, Cli, ConsoleFormatter, OutputConfig, OutputFormatter,
};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // The chat view owns the terminal, so its diagnostics go to a file
    let _log_guard = if cli.question.is_some() {
        init_stderr_logging(cli.verbose);
        None
    } else {
        init_file_logging(cli.verbose)
    };

    info!("Starting qachat");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.check()? {
        eprintln!("Warning: {}", issue.message);
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let endpoint = config.endpoint.to_endpoint_params();
    info!("Using ask endpoint {}", endpoint.url);
    let gateway = Arc::new(HttpAskGateway::new(&endpoint)?);

    let mut use_case = SubmitQueryUseCase::new(gateway);
    if let Some(logger) = conversation_logger(&config) {
        use_case = use_case.with_conversation_logger(logger);
    }

    let initial = match &cli.session {
        Some(id) => ChatState::with_session(id.clone()),
        None => ChatState::new(),
    };

    match cli.question.clone() {
        Some(question) => {
            let output = OutputConfig {
                format: config.output.format.unwrap_or_default(),
                color: config.output.color,
            };
            run_once(&use_case, initial, question, output).await
        }
        None => {
            let view = ChatViewConfig {
                title: config.tui.title.clone(),
                placeholder: config.tui.placeholder.clone(),
                tick: Duration::from_millis(config.tui.effective_tick_ms()),
            };
            run_chat(use_case, initial, view).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Outcome of a one-shot question
#[derive(Debug, PartialEq, Eq)]
enum OneShot {
    /// Formatted history, ready to print
    Answered(String),
    /// The request failed; carries the user-facing notice
    Failed(&'static str),
}

async fn ask_once(
    use_case: &SubmitQueryUseCase,
    mut state: ChatState,
    question: String,
    output: OutputConfig,
) -> Result<OneShot> {
    state.set_input(question);
    let Some(request) = state.prepare_submission() else {
        bail!("Question must not be empty");
    };

    Ok(match use_case.execute(request).await {
        Ok(response) => {
            let formatter = ConsoleFormatter::new(output.color);
            let text = formatter.format_as(&response, output.format);
            OneShot::Answered(text.trim_end().to_string())
        }
        Err(e) => OneShot::Failed(e.user_message()),
    })
}

/// Ask one question and print the resulting history. A failed request
/// exits non-zero after printing the notice.
async fn run_once(
    use_case: &SubmitQueryUseCase,
    state: ChatState,
    question: String,
    output: OutputConfig,
) -> Result<ExitCode> {
    match ask_once(use_case, state, question, output).await? {
        OneShot::Answered(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        OneShot::Failed(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the interactive chat view and print how to resume the session.
async fn run_chat(
    use_case: SubmitQueryUseCase,
    initial: ChatState,
    view: ChatViewConfig,
) -> Result<()> {
    let mut app = ChatApp::new(use_case, view);
    let final_state = app.run(initial).await?;

    if let Some(session_id) = final_state.session_id() {
        println!("Resume this conversation with: qachat --session {}", session_id);
    }
    Ok(())
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.endpoint.timeout_seconds = Some(secs);
    }
    if let Some(format) = cli.output {
        config.output.format = Some(DomainOutputFormat::from(format));
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.to_string_lossy().into_owned());
    }
}

fn conversation_logger(config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = config.logging.conversation_log_path()?;
    match JsonlConversationLogger::new(&path) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Some(Arc::new(logger))
        }
        None => {
            eprintln!(
                "Warning: conversation log {} could not be opened; continuing without it",
                path.display()
            );
            None
        }
    }
}

/// `RUST_LOG` wins over the verbosity flag
fn env_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

fn init_stderr_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log to `<data_dir>/qachat/logs/qachat.log.<date>`. Without a usable data
/// directory logging is skipped.
fn init_file_logging(verbose: u8) -> Option<WorkerGuard> {
    let dir = dirs::data_local_dir()?.join("qachat").join("logs");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: could not create log directory {}: {}", dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(&dir, "qachat.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}
