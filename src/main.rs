//! Feedback Monitor - chatbot feedback and response monitoring service
//!
//! Entry point for the HTTP service and the maintenance subcommands that
//! work directly against the feedback store.

mod cli;

use anyhow::Context;
use clap::{Parser, Subcommand};
use feedback_monitor_core::ServiceConfig;
use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "feedback-monitor")]
#[command(about = "Chatbot feedback collection and response monitoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Configuration file (defaults to ./feedback-monitor.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Feedback store path (overrides configuration)
    #[arg(long, global = true, env = "FEEDBACK_MONITOR_STORE_PATH")]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Server address
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Submit a piece of feedback directly to the store
    Submit {
        /// User ID
        #[arg(long)]
        user_id: String,

        /// Feedback type (bug_report, feature_request, general_feedback, incorrect_response)
        #[arg(long = "type")]
        feedback_type: String,

        /// Description (at least 10 characters)
        #[arg(long)]
        description: String,

        /// Conversation ID to attach as metadata
        #[arg(long)]
        conversation_id: Option<String>,

        /// Rating from 1 to 5 to attach as metadata
        #[arg(long)]
        rating: Option<i64>,
    },

    /// List stored feedback
    List {
        /// Only show this feedback type
        #[arg(long = "type")]
        feedback_type: Option<String>,
    },

    /// Replay a JSON file of recorded chatbot interactions through the monitor
    Replay {
        /// JSON array of {user_id, query, response, error?}
        file: PathBuf,
    },
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the stderr log layer and, when given, a plain-text copy to `log_file`
fn init_tracing(level: Level, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = level.as_str().to_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("feedback_monitor={level},tower_http={level}"))
    });

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open monitor log {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Commands::Serve { addr: Some(addr) } = &cli.command {
        config.addr = *addr;
    }

    // Only long-running monitoring commands copy the log stream to disk
    let log_file = match cli.command {
        Commands::Serve { .. } | Commands::Replay { .. } => config.monitor_log_path(),
        _ => None,
    };
    init_tracing(parse_level(&config.log_level), log_file.as_deref())?;

    debug!("Feedback Monitor v{} starting...", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { .. } => cli::serve::handle(&config).await,
        Commands::Submit {
            user_id,
            feedback_type,
            description,
            conversation_id,
            rating,
        } => Ok(cli::submit::handle(
            &config,
            user_id,
            feedback_type,
            description,
            conversation_id,
            rating,
        )
        .await?),
        Commands::List { feedback_type } => Ok(cli::list::handle(&config, feedback_type).await?),
        Commands::Replay { file } => Ok(cli::replay::handle(&config, file).await?),
    }
}
