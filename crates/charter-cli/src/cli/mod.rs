//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use charter_core::config::{self, API_BASE_ENV, Config};
use charter_core::logging::{self, WorkerGuard};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "charter")]
#[command(version)]
#[command(about = "Chat with the ISSA Charter answering service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the answering service (requests go to <URL>/chat)
    #[arg(long, value_name = "URL", env = API_BASE_ENV, global = true)]
    api_base: Option<String>,

    /// Read configuration from this file instead of $CHARTER_HOME/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Ask one question and print the answer
    Ask {
        /// The question (read from stdin when omitted)
        #[arg(value_name = "QUESTION")]
        question: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        api_base,
        config: config_override,
    } = cli;
    let config_path = config_override.unwrap_or_else(config::paths::config_path);

    match command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
        Some(Commands::Ask { question }) => {
            let session = Session::start(&config_path, api_base.as_deref())?;
            commands::ask::run(question.as_deref(), &session.config, &session.api_base).await
        }
        // default to chat mode
        None => {
            let session = Session::start(&config_path, api_base.as_deref())?;
            commands::chat::run(&session.config, &session.api_base).await
        }
    }
}

/// Everything a chatting command needs: loaded config, resolved base URL and
/// the log guard, which must outlive the command.
struct Session {
    config: Config,
    api_base: String,
    _log_guard: Option<WorkerGuard>,
}

impl Session {
    fn start(config_path: &Path, api_base_override: Option<&str>) -> Result<Self> {
        let config = Config::load_from(config_path).context("load config")?;
        let log_guard = init_logging(&config);
        let api_base = config.resolve_api_base(api_base_override)?;
        tracing::debug!(api_base = %api_base, config = %config_path.display(), "configuration resolved");
        Ok(Self {
            config,
            api_base,
            _log_guard: log_guard,
        })
    }
}

/// Starts file logging. A logging failure is reported but never fatal.
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    match logging::init(&config.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    }
}
