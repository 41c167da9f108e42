mod platform;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chat_app::config::{WidgetConfig, DEFAULT_CONFIG_FILENAME};
use chat_app::logging::{self, LogDestination};
use chat_app::ChatSession;
use chat_engine::ReqwestAnswerClient;
use chat_logging::{chat_info, chat_warn};
use clap::Parser;
use log::LevelFilter;

use platform::TerminalSink;

/// Terminal chat widget for a documentation answer service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RON configuration file; defaults apply when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,
    /// Answer-service URL, overriding the configuration file.
    #[arg(long)]
    endpoint: Option<String>,
    /// Start with the panel closed.
    #[arg(long)]
    closed: bool,
    /// Where diagnostics are written.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
    /// Probe the service's health route before starting.
    #[arg(long)]
    check_health: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log, level);

    let mut config = WidgetConfig::load(&cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if cli.closed {
        config.start_open = false;
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    if cli.check_health {
        let client = ReqwestAnswerClient::new(config.client_settings())?;
        match runtime.block_on(client.check_health()) {
            Ok(()) => {
                chat_info!("Answer service at {} is healthy", client.endpoint());
                println!("Answer service is healthy.");
            }
            Err(err) => {
                chat_warn!("Health check against {} failed: {}", client.endpoint(), err);
                println!("Answer service health check failed: {err}");
            }
        }
    }

    let terminal = Arc::new(TerminalSink::new(io::stdout()));
    let session = ChatSession::new(&config, terminal.clone())?;
    platform::run(&runtime, &session, io::stdin().lock(), terminal.as_ref())
        .context("terminal input failed")?;
    Ok(())
}
