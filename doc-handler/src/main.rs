//! doc-handler: Document Handler API
//!
//! Classifies base64-encoded documents and keeps a copy of each on disk.
//!
//! # Usage
//!
//! ```bash
//! # Development defaults (port 8000, pretty logs)
//! doc-handler
//!
//! # Explicit configuration file and mode
//! doc-handler --config doc-handler.toml --mode production
//! ```

use clap::Parser;
use doc_handler::config::{Config, LaunchMode};
use doc_handler::ApiServer;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "doc-handler.toml";

#[derive(Parser)]
#[command(name = "doc-handler")]
#[command(about = "Document type detection and intake API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch mode, overrides the configuration file
    #[arg(short, long, value_enum)]
    mode: Option<LaunchMode>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()));

    let mut config = match config_path {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(mode) = cli.mode {
        config.runtime.mode = mode;
    }
    config.apply_env()?;

    // Without a config file, development runs chattier
    if config_path.is_none() && config.runtime.mode == LaunchMode::Development {
        config.logging.level = Config::development().logging.level;
    }
    config.validate()?;

    init_logging(&config)?;

    let runtime = match config.runtime.mode {
        LaunchMode::Production => {
            info!(
                "🚀 Starting Document Handler API (Production, {} workers)",
                config.runtime.workers
            );
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(config.runtime.workers)
                .enable_all()
                .build()?
        }
        LaunchMode::Development | LaunchMode::Auto => {
            info!("🚀 Starting Document Handler API (Development)");
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
        }
    };

    info!("Configuration loaded");
    info!("  Listening on: {}", config.listen_addr());
    info!("  Temp directory: {}", config.storage.temp_dir);
    info!("  Request timeout: {}s", config.server.request_timeout_seconds);

    runtime.block_on(async move {
        let server = ApiServer::from_config(&config);
        server.run().await
    })?;

    Ok(())
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("doc_handler={},tower_http={}", config.logging.level, config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).try_init()?;
    }

    Ok(())
}
