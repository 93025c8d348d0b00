//! Catalog service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/catalog-service/config.toml)
//! catalog-service
//!
//! # Custom config path and port
//! catalog-service --config /etc/catalog-service/config.toml --port 9000
//!
//! # Validate config without starting
//! catalog-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use catalog_service::config::{default_config_path, AppConfig};
use catalog_service::server::{init_tracing, ServerHandle, ServerOptions};

/// REST service for a product catalog of categories and products.
#[derive(Parser, Debug)]
#[command(
    name = "catalog-service",
    version,
    about = "Product catalog REST service",
    long_about = "Catalog service: paged CRUD over categories and products.\n\n\
                  Default config: ~/.config/catalog-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── CLI overrides ──────────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!(
            "   Page size   : {} (max {})",
            config.pagination.default_page_size, config.pagination.max_page_size
        );
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
