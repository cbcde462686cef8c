//! Portico: a secure static gateway.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, loads and validates the TLS credentials,
//! then binds the HTTPS listener and the plaintext redirect listener.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portico::config::{GatewayConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use portico::http::start_servers;
use portico::tls::load_credentials;

/// Portico: serves static assets over HTTPS and redirects plaintext traffic
#[derive(Parser, Debug)]
#[command(name = "portico", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "portico=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = GatewayConfig::load(&args.config)?;

    tracing::info!(cert = %config.tls.cert, key = %config.tls.key, "Loaded configuration");

    // Load TLS credentials before any socket is opened. Credential problems
    // are operator-fixable configuration errors: log the exact failure plus
    // the working directory and exit non-zero, no retry.
    let credentials = match load_credentials(&config.tls.cert, &config.tls.key) {
        Ok(credentials) => credentials,
        Err(error) => {
            let cwd = std::env::current_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string());
            tracing::error!(%error, %cwd, "TLS configuration error");
            std::process::exit(1);
        }
    };

    // Bind both listeners; runs until externally killed
    start_servers(credentials, &config).await?;

    Ok(())
}
