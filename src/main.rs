use clap::Parser;
use podacium_api::config::Config;
use podacium_api::error::AppResult;
use podacium_api::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Podacium API - backend service for the Podacium platform
#[derive(Parser, Debug)]
#[command(name = "podacium-api")]
#[command(version = "1.0.0")]
#[command(about = "Backend API service for the Podacium platform", long_about = None)]
struct Cli {
    /// Host to bind to (overrides SERVER_HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Override config with CLI args if provided
    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    server::run_server(config, addr).await
}
