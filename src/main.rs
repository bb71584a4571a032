//! Chat echo service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chat_echo::api::{create_router, AppState};
use chat_echo::config::Config;
use chat_echo::server;
use chat_echo::utils::shutdown_signal;

/// Health check and chat echo HTTP service.
#[derive(Parser, Debug)]
#[command(name = "chat-echo")]
#[command(about = "HTTP service that validates and echoes chat messages")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind (overrides CHAT_ECHO_HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port to bind (overrides CHAT_ECHO_PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration and apply CLI overrides
    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.verbose |= args.verbose;

    // Initialize logging
    let filter = if config.verbose {
        EnvFilter::new("chat_echo=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Run) | None => cmd_run(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CHAT ECHO - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.socket_addr()?);
    println!("  Max Body Size: {} bytes", config.max_body_bytes);
    match config.cors_max_age() {
        Some(max_age) => println!("  CORS: any origin, preflight max-age {}s", max_age.as_secs()),
        None => println!("  CORS: any origin"),
    }
    println!("  Log Level: {}", config.log_level);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_run(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let addr = config.socket_addr()?;
    info!("Max body size: {} bytes", config.max_body_bytes);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    let router = create_router(AppState::from_config(&config));
    server::serve(listener, router, shutdown_signal()).await?;

    Ok(())
}
