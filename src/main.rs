use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use notadinas::{db, routes, AppState, Config};

const DEFAULT_CONFIG_PATH: &str = "./etc/notadinas.toml";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "--help") {
        println!("Usage: notadinas [OPTIONS]");
        println!("Options:");
        println!("  -config <path>  Path to configuration file (default: {})", DEFAULT_CONFIG_PATH);
        println!("  -help, --help   Print this help message");
        println!();
        println!("Environment:");
        println!("  DATABASE_URL    Overrides the configured database connection");
        println!("  RUST_LOG        Overrides the configured log level");
        return Ok(());
    }

    let config_path = args
        .iter()
        .skip_while(|arg| arg.as_str() != "-config")
        .nth(1)
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration first (before logging init)
    let config = Config::load(&config_path)
        .unwrap_or_else(|e| {
            eprintln!("Could not load config file: {}, using defaults", e);
            Config::default()
        })
        .with_env_overrides();

    // Initialize logging
    // Priority: RUST_LOG env var > config file > default "info"
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Notadinas server...");
    info!("Loading configuration from: {}", config_path);

    let db_conn = db::init_database(&config.database).await.map_err(|e| {
        tracing::error!("Database initialization failed: {}", e);
        anyhow::anyhow!("Database initialization failed: {}", e)
    })?;

    let addr: SocketAddr = match config.addr.parse() {
        Ok(addr) => addr,
        Err(_) => {
            tracing::warn!("Invalid address '{}', using default {}", config.addr, DEFAULT_ADDR);
            DEFAULT_ADDR.parse()?
        }
    };

    // Create application state and router
    let state = AppState::new(db_conn);
    let app = routes::create_router(state);

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
