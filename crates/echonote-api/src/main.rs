//! echonote-api - HTTP API server for echonote.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echonote_api::{app, AppState};
use echonote_db::Database;

/// Initialize tracing with configurable output.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file; "off" disables (default: "echonote-api.log")
///   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
///   RUST_LOG    - standard env filter (default: "echonote_api=debug,tower_http=debug")
///
/// Returns the file appender guard; dropping it stops the background writer,
/// so the caller must keep it alive for the process lifetime.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| "echonote-api.log".to_string());
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "echonote_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    let file_layer = if log_file == "off" || log_file == "none" {
        None
    } else {
        let path = std::path::Path::new(&log_file);
        let file_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("echonote-api.log");
        let file_appender = tracing_appender::rolling::daily(
            file_dir.unwrap_or(std::path::Path::new(".")),
            file_name,
        );
        Some(tracing_appender::non_blocking(file_appender))
    };

    let guard = if log_format == "json" {
        let stdout_layer = tracing_subscriber::fmt::layer().json();
        match file_layer {
            Some((non_blocking, guard)) => {
                registry
                    .with(stdout_layer)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking),
                    )
                    .init();
                Some(guard)
            }
            None => {
                registry.with(stdout_layer).init();
                None
            }
        }
    } else {
        let mut stdout_layer = tracing_subscriber::fmt::layer();
        if let Some(ansi) = log_ansi {
            stdout_layer = stdout_layer.with_ansi(ansi);
        }
        match file_layer {
            Some((non_blocking, guard)) => {
                registry
                    .with(stdout_layer)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(non_blocking)
                            .with_ansi(false), // no ANSI in files
                    )
                    .init();
                Some(guard)
            }
            None => {
                registry.with(stdout_layer).init();
                None
            }
        }
    };

    info!(
        log_format = %log_format,
        log_file = %log_file,
        "Logging initialized"
    );
    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _file_guard = init_tracing();

    // Get configuration from environment
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/echonote".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .unwrap_or(8000);

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;
    info!("Database connected");

    // Run pending database migrations on startup
    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");

    let state = AppState::from_database(db);
    let router = app(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
