use bday_server::{AppState, ServerResult, build_router, logger};

use bday_config::Config;
use bday_core::{BirthdayCalculator, BirthdayService, SystemClock};
use bday_db::{DatabaseOptions, SqliteRecordStore};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bday-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and create the schema if absent
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = bday_db::connect(
        &database_path,
        &DatabaseOptions {
            max_connections: config.database.max_connections,
            busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
        },
    )
    .await?;

    let service = BirthdayService::new(
        Arc::new(SqliteRecordStore::new(pool.clone())),
        Arc::new(SystemClock),
        BirthdayCalculator::new(config.birthday.leap_day_policy),
    )
    .with_max_username_length(config.validation.max_username_length);

    let app = build_router(AppState::new(service));

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
