use ph_server::{AppState, ImageStore, build_router, logger};

use std::error::Error;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ph_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting ph-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    ph_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Image store
    let image_store = ImageStore::new(config.uploads_path()?, config.uploads.url_segment());
    image_store.ensure_root().await?;
    info!("Image store ready at {}", image_store.root().display());

    // Build application state
    let app_state = AppState {
        pool,
        image_store,
        public_profile: config.public_profile.clone(),
        max_upload_bytes: config.uploads.max_bytes,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, keep serving until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
