use anyhow::Result;
use tracing::{info, warn};

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!(
        "Starting Conference Registration API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Create database pool (lazy: the process serves traffic even while
    // the store is unreachable; persistence calls fail per request)
    let pool = persistence::db::create_pool(&config.database_config())?;

    match persistence::db::ping(&pool).await {
        Ok(()) => {
            info!("Database connected");
            info!("Running database migrations...");
            sqlx::migrate!("../persistence/src/migrations")
                .run(&pool)
                .await?;
            info!("Migrations completed");
        }
        Err(err) => {
            warn!(
                error = %err,
                "Database connection failed; persistence calls will fail until the store is reachable"
            );
        }
    }

    // Build application
    let app = app::create_app(config.clone(), pool);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
