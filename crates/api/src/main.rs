use anyhow::{Context, Result};
use tracing::info;

use waste_manager_api::{app, config, middleware, services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;
    middleware::init_metrics().context("Failed to install Prometheus recorder")?;

    info!("Starting Waste Manager API v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&(&config.database).into()).await?;

    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let report = services::bootstrap_admin(&pool, &config.admin).await?;
    info!(
        admin_role_id = report.admin_role_id,
        admin_user_created = report.admin_user_created,
        "Access control bootstrap completed"
    );

    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool).context("Invalid JWT key configuration")?;

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
