use anyhow::Result;
use tracing::info;

use contact_manager_app::{config, lifecycle, logging};
use persistence::db;
use persistence::repositories::ContactRepository;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    logging::init_logging(&config.logging);

    info!("Starting Contact Manager v{}", env!("CARGO_PKG_VERSION"));

    let pool = db::create_pool(&config.database).await?;

    info!("Running database migrations...");
    db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let repository = ContactRepository::new(pool.clone());
    let outcome = lifecycle::run(&repository, &mut std::io::stdout()).await;

    // Close the pool on both paths before surfacing any failure.
    db::close_pool(&pool).await;
    outcome?;

    info!("Contact lifecycle completed");
    Ok(())
}
