//! # phonehubd — phonehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use phonehub_adapter_http_axum::state::AppState;
use phonehub_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteAccountRepository, SqliteNotificationRepository,
    SqliteOwnershipRepository, SqlitePhoneRepository, SqliteSdCardRepository,
    SqliteSimSlotRepository,
};
use phonehub_app::services::code_allocator::CodeAllocator;
use phonehub_app::services::token::TokenService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig::new(config.database_url()).build().await?;
    let pool = db.pool().clone();

    // Repositories
    let phone_repo = SqlitePhoneRepository::new(pool.clone());
    let sim_repo = SqliteSimSlotRepository::new(pool.clone());
    let sd_repo = SqliteSdCardRepository::new(pool.clone());
    let account_repo = SqliteAccountRepository::new(pool.clone());
    let ownership_repo = SqliteOwnershipRepository::new(pool.clone());
    let notification_repo = SqliteNotificationRepository::new(pool);

    // HTTP
    let state = AppState::new(
        phone_repo,
        sim_repo,
        sd_repo,
        account_repo,
        ownership_repo,
        notification_repo,
        CodeAllocator::new(config.auth.code_max_attempts),
        TokenService::new(&config.auth.secret, config.auth.token_ttl_secs),
    );
    let app = phonehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "phonehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
