use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use api::auth::OidcProvider;
use api::{db, AppConfig, NoteStore};
use web::{session, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Initialize database pool
    let pool = db::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    db::init_schema(&pool)
        .await
        .context("Failed to create notes table")?;

    let provider = OidcProvider::discover(config.oauth.clone())
        .await
        .context("Failed to discover identity provider")?;

    let store = session::session_store(pool.clone())
        .await
        .context("Failed to create session table")?;
    session::spawn_expired_sweep(store.clone());
    let sessions = session::layer(
        store,
        session::session_key(&config.secret_key),
        config.secure_cookies(),
    );

    let state = AppState::new(NoteStore::new(pool), Arc::new(provider));
    let router = web::app(state, sessions);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
