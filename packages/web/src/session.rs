//! Session storage and cookie settings.
//!
//! Sessions live in the `tower_sessions` table of the app database. A record
//! expires after [`INACTIVITY_LIMIT`] without a request, and
//! [`spawn_expired_sweep`] deletes expired records in the background so
//! abandoned logins do not pile up.

use sha2::{Digest, Sha512};
use sqlx::SqlitePool;
use time::Duration;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::service::SignedCookie;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

pub const INACTIVITY_LIMIT: Duration = Duration::days(1);

const SWEEP_PERIOD: std::time::Duration = std::time::Duration::from_secs(60);

/// Stretch an arbitrary secret to the 64 bytes a cookie [`Key`] needs.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Session store on `pool`, with its table created if absent.
pub async fn session_store(pool: SqlitePool) -> Result<SqliteStore, sqlx::Error> {
    let store = SqliteStore::new(pool);
    store.migrate().await?;
    Ok(store)
}

pub fn spawn_expired_sweep(store: SqliteStore) {
    tokio::task::spawn(async move {
        if let Err(err) = store.continuously_delete_expired(SWEEP_PERIOD).await {
            tracing::error!(%err, "expired session sweep stopped");
        }
    });
}

/// Signed, `SameSite=Lax` session cookies. `secure` sets the `Secure` attribute.
pub fn layer(
    store: SqliteStore,
    key: Key,
    secure: bool,
) -> SessionManagerLayer<SqliteStore, SignedCookie> {
    SessionManagerLayer::new(store)
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(INACTIVITY_LIMIT))
        .with_signed(key)
}
