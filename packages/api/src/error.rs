use thiserror::Error;

/// Errors surfaced by the auth gateway and the note store.
///
/// None of these are shown to the user in detail: the web layer logs them
/// and answers with a generic server error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("provider discovery failed: {0}")]
    Discovery(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("failed to fetch user claims: {0}")]
    Claims(String),

    #[error("invalid or missing OAuth state")]
    InvalidState,

    #[error("identity provider returned an error: {0}")]
    Provider(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
