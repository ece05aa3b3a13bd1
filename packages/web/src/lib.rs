//! HTTP layer for the notes app: router, handlers and shared state.
//!
//! The binary in `main.rs` only loads configuration and calls [`app`]; tests
//! build the same router around an in-memory database and a fake provider.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::service::SignedCookie;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

mod error;
pub mod routes;
pub mod session;
mod state;

pub use error::AppError;
pub use state::AppState;

/// Build the full application around `sessions` (see [`session::layer`]).
pub fn app(state: AppState, sessions: SessionManagerLayer<SqliteStore, SignedCookie>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/login", get(routes::login))
        .route("/callback", get(routes::callback).post(routes::callback_form))
        .route("/logout", get(routes::logout))
        .route("/add-note", post(routes::add_note))
        .route("/delete-note/{id}", post(routes::delete_note))
        .route("/update-note/{id}", post(routes::update_note))
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
