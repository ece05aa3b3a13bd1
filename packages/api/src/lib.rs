//! # API crate — auth gateway and note storage for the notes server
//!
//! Everything the `web` crate needs to turn an HTTP request into a note
//! operation lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | OpenID Connect login (discovery, authorization redirect, code exchange, logout) and the typed session payload |
//! | [`config`] | Environment-sourced application configuration |
//! | [`db`] | SQLite connection pool and schema bootstrap |
//! | [`models`] | The persisted [`Note`] row |
//! | [`notes`] | [`NoteStore`], the owner-scoped CRUD accessor |
//!
//! Every note operation takes the owner's subject identifier explicitly. The
//! identifier is only ever obtained from the session via
//! [`auth::current_subject`], so a user can never reach another user's rows.

pub mod auth;
pub mod config;
pub mod db;
mod error;
pub mod models;
pub mod notes;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::Note;
pub use notes::NoteStore;
