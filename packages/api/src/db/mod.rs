//! # Database module — SQLite connection pool and schema
//!
//! The notes live in a single SQLite table. [`connect`] opens a pool for a
//! `sqlite:` URL (creating the file if needed) and [`init_schema`] creates the
//! `notes` table when it does not exist yet. Both run once at startup; the
//! pool is then handed to [`crate::NoteStore`].
//!
//! `sqlite::memory:` URLs get a single long-lived connection, since every
//! SQLite in-memory connection is its own database.

mod pool;

pub use pool::{connect, init_schema};
