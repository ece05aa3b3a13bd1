//! # Note model
//!
//! One row of the `notes` table. `owner_id` is the identity provider's subject
//! identifier for the user who created the note; every query filters on it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub owner_id: String,
    pub text: String,
}
