use std::sync::Arc;

use api::auth::IdentityProvider;
use api::NoteStore;

/// Shared handles every handler gets through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteStore,
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(notes: NoteStore, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { notes, provider }
    }
}
