//! Server-rendered HTML for the notes app.
//!
//! Components are ordinary Dioxus components; [`render_home`] runs them once
//! through a [`VirtualDom`] and serializes the result with `dioxus-ssr`. There
//! is no client-side hydration, all interaction is plain HTML forms.

use api::auth::UserClaims;
use api::Note;
use dioxus::prelude::*;

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod new_note_form;
pub use new_note_form::NewNoteForm;

mod note_item;
pub use note_item::NoteItem;

use views::{HomeView, HomeViewProps, STYLES};

/// Render the full note list page for `user`.
pub fn render_home(user: &UserClaims, notes: Vec<Note>) -> String {
    let props = HomeViewProps {
        display_name: user.display_name().to_string(),
        notes,
    };
    let mut dom = VirtualDom::new_with_props(HomeView, props);
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Notes</title>\
         <style>{STYLES}</style></head><body>{}</body></html>",
        dioxus_ssr::render(&dom)
    )
}
