use api::Note;
use dioxus::prelude::*;

use super::NotesPlaceholder;
use crate::{Navbar, NewNoteForm, NoteItem};

/// Page stylesheet, inlined into the document head by [`crate::render_home`].
pub(crate) const STYLES: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif;
    color: #37352f;
    background: #ffffff;
}
.navbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    border-bottom: 1px solid #e9e9e7;
}
.navbar h1 { margin: 0; font-size: 1.25rem; }
.navbar-user { display: flex; gap: 1rem; color: #787774; font-size: 0.875rem; }
.logout-link { color: #37352f; }
main { max-width: 640px; margin: 2rem auto; padding: 0 1.5rem; }
.new-note, .note-edit { display: flex; gap: 0.5rem; flex: 1; }
.new-note input, .note-edit textarea {
    flex: 1;
    padding: 0.5rem 0.75rem;
    border: 1px solid #e9e9e7;
    border-radius: 4px;
    font-size: 0.9375rem;
    font-family: inherit;
}
.notes { list-style: none; padding: 0; margin: 1.5rem 0 0 0; }
.note { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.notes-placeholder { margin-top: 3rem; text-align: center; color: #787774; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct HomeViewProps {
    pub display_name: String,
    pub notes: Vec<Note>,
}

/// Body of the note list page: add form on top, one editable row per note.
#[allow(non_snake_case)]
pub fn HomeView(props: HomeViewProps) -> Element {
    rsx! {
        div {
            class: "app",
            Navbar { display_name: props.display_name.clone() }
            main {
                NewNoteForm {}
                if props.notes.is_empty() {
                    NotesPlaceholder {}
                } else {
                    ul {
                        class: "notes",
                        for (id, note) in props.notes.iter().map(|n| (n.id, n.clone())) {
                            NoteItem { key: "{id}", note }
                        }
                    }
                }
            }
        }
    }
}
