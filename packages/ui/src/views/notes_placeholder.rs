use dioxus::prelude::*;

/// Empty state shown when the user has no notes.
#[component]
pub fn NotesPlaceholder() -> Element {
    rsx! {
        div {
            class: "notes-placeholder",
            h2 { "No notes yet" }
            p { "Write your first note above." }
        }
    }
}
