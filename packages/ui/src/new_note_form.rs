use dioxus::prelude::*;

/// Form that posts a new note to `/add-note`.
#[component]
pub fn NewNoteForm() -> Element {
    rsx! {
        form {
            class: "new-note",
            method: "post",
            action: "/add-note",
            input {
                r#type: "text",
                name: "note",
                placeholder: "Write a note",
                autofocus: true,
            }
            button { r#type: "submit", "Add" }
        }
    }
}
