use api::Note;
use dioxus::prelude::*;

/// One note with inline edit and delete forms.
#[component]
pub fn NoteItem(note: Note) -> Element {
    let update_action = format!("/update-note/{}", note.id);
    let delete_action = format!("/delete-note/{}", note.id);
    let text = note.text.clone();

    rsx! {
        li {
            class: "note",
            form {
                class: "note-edit",
                method: "post",
                action: "{update_action}",
                textarea { name: "note", rows: "1", "{text}" }
                button { r#type: "submit", "Save" }
            }
            form {
                class: "note-delete",
                method: "post",
                action: "{delete_action}",
                button { r#type: "submit", "Delete" }
            }
        }
    }
}
