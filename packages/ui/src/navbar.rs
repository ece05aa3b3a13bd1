use dioxus::prelude::*;

/// Top bar with the signed-in user's name and a logout link.
#[component]
pub fn Navbar(display_name: String) -> Element {
    rsx! {
        div {
            class: "navbar",
            h1 { "Notes" }
            div {
                class: "navbar-user",
                span { "Signed in as {display_name}" }
                a { class: "logout-link", href: "/logout", "Log out" }
            }
        }
    }
}
