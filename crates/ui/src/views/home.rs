use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

/// Landing page: paste a session id and jump to its notes. In the full
/// product the course page links here directly; this entry form is the
/// desktop stand-in.
#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();
    let mut session_input = use_signal(String::new);

    let open = move |_| {
        let session_id = session_input().trim().to_string();
        if !session_id.is_empty() {
            let _ = navigator.push(Route::Notes { session_id });
        }
    };

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lesson Notes" }
                p { class: "view-subtitle", "Open the AI study notes for a course session." }
            }
            div { class: "view-divider" }
            div { class: "home-entry",
                input {
                    class: "home-entry-input",
                    r#type: "text",
                    placeholder: "Session id...",
                    value: "{session_input()}",
                    oninput: move |evt| session_input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: open,
                    "Open notes"
                }
            }
        }
    }
}
