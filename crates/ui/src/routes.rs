use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, NotesView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/notes/:session_id", NotesView)] Notes { session_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "topbar-brand", Link { to: Route::Home {}, "Foundations" } }
                span { class: "topbar-tag", "Lesson Notes" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
