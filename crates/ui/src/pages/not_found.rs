use crate::components::{ButtonLink, Glyph};
use dioxus::prelude::*;
use folio_domain::content::Icon;
use folio_domain::route::Route;

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        section { class: "section not-found",
            div { class: "container narrow centered",
                div { class: "status-code accent", "404" }
                h1 { "Page Not Found" }
                p { class: "muted",
                    "The page you're looking for doesn't exist or has been moved."
                }
                p { class: "muted small requested-path", code { "{path}" } }
                div { class: "actions centered",
                    ButtonLink { href: Route::Home.path(),
                        Glyph { icon: Icon::Home }
                        "Back to Home"
                    }
                    button { class: "button button-outline", r#type: "button", "data-history-back": "true",
                        Glyph { icon: Icon::ArrowLeft }
                        "Go Back"
                    }
                }
            }
        }
    }
}
