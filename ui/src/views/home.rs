use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Landing page shown under the navbar at `/`.
#[component]
pub fn Home() -> Element {
    tracing::debug!(lang = %crate::i18n::current_language(), "Home render");

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__tagline", {crate::t!("home-tagline")} }
        }
    }
}
