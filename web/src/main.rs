use dioxus::prelude::*;

use ui::components::{register_nav, NavBar, NavBuilder, NavTarget};
use ui::theme::{FAVICON, THEME_CSS};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
}

fn nav_brand(children: Element) -> Element {
    rsx!(Link {
        class: "logo",
        to: Route::Home {},
        {children}
    })
}

fn nav_link(target: NavTarget, label: &str) -> Element {
    rsx!(Link {
        to: route_for(target),
        "{label}"
    })
}

// Every destination is served by the landing page for now.
fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Home | NavTarget::Events | NavTarget::Create => Route::Home {},
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        brand: nav_brand,
        link: nav_link,
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// Places the shared `NavBar` above whatever route is active.
#[component]
fn WebLayout() -> Element {
    rsx! {
        NavBar {}
        main { Outlet::<Route> {} }
    }
}
