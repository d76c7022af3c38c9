#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, NavBar, NavBuilder, NavTarget};
use ui::theme::THEME_CSS_INLINE;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("DevEvent – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1200.0, 800.0)),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_brand(children: Element) -> Element {
    rsx!(Link { class: "logo", to: Route::Home {}, {children} })
}

fn nav_link(target: NavTarget, label: &str) -> Element {
    let route = match target {
        NavTarget::Home | NavTarget::Events | NavTarget::Create => Route::Home {},
    };
    rsx!(Link { to: route, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        brand: nav_brand,
        link: nav_link,
    });

    rsx! {
        // Desktop has no asset server for the theme; always inline it.
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopLayout() -> Element {
    rsx! {
        NavBar {}
        main { Outlet::<Route> {} }
    }
}
