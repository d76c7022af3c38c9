use crate::i18n;
use crate::t;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, inlined as well for native release builds where the
// asset directory is not served.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const LOGO: Asset = asset!(
    "/assets/icons/logo.png",
    ImageAssetOptions::new().with_size(ImageSize::Manual {
        width: 24,
        height: 24
    })
);

/// Brand text shown next to the logo. Never localized.
pub const BRAND: &str = "DevEvent";

/// Rendered width and height of the logo, in pixels.
pub const LOGO_SIZE: u32 = 24;

/// Destinations in the navbar link list, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Events,
    Create,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::Events, NavTarget::Create];

    /// Path the link points at. Events and Create share the landing page until
    /// their pages exist.
    pub fn href(self) -> &'static str {
        match self {
            NavTarget::Home | NavTarget::Events | NavTarget::Create => "/",
        }
    }

    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::Events => t!("nav-events"),
            NavTarget::Create => t!("nav-create"),
        }
    }
}

/// Platform hook for turning navbar entries into router links.
///
/// The `ui` crate does not know any platform's `Route` enum, so a platform
/// crate registers plain functions that wrap the content they are handed in
/// its own `Link`:
///
/// ```ignore
/// register_nav(NavBuilder {
///     brand: |children| rsx!(Link { class: "logo", to: Route::Home {}, {children} }),
///     link: |_target, label| rsx!(Link { to: Route::Home {}, "{label}" }),
/// });
/// ```
///
/// Without a registered builder `NavBar` renders plain anchors using
/// [`NavTarget::href`].
pub struct NavBuilder {
    /// Wraps the logo image and brand text in a link to the root path.
    /// Should carry the `logo` class so the stylesheet applies.
    pub brand: fn(children: Element) -> Element,
    /// Returns a link to `target` whose only child is `label`.
    pub link: fn(target: NavTarget, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform's link constructors. First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navbar builder already registered; keeping the first one");
    }
}

fn brand_link(children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.brand)(children),
        None => rsx! {
            a { class: "logo", href: NavTarget::Home.href(), {children} }
        },
    }
}

fn nav_link(target: NavTarget) -> Element {
    let label = target.label();
    match NAV_BUILDER.get() {
        Some(b) => (b.link)(target, &label),
        None => rsx! {
            a { href: target.href(), "{label}" }
        },
    }
}

/// Site header: logo + brand linking home, then the Home/Events/Create list.
#[component]
pub fn NavBar() -> Element {
    // en-US unless the shell opted into another language.
    i18n::init();

    tracing::debug!(lang = %i18n::current_language(), "NavBar render");

    let logo_alt = t!("nav-logo-alt");
    let brand = brand_link(rsx! {
        img {
            src: LOGO,
            alt: "{logo_alt}",
            width: "{LOGO_SIZE}",
            height: "{LOGO_SIZE}",
        }
        p { "{BRAND}" }
    });
    let [home, events, create] = NavTarget::ALL.map(nav_link);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            nav {
                {brand}
                ul {
                    {home}
                    {events}
                    {create}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_in_document_order() {
        assert_eq!(
            NavTarget::ALL,
            [NavTarget::Home, NavTarget::Events, NavTarget::Create]
        );
    }

    #[test]
    fn every_target_points_at_root() {
        for target in NavTarget::ALL {
            assert_eq!(target.href(), "/", "{target:?}");
        }
    }

    #[test]
    fn default_labels_are_en_us() {
        i18n::init();
        let labels = NavTarget::ALL.map(NavTarget::label);
        assert_eq!(labels, ["Home", "Events", "Create"]);
    }
}
