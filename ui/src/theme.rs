//! Shared stylesheet and icons for the platform shells.

use dioxus::prelude::*;

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Theme text for shells that inline it instead of serving the asset.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

pub const FAVICON: Asset = asset!("/assets/icons/logo.png");
