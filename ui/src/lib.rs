//! Shared UI crate for DevEvent. The site navbar, localization and the views
//! the platform shells route to live here.

pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    pub mod navbar;
    pub use navbar::{register_nav, NavBar, NavBuilder, NavTarget};
}
