//! Localization for `devevent-ui`.
//!
//! Built on `i18n-embed` (language selection + asset loading), `fluent`
//! (message formatting), `rust-embed` (compile-time embedding of `.ftl` files)
//! and `i18n-embed-fl` (`fl!` macro for compile-time checked lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/devevent-ui.ftl   (fallback/reference)
//!   es-ES/devevent-ui.ftl
//!   fr-FR/devevent-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-events");
//! ```
//!
//! `init()` loads the `en-US` bundle only, so rendered copy never depends on
//! the machine it runs on. A shell that wants localized copy opts in with
//! [`init_from_platform`] (OS / browser language list) or [`set_language`].
//!
//! To add a locale, copy `en-US/devevent-ui.ftl` to `i18n/<lang-id>/devevent-ui.ftl`,
//! translate the values (keep the IDs). `src/tests/i18n_completeness.rs`
//! picks the new folder up on its own.
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`]. Arguments are
/// passed on to `fl!` as `name = value` pairs.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain. Must match the crate name and the `.ftl` filename.
pub(crate) const DOMAIN: &str = "devevent-ui";

/// Locale every other bundle is checked against.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

/// Fresh loader over the embedded bundles with only the fallback configured.
pub fn new_loader() -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
}

/// Load the fallback bundle into [`LOADER`] (idempotent). Never consults the
/// platform's language list and never undoes an earlier opt-in selection.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select_language(&LOADER, FALLBACK_LANGUAGE) {
            tracing::warn!("i18n fallback bundle failed to load ({err})");
        }
    });
}

/// Opt-in: switch [`LOADER`] to the languages the OS or browser asks for.
/// On failure the current selection stays active.
pub fn init_from_platform() {
    init();
    let requested = requested_languages();
    match i18n_embed::select(&*LOADER, &Localizations, &requested) {
        Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
        Err(err) => {
            tracing::warn!("i18n language selection failed ({err}); keeping current language")
        }
    }
}

/// Opt-in: switch [`LOADER`] to `tag`. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    select_language(&LOADER, tag)
}

/// Select `tag` on `loader`. Unparseable tags are ignored (Ok returned).
pub fn select_language(
    loader: &FluentLanguageLoader,
    tag: &str,
) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(loader, &Localizations, &[lang])?;
    Ok(())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the language lookups currently resolve in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
