//! Internationalization (i18n) support for `gamesales-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/gamesales-ui.ftl   (fallback/reference)
//!   pt-BR/gamesales-ui.ftl   (the dataset's original Portuguese copy)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let heading = t!("filters-heading");
//! let count = t!("filter-count", chosen = "3", total = "12");
//! ```
//!
//! To add a new locale, copy `en-US/gamesales-ui.ftl` to
//! `i18n/<lang-id>/gamesales-ui.ftl`, translate each value (keep IDs and
//! placeholders identical) and register it in `tests/i18n_missing_keys.rs`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("filters-heading")
///     t!("metric-rows", rows = "42")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "gamesales-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language the loader currently resolves messages in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn bundled_languages_are_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(langs.iter().any(|l| l == "pt-BR"));
    }

    #[test]
    fn brand_lookup_works() {
        init();
        // Brand is identical across locales, so this holds whatever the OS asks for.
        let s = fl!(&*LOADER, "brand-name");
        assert_eq!(s, "Game Sales Explorer");
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        init();
        let before = fl!(&*LOADER, "brand-name");
        let lang_before = current_language();
        assert!(set_language("not a tag!").is_ok());
        let after = fl!(&*LOADER, "brand-name");
        assert_eq!(before, after);
        assert_eq!(current_language(), lang_before);
    }

    #[test]
    fn current_language_is_a_bundled_locale() {
        init();
        let current = current_language();
        assert!(
            available_languages().contains(&current),
            "loader resolved {current}, which has no bundle"
        );
    }
}
