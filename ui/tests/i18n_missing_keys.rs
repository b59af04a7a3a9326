use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Every non‑fallback locale must define *at least* the keys present in the
/// fallback (en-US) `gamesales-ui.ftl`, and no file may define a key twice.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/gamesales-ui.ftl`
/// 2. Copy all keys from `en-US/gamesales-ui.ftl` and translate the values
/// 3. Register it in `LOCALES` below
const EN_US: &str = include_str!("../i18n/en-US/gamesales-ui.ftl");
const PT_BR: &str = include_str!("../i18n/pt-BR/gamesales-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("pt-BR", PT_BR)];

const I18N_CONFIG: &str = include_str!("../i18n.toml");

/// `fl!` derives the bundle name from the crate name (`gamesales_ui`) unless
/// `i18n.toml` pins it to the hyphenated file name used on disk.
#[test]
fn i18n_config_pins_bundle_domain() {
    let domain = I18N_CONFIG
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"'))
        .next();
    assert_eq!(domain, Some("gamesales-ui"));
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = message_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys: HashSet<_> = message_keys(src).into_iter().collect();
        let missing: BTreeSet<_> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        let mut seen = HashSet::new();
        let dups: BTreeSet<_> = message_keys(src)
            .into_iter()
            .filter(|k| !seen.insert(k.clone()))
            .collect();
        assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn dashboard_copy_is_translated() {
    // Headline strings must differ from the fallback; untranslated copies slip
    // through the key check otherwise.
    for key in ["page-title", "warning-no-data", "warning-empty-selection", "metric-games"] {
        assert_ne!(value_of(EN_US, key), value_of(PT_BR, key), "pt-BR `{key}` is untranslated");
    }
}

#[test]
fn ranked_chart_titles_follow_configured_count() {
    let all = std::iter::once(("en-US", EN_US)).chain(LOCALES.iter().copied());
    for (locale, src) in all {
        for key in ["chart-top-games-title", "chart-publishers-title"] {
            let value = value_of(src, key).unwrap_or_default();
            assert!(value.contains("{ $count }"), "{locale} `{key}` ignores the count: {value}");
            assert!(!value.contains("10"), "{locale} `{key}` hard-codes the count: {value}");
        }
    }
}

/// Message keys in file order (duplicates kept). Comment, attribute and
/// continuation lines are skipped.
fn message_keys(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(left, _)| left.trim())
        .filter(|key| !key.is_empty() && !key.contains(char::is_whitespace) && !key.starts_with('-'))
        .map(str::to_string)
        .collect()
}

fn value_of<'a>(src: &'a str, key: &str) -> Option<&'a str> {
    src.lines().find_map(|line| {
        let (left, right) = line.split_once('=')?;
        (left.trim() == key).then(|| right.trim())
    })
}
