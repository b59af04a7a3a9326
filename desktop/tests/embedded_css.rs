#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! A truncated or moved file would only show up as an unstyled window, so
//! catch it here.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_region_palette() {
    // The donut slices and legend swatches read these custom properties.
    for token in ["--color-region-na", "--color-region-eu", "--color-region-jp"] {
        assert!(
            EMBEDDED_CSS.contains(&format!("{token}:")),
            "Expected custom property `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme ({open} open, {close} close)");
}
