//! Shared UI crate for the game sales dashboard. The pipeline, components
//! and views live here; the `web` and `desktop` crates only launch it.

pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand header + locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod chart_view;
    pub mod filter_sidebar;
    pub mod metric_tiles;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
