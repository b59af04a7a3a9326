#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::error;

use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::data::catalog;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    // Before any load so config and dataset events reach the subscriber.
    dioxus::logger::initialize_default();
    let config = DashboardConfig::shared();
    let data_path = resolve_data_dir().join(&config.dataset_file);
    match catalog::load_path(&data_path) {
        Ok(dataset) => {
            tracing::info!(rows = dataset.len(), path = %data_path.display(), "dataset ready")
        }
        Err(err) => {
            error!(%err, "cannot start without the sales table");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }

    ui::i18n::init();
    let title = format!(
        "{} – v{}",
        ui::i18n::LOADER.get("brand-name"),
        env!("CARGO_PKG_VERSION")
    );

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(WindowBuilder::new().with_title(title).with_maximized(true))
                .with_resource_directory(resolve_data_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    // Before any load so config and dataset events reach the subscriber.
    dioxus::logger::initialize_default();
    let config = DashboardConfig::shared();
    if let Err(err) = catalog::load_embedded(&config.dataset_file) {
        error!(%err, "cannot start without the sales table");
        std::process::exit(1);
    }
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected tag here; the keyed wrapper below remounts
    // the routed subtree so every string is looked up again.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

/// Directory holding the sales table. Debug builds read straight from the ui
/// crate; packaged builds expect `assets/data` next to the executable.
#[cfg(feature = "desktop")]
fn resolve_data_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets/data"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets").join("data")))
            .unwrap_or_else(|| PathBuf::from("assets/data"))
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}

        Outlet::<Route> {}
    }
}
