use dioxus::prelude::*;
use tracing::error;

use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::data::catalog;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
}

// The web bundle has no filesystem, so the theme ships inside the binary.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    // Before any load so config and dataset events reach the subscriber.
    dioxus::logger::initialize_default();
    let config = DashboardConfig::shared();
    if let Err(err) = catalog::load_embedded(&config.dataset_file) {
        error!(%err, file = %config.dataset_file, "cannot start without the sales table");
        panic!("failed to load {}: {err}", config.dataset_file);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { {ui::i18n::LOADER.get("brand-name")} }
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout around the shared `AppNavbar`, bound to this crate's `Route`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
