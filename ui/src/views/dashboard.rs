use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::chart_view::{BarChartView, DonutChartView};
use crate::components::filter_sidebar::{dimension_label, FilterSidebar};
use crate::components::metric_tiles::MetricTiles;
use crate::core::config::DashboardConfig;
use crate::dashboard::{self, ChartCopy, Dimension, DashboardOutcome, FilterOptions, FilterSelection};
use crate::data::catalog;
use crate::t;

/// The whole report: reruns the pipeline from the shared table on every
/// selection change.
#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the global language code (if provided) so copy refreshes on switch.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let options = use_hook(|| {
        Rc::new(
            catalog::shared()
                .map(FilterOptions::from_dataset)
                .unwrap_or_default(),
        )
    });
    let selection = use_signal(FilterSelection::default);

    let Some(dataset) = catalog::shared() else {
        return rsx! {
            section { class: "page page-dashboard",
                p { class: "dashboard-warning dashboard-warning--error", {t!("page-dataset-unavailable")} }
            }
        };
    };

    let config = DashboardConfig::shared();
    let outcome = dashboard::render(dataset, &selection(), config);

    let body = match outcome {
        DashboardOutcome::NoSelection(dimensions) => render_empty_selection(&dimensions),
        DashboardOutcome::NoData => rsx! {
            p { class: "dashboard-warning", role: "alert", {t!("warning-no-data")} }
        },
        DashboardOutcome::Ready(report) => {
            let charts = dashboard::charts::build(&report, &chart_copy(config), config);
            rsx! {
                MetricTiles {
                    metrics: report.metrics.clone(),
                    row_count: report.row_count,
                    decimals: config.decimals,
                }
                BarChartView { spec: charts.top_games }
                BarChartView { spec: charts.platform_sales }
                BarChartView { spec: charts.top_publishers }
                DonutChartView { spec: charts.regions }
            }
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            div { class: "dashboard__header",
                h1 { {t!("page-title")} }
                p { {t!("page-intro")} }
                p { class: "dashboard__note", {t!("page-regions-note")} }
            }

            div { class: "dashboard__layout",
                FilterSidebar { options, selection }
                main { class: "dashboard__main", {body} }
            }
        }
    }
}

fn render_empty_selection(dimensions: &[Dimension]) -> Element {
    let names = dimensions
        .iter()
        .map(|d| dimension_label(*d))
        .collect::<Vec<_>>()
        .join(", ");
    let detail = t!("warning-empty-dimensions", dimensions = names);

    rsx! {
        div { class: "dashboard-warning", role: "alert",
            p { {t!("warning-empty-selection")} }
            p { class: "dashboard-warning__detail", "{detail}" }
        }
    }
}

fn chart_copy(config: &DashboardConfig) -> ChartCopy {
    let count = config.top_n.to_string();
    ChartCopy {
        top_games_title: t!("chart-top-games-title", count = count.clone()),
        platform_title: t!("chart-platforms-title"),
        publishers_title: t!("chart-publishers-title", count = count),
        regions_title: t!("chart-regions-title"),
        sales_axis: t!("axis-sales"),
        game_axis: t!("axis-game"),
        platform_axis: t!("axis-platform"),
        publisher_axis: t!("axis-publisher"),
        region_legend: t!("legend-region"),
        north_america: t!("region-na"),
        europe: t!("region-eu"),
        japan: t!("region-jp"),
    }
}
