use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::HeadlineMetrics;
use crate::t;

/// The three headline tiles above the charts.
#[component]
pub fn MetricTiles(metrics: HeadlineMetrics, row_count: usize, decimals: u32) -> Element {
    let games = format::format_count(metrics.distinct_games);
    let sales = format::format_millions(metrics.total_global_sales, decimals);
    let publishers = format::format_count(metrics.distinct_publishers);
    let rows_meta = t!("metric-rows", rows = format::format_count(row_count));

    rsx! {
        section { class: "dashboard-metrics",
            div { class: "metric-tile",
                span { class: "metric-tile__label", {t!("metric-games")} }
                strong { class: "metric-tile__value", "{games}" }
                span { class: "metric-tile__meta", "{rows_meta}" }
            }
            div { class: "metric-tile",
                span { class: "metric-tile__label", {t!("metric-global-sales")} }
                strong { class: "metric-tile__value", "{sales}" }
            }
            div { class: "metric-tile",
                span { class: "metric-tile__label", {t!("metric-publishers")} }
                strong { class: "metric-tile__value", "{publishers}" }
            }
        }
    }
}
