//! Maps the aggregate tables to chart descriptions.
//!
//! | table            | chart | orientation | display order              |
//! |------------------|-------|-------------|----------------------------|
//! | top games        | bar   | horizontal  | ascending (largest on top) |
//! | platform totals  | bar   | vertical    | as produced (descending)   |
//! | top publishers   | bar   | horizontal  | as produced (descending)   |
//! | regional split   | donut |             | NA, EU, JP; JP pulled most |
//!
//! Bars are listed in axis order starting at the origin: bottom-up for
//! horizontal charts, left-to-right for vertical ones.

use serde::{Deserialize, Serialize};

use crate::core::config::DashboardConfig;

use super::aggregate::{GroupTotal, RankedGame, Region};
use super::pipeline::DashboardReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub id: String,
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub orientation: Orientation,
    /// Decimal places for value labels and hover text.
    pub decimals: u32,
    pub bars: Vec<BarDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub region: Region,
    pub label: String,
    pub value: f64,
    pub pull: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutChartSpec {
    pub id: String,
    pub title: String,
    pub legend_title: String,
    pub hole: f64,
    pub decimals: u32,
    pub slices: Vec<DonutSlice>,
}

/// The four charts in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub top_games: BarChartSpec,
    pub platform_sales: BarChartSpec,
    pub top_publishers: BarChartSpec,
    pub regions: DonutChartSpec,
}

/// Static text for titles, axes and legends. Views fill this from the active
/// locale; tests use plain strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartCopy {
    pub top_games_title: String,
    pub platform_title: String,
    pub publishers_title: String,
    pub regions_title: String,
    pub sales_axis: String,
    pub game_axis: String,
    pub platform_axis: String,
    pub publisher_axis: String,
    pub region_legend: String,
    pub north_america: String,
    pub europe: String,
    pub japan: String,
}

impl ChartCopy {
    fn region_name(&self, region: Region) -> &str {
        match region {
            Region::NorthAmerica => &self.north_america,
            Region::Europe => &self.europe,
            Region::Japan => &self.japan,
        }
    }
}

pub fn build(report: &DashboardReport, copy: &ChartCopy, config: &DashboardConfig) -> DashboardCharts {
    DashboardCharts {
        top_games: top_games_chart(report, copy, config),
        platform_sales: platform_chart(report, copy, config),
        top_publishers: publishers_chart(report, copy, config),
        regions: regions_chart(report, copy, config),
    }
}

/// A title released on several platforms ranks once per platform, so the
/// platform is part of the category.
fn game_label(game: &RankedGame) -> String {
    format!("{} ({})", game.name, game.platform)
}

fn group_bars(groups: &[GroupTotal]) -> Vec<BarDatum> {
    groups
        .iter()
        .map(|group| BarDatum {
            label: group.key.clone(),
            value: group.total,
        })
        .collect()
}

fn top_games_chart(report: &DashboardReport, copy: &ChartCopy, config: &DashboardConfig) -> BarChartSpec {
    let mut bars: Vec<BarDatum> = report
        .top_games
        .iter()
        .map(|game| BarDatum {
            label: game_label(game),
            value: game.global_sales,
        })
        .collect();
    bars.sort_by(|a, b| a.value.total_cmp(&b.value));

    BarChartSpec {
        id: "chart-top-games".to_string(),
        title: copy.top_games_title.clone(),
        category_label: copy.game_axis.clone(),
        value_label: copy.sales_axis.clone(),
        orientation: Orientation::Horizontal,
        decimals: config.decimals,
        bars,
    }
}

fn platform_chart(report: &DashboardReport, copy: &ChartCopy, config: &DashboardConfig) -> BarChartSpec {
    BarChartSpec {
        id: "chart-platforms".to_string(),
        title: copy.platform_title.clone(),
        category_label: copy.platform_axis.clone(),
        value_label: copy.sales_axis.clone(),
        orientation: Orientation::Vertical,
        decimals: config.decimals,
        bars: group_bars(&report.platform_sales),
    }
}

fn publishers_chart(report: &DashboardReport, copy: &ChartCopy, config: &DashboardConfig) -> BarChartSpec {
    BarChartSpec {
        id: "chart-publishers".to_string(),
        title: copy.publishers_title.clone(),
        category_label: copy.publisher_axis.clone(),
        value_label: copy.sales_axis.clone(),
        orientation: Orientation::Horizontal,
        decimals: config.decimals,
        bars: group_bars(&report.top_publishers),
    }
}

fn regions_chart(report: &DashboardReport, copy: &ChartCopy, config: &DashboardConfig) -> DonutChartSpec {
    let slices = report
        .regional_split
        .iter()
        .enumerate()
        .map(|(i, entry)| DonutSlice {
            region: entry.region,
            label: copy.region_name(entry.region).to_string(),
            value: entry.total,
            pull: config.region_pull.get(i).copied().unwrap_or(0.0),
        })
        .collect();

    DonutChartSpec {
        id: "chart-regions".to_string(),
        title: copy.regions_title.clone(),
        legend_title: copy.region_legend.clone(),
        hole: config.donut_hole,
        decimals: config.decimals,
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::aggregate::RegionTotal;
    use crate::dashboard::metrics::HeadlineMetrics;

    fn report() -> DashboardReport {
        DashboardReport {
            row_count: 3,
            metrics: HeadlineMetrics::default(),
            top_games: vec![
                RankedGame { name: "Big".into(), platform: "Wii".into(), global_sales: 9.0 },
                RankedGame { name: "Mid".into(), platform: "DS".into(), global_sales: 5.0 },
                RankedGame { name: "Small".into(), platform: "PC".into(), global_sales: 1.0 },
            ],
            platform_sales: vec![
                GroupTotal { key: "Wii".into(), total: 9.0 },
                GroupTotal { key: "DS".into(), total: 5.0 },
            ],
            top_publishers: vec![
                GroupTotal { key: "Nintendo".into(), total: 14.0 },
                GroupTotal { key: "EA".into(), total: 1.0 },
            ],
            regional_split: vec![
                RegionTotal { region: Region::NorthAmerica, total: 6.0 },
                RegionTotal { region: Region::Europe, total: 4.0 },
                RegionTotal { region: Region::Japan, total: 2.0 },
            ],
        }
    }

    fn copy() -> ChartCopy {
        ChartCopy {
            north_america: "North America".into(),
            europe: "European Union".into(),
            japan: "Japan".into(),
            ..ChartCopy::default()
        }
    }

    #[test]
    fn top_games_ascend_so_the_largest_sits_on_top() {
        let charts = build(&report(), &copy(), &DashboardConfig::default());
        let labels: Vec<_> = charts.top_games.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Small (PC)", "Mid (DS)", "Big (Wii)"]);
        assert_eq!(charts.top_games.orientation, Orientation::Horizontal);
    }

    #[test]
    fn same_title_on_two_platforms_gets_distinct_bars() {
        let mut report = report();
        report.top_games = vec![
            RankedGame { name: "A".into(), platform: "X360".into(), global_sales: 10.0 },
            RankedGame { name: "A".into(), platform: "PS3".into(), global_sales: 2.345 },
            RankedGame { name: "B".into(), platform: "PC".into(), global_sales: 0.0 },
        ];
        let charts = build(&report, &copy(), &DashboardConfig::default());
        let labels: Vec<_> = charts.top_games.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["B (PC)", "A (PS3)", "A (X360)"]);
    }

    #[test]
    fn every_bar_chart_carries_both_axis_titles() {
        let copy = ChartCopy {
            sales_axis: "Global sales".into(),
            game_axis: "Game".into(),
            platform_axis: "Platform".into(),
            publisher_axis: "Publisher".into(),
            ..copy()
        };
        let charts = build(&report(), &copy, &DashboardConfig::default());
        assert_eq!(charts.top_games.category_label, "Game");
        assert_eq!(charts.platform_sales.category_label, "Platform");
        assert_eq!(charts.top_publishers.category_label, "Publisher");
        for spec in [&charts.top_games, &charts.platform_sales, &charts.top_publishers] {
            assert_eq!(spec.value_label, "Global sales", "{}", spec.id);
        }
    }

    #[test]
    fn configured_decimals_reach_every_chart() {
        let config = DashboardConfig { decimals: 3, ..DashboardConfig::default() };
        let charts = build(&report(), &copy(), &config);
        assert_eq!(charts.top_games.decimals, 3);
        assert_eq!(charts.platform_sales.decimals, 3);
        assert_eq!(charts.top_publishers.decimals, 3);
        assert_eq!(charts.regions.decimals, 3);
    }

    #[test]
    fn platform_and_publisher_bars_keep_produced_order() {
        let charts = build(&report(), &copy(), &DashboardConfig::default());
        assert_eq!(charts.platform_sales.orientation, Orientation::Vertical);
        assert_eq!(charts.platform_sales.bars[0].label, "Wii");
        assert_eq!(charts.top_publishers.orientation, Orientation::Horizontal);
        assert_eq!(charts.top_publishers.bars[0].label, "Nintendo");
    }

    #[test]
    fn donut_keeps_region_order_and_pulls_japan_furthest() {
        let charts = build(&report(), &copy(), &DashboardConfig::default());
        let regions = &charts.regions;
        let labels: Vec<_> = regions.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["North America", "European Union", "Japan"]);
        assert_eq!(regions.hole, 0.45);
        let japan = regions.slices[2].pull;
        assert!(regions.slices[..2].iter().all(|s| s.pull < japan));
    }
}
