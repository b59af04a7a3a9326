//! One full pass from selections to everything the page shows.
//!
//! Called on every interaction with the immutable base table; nothing is
//! carried over between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::DashboardConfig;
use crate::data::Dataset;

use super::aggregate::{
    regional_split, sales_by_platform, top_games, top_publishers, GroupTotal, RankedGame,
    RegionTotal,
};
use super::filters::{apply, Dimension, FilterSelection};
use super::metrics::HeadlineMetrics;

/// Everything computed for a non-empty working subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub row_count: usize,
    pub metrics: HeadlineMetrics,
    pub top_games: Vec<RankedGame>,
    pub platform_sales: Vec<GroupTotal>,
    pub top_publishers: Vec<GroupTotal>,
    pub regional_split: Vec<RegionTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardOutcome {
    /// At least one dimension has nothing chosen; lists which ones.
    NoSelection(Vec<Dimension>),
    /// Selections are valid but no row passes all of them.
    NoData,
    Ready(Box<DashboardReport>),
}

impl DashboardOutcome {
    pub fn report(&self) -> Option<&DashboardReport> {
        match self {
            DashboardOutcome::Ready(report) => Some(report.as_ref()),
            _ => None,
        }
    }
}

pub fn render(dataset: &Dataset, selection: &FilterSelection, config: &DashboardConfig) -> DashboardOutcome {
    let empty = selection.empty_dimensions();
    if !empty.is_empty() {
        debug!(?empty, "render halted: empty selection");
        return DashboardOutcome::NoSelection(empty);
    }

    let rows = apply(dataset.records(), selection);
    if rows.is_empty() {
        debug!("render halted: no matching rows");
        return DashboardOutcome::NoData;
    }

    debug!(rows = rows.len(), "rendering dashboard");
    DashboardOutcome::Ready(Box::new(DashboardReport {
        row_count: rows.len(),
        metrics: HeadlineMetrics::from_rows(&rows, config.decimals),
        top_games: top_games(&rows, config.top_n),
        platform_sales: sales_by_platform(&rows),
        top_publishers: top_publishers(&rows, config.top_n),
        regional_split: regional_split(&rows),
    }))
}
