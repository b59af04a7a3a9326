//! Headline figures for the working subset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::SalesRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HeadlineMetrics {
    /// Distinct title strings; a title released on several platforms counts once.
    pub distinct_games: usize,
    /// Sum of global sales, rounded for display.
    pub total_global_sales: f64,
    pub distinct_publishers: usize,
}

impl HeadlineMetrics {
    pub fn from_rows(rows: &[&SalesRecord], decimals: u32) -> Self {
        let distinct_games = rows.iter().map(|r| r.name.as_str()).collect::<HashSet<_>>().len();
        let distinct_publishers = rows
            .iter()
            .map(|r| r.publisher.as_str())
            .collect::<HashSet<_>>()
            .len();
        let total = rows.iter().map(|r| r.global_sales).sum::<f64>();

        Self {
            distinct_games,
            total_global_sales: round_to(total, decimals),
            distinct_publishers,
        }
    }
}

/// Round half away from zero after scaling by `10^decimals`.
///
/// The scaled value is rounded as the binary float it is, so `12.345` becomes
/// `12.35` while `1.005` (stored as `1.00499…`) becomes `1.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
