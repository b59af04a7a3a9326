//! Group / sort / take reductions over the working subset.
//!
//! Each reduction is independent and order-sensitive: sorts are stable, and
//! group totals are accumulated in lexicographic key order before sorting, so
//! equal totals list in key order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::SalesRecord;

/// One ranked row of a top-N table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGame {
    pub name: String,
    pub platform: String,
    pub global_sales: f64,
}

/// Summed global sales for one group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::Japan];

    pub fn slug(self) -> &'static str {
        match self {
            Region::NorthAmerica => "na",
            Region::Europe => "eu",
            Region::Japan => "jp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub region: Region,
    pub total: f64,
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Highest global sales first; equal sales keep table order.
pub fn top_games(rows: &[&SalesRecord], limit: usize) -> Vec<RankedGame> {
    let mut ranked: Vec<&SalesRecord> = rows.to_vec();
    ranked.sort_by(|a, b| descending(a.global_sales, b.global_sales));
    ranked
        .into_iter()
        .take(limit)
        .map(|r| RankedGame {
            name: r.name.clone(),
            platform: r.platform.clone(),
            global_sales: r.global_sales,
        })
        .collect()
}

fn group_totals<'a, F>(rows: &[&'a SalesRecord], key: F) -> Vec<GroupTotal>
where
    F: Fn(&'a SalesRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for row in rows {
        *groups.entry(key(*row)).or_insert(0.0) += row.global_sales;
    }

    let mut totals: Vec<GroupTotal> = groups
        .into_iter()
        .map(|(key, total)| GroupTotal {
            key: key.to_string(),
            total,
        })
        .collect();
    totals.sort_by(|a, b| descending(a.total, b.total));
    totals
}

/// Every platform present in the subset, largest total first.
pub fn sales_by_platform(rows: &[&SalesRecord]) -> Vec<GroupTotal> {
    group_totals(rows, |r| r.platform.as_str())
}

pub fn top_publishers(rows: &[&SalesRecord], limit: usize) -> Vec<GroupTotal> {
    let mut totals = group_totals(rows, |r| r.publisher.as_str());
    totals.truncate(limit);
    totals
}

/// Column sums for NA, EU and JP, in that order. Other regions are ignored,
/// so the three need not add up to the global total.
pub fn regional_split(rows: &[&SalesRecord]) -> Vec<RegionTotal> {
    Region::ALL
        .into_iter()
        .map(|region| RegionTotal {
            region,
            total: rows
                .iter()
                .map(|r| match region {
                    Region::NorthAmerica => r.na_sales,
                    Region::Europe => r.eu_sales,
                    Region::Japan => r.jp_sales,
                })
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, platform: &str, publisher: &str, global: f64) -> SalesRecord {
        SalesRecord {
            name: name.into(),
            platform: platform.into(),
            year: Some(2000),
            genre: "Misc".into(),
            publisher: publisher.into(),
            na_sales: 0.0,
            eu_sales: 0.0,
            jp_sales: 0.0,
            other_sales: 0.0,
            global_sales: global,
        }
    }

    #[test]
    fn platform_totals_cover_every_platform_descending() {
        let rows = vec![
            row("a", "Wii", "N", 2.0),
            row("b", "PS2", "S", 5.0),
            row("c", "Wii", "N", 4.0),
            row("d", "GB", "N", 1.0),
        ];
        let refs: Vec<_> = rows.iter().collect();
        let totals = sales_by_platform(&refs);
        let keys: Vec<_> = totals.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["Wii", "PS2", "GB"]);
        assert_eq!(totals[0].total, 6.0);
    }

    #[test]
    fn tied_group_totals_list_in_key_order() {
        let rows = vec![
            row("a", "X360", "Zeta", 3.0),
            row("b", "PS3", "Alpha", 3.0),
            row("c", "DS", "Mid", 3.0),
        ];
        let refs: Vec<_> = rows.iter().collect();
        let keys: Vec<_> = top_publishers(&refs, 10)
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn top_publishers_truncates() {
        let rows: Vec<_> = (0..12)
            .map(|i| row("g", "PC", &format!("pub{i:02}"), f64::from(i)))
            .collect();
        let refs: Vec<_> = rows.iter().collect();
        let top = top_publishers(&refs, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].key, "pub11");
        assert_eq!(top[9].key, "pub02");
    }

    #[test]
    fn empty_input_gives_empty_tables_and_zero_regions() {
        assert!(top_games(&[], 10).is_empty());
        assert!(sales_by_platform(&[]).is_empty());
        let regions = regional_split(&[]);
        assert_eq!(regions.len(), 3);
        assert!(regions.iter().all(|r| r.total == 0.0));
    }
}
