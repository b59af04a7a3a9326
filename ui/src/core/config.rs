//! Dashboard tunables, read from the embedded `dashboard.json`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::DataAssets;

const CONFIG_ASSET: &str = "dashboard.json";

static SHARED: Lazy<DashboardConfig> = Lazy::new(DashboardConfig::load);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// File name of the cleaned CSV (embedded asset, or next to the desktop binary).
    pub dataset_file: String,
    /// Row limit for the top games and top publishers rankings.
    pub top_n: usize,
    /// Inner radius of the regional donut as a fraction of the outer radius.
    pub donut_hole: f64,
    /// Outward offset of each regional slice (NA, EU, JP), fraction of the radius.
    pub region_pull: [f64; 3],
    /// Display precision of sales totals.
    pub decimals: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_file: "df_limpo.csv".to_string(),
            top_n: 10,
            donut_hole: 0.45,
            region_pull: [0.05, 0.05, 0.1],
            decimals: 2,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Embedded config, or defaults if the asset is absent or unreadable.
    pub fn load() -> Self {
        let Some(file) = DataAssets::get(CONFIG_ASSET) else {
            warn!(asset = CONFIG_ASSET, "config asset missing; using defaults");
            return Self::default();
        };

        match serde_json::from_slice(file.data.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                warn!(asset = CONFIG_ASSET, %err, "config asset unreadable; using defaults");
                Self::default()
            }
        }
    }

    pub fn shared() -> &'static Self {
        &SHARED
    }
}
