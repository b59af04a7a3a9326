//! The filter → aggregate → chart pipeline behind the dashboard page.
//!
//! Every stage is a pure function over the shared read-only table so the
//! page can rerun the whole chain on each interaction.

pub mod aggregate;
pub mod charts;
pub mod filters;
pub mod geometry;
pub mod metrics;
pub mod pipeline;

pub use aggregate::{GroupTotal, RankedGame, Region, RegionTotal};
pub use charts::{BarChartSpec, ChartCopy, DashboardCharts, DonutChartSpec, Orientation};
pub use filters::{Dimension, DimensionSelection, FilterOptions, FilterSelection};
pub use metrics::HeadlineMetrics;
pub use pipeline::{render, DashboardOutcome, DashboardReport};
