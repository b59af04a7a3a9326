//! Sales dataset: row type, CSV loading and the shared in-memory table.

mod dataset;
mod record;

pub mod catalog;

pub(crate) use dataset::DataAssets;
pub use dataset::{Dataset, DatasetError};
pub use record::SalesRecord;
