//! Process-wide memo of the loaded table.
//!
//! The table is read once at startup by the platform binary and shared
//! read-only with every render afterwards. The first successful load wins.

use std::path::Path;

use once_cell::sync::OnceCell;

use super::dataset::{Dataset, DatasetError};

static SHARED: OnceCell<Dataset> = OnceCell::new();

/// Install `dataset` unless one is already present; returns the cached table.
pub fn install(dataset: Dataset) -> &'static Dataset {
    SHARED.get_or_init(|| dataset)
}

pub fn load_path(path: impl AsRef<Path>) -> Result<&'static Dataset, DatasetError> {
    if let Some(dataset) = SHARED.get() {
        return Ok(dataset);
    }
    Dataset::from_path(path).map(install)
}

pub fn load_embedded(name: &str) -> Result<&'static Dataset, DatasetError> {
    if let Some(dataset) = SHARED.get() {
        return Ok(dataset);
    }
    Dataset::embedded(name).map(install)
}

pub fn shared() -> Option<&'static Dataset> {
    SHARED.get()
}
