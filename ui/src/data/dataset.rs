//! Loading the cleaned sales table into memory.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use thiserror::Error;
use tracing::{debug, info};

use super::record::SalesRecord;

/// Assets compiled into every build (`ui/assets/data`). The web target has no
/// filesystem, so it always reads from here.
#[derive(Embed)]
#[folder = "assets/data"]
pub(crate) struct DataAssets;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("embedded asset `{name}` is missing from the build")]
    MissingAsset { name: String },
}

/// The full, read-only sales table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<SalesRecord>,
    source: String,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>, source: impl Into<String>) -> Self {
        Self {
            records,
            source: source.into(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path.display().to_string())
    }

    /// Parse CSV from any reader. Every row must deserialize; the first bad
    /// row aborts the load.
    pub fn from_reader<R: Read>(reader: R, origin: impl Into<String>) -> Result<Self, DatasetError> {
        let origin = origin.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<SalesRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DatasetError::Csv {
                origin: origin.clone(),
                source,
            })?;

        info!(rows = records.len(), %origin, "dataset loaded");
        Ok(Self::new(records, origin))
    }

    pub fn embedded(name: &str) -> Result<Self, DatasetError> {
        let file = DataAssets::get(name).ok_or_else(|| DatasetError::MissingAsset {
            name: name.to_string(),
        })?;
        debug!(name, bytes = file.data.len(), "reading embedded dataset");
        Self::from_reader(file.data.as_ref(), format!("embedded:{name}"))
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nome,Plataforma,Ano,Genero,Editoras_preenchidas,Vendas_America_Norte,Vendas_Uniao_Europeia,Vendas_Japao,Vendas_Outros,Vendas_Globais\n";

    #[test]
    fn parses_rows_with_float_and_missing_years() {
        let csv = format!(
            "{HEADER}Wii Sports,Wii,2006.0,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74\n\
             Madden NFL 2004,PS2,,Sports,Electronic Arts,4.26,0.26,0.01,0.71,5.23\n"
        );
        let dataset = Dataset::from_reader(csv.as_bytes(), "inline").unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.source(), "inline");
        let first = &dataset.records()[0];
        assert_eq!(first.year, Some(2006));
        assert_eq!(first.publisher, "Nintendo");
        assert_eq!(first.global_sales, 82.74);
        assert_eq!(dataset.records()[1].year, None);
    }

    #[test]
    fn rest_of_world_column_is_optional() {
        let csv = "Nome,Plataforma,Ano,Genero,Editoras_preenchidas,Vendas_America_Norte,Vendas_Uniao_Europeia,Vendas_Japao,Vendas_Globais\n\
                   Tetris,GB,1989,Puzzle,Nintendo,23.2,2.26,4.22,30.26\n";
        let dataset = Dataset::from_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(dataset.records()[0].other_sales, 0.0);
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let dataset = Dataset::from_reader(HEADER.as_bytes(), "inline").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn malformed_number_is_fatal() {
        let csv = format!("{HEADER}Tetris,GB,1989,Puzzle,Nintendo,lots,2.26,4.22,0.58,30.26\n");
        let err = Dataset::from_reader(csv.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Dataset::from_path("/definitely/not/here.csv").unwrap_err();
        match err {
            DatasetError::Io { path, .. } => assert!(path.ends_with("here.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_embedded_asset_is_reported() {
        let err = Dataset::embedded("nope.csv").unwrap_err();
        assert!(matches!(err, DatasetError::MissingAsset { .. }));
    }

    #[test]
    fn bundled_dataset_parses() {
        let dataset = Dataset::embedded("df_limpo.csv").unwrap();
        assert!(!dataset.is_empty());
    }
}
