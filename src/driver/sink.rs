//! Record sinks

use super::error::DriverError;
use super::PageRecords;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a page's records came from and where they are filed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provenance {
    /// PDF page number
    pub page: u32,
    /// Source id, e.g. `FUCR106`
    pub source: String,
    /// Folder path under the asset directory
    pub folders: Vec<String>,
}

/// Destination for parsed records
pub trait RecordSink {
    /// Persist `records` under `asset_dir`, returning where they went
    fn persist(
        &self,
        provenance: &Provenance,
        records: &PageRecords,
        asset_dir: &Path,
    ) -> Result<PathBuf, DriverError>;
}

/// Writes `<asset_dir>/<folders...>/<source>.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSink;

#[derive(Serialize)]
struct JsonDocument<'a> {
    source: &'a str,
    page: u32,
    records: &'a PageRecords,
}

impl JsonSink {
    /// Path a page's records are written to
    pub fn path_for(provenance: &Provenance, asset_dir: &Path) -> PathBuf {
        let mut path = asset_dir.to_path_buf();
        path.extend(&provenance.folders);
        path.push(format!("{}.json", provenance.source));
        path
    }
}

impl RecordSink for JsonSink {
    fn persist(
        &self,
        provenance: &Provenance,
        records: &PageRecords,
        asset_dir: &Path,
    ) -> Result<PathBuf, DriverError> {
        let path = Self::path_for(provenance, asset_dir);
        let sink_error = |message: String| DriverError::Sink {
            path: path.display().to_string(),
            message,
        };
        let document = JsonDocument {
            source: &provenance.source,
            page: provenance.page,
            records,
        };
        let body = serde_json::to_string_pretty(&document).map_err(|e| sink_error(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| sink_error(e.to_string()))?;
        }
        fs::write(&path, body).map_err(|e| sink_error(e.to_string()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let provenance = Provenance {
            page: 136,
            source: "FUCR134".to_string(),
            folders: vec!["Equipment".to_string(), "Armors".to_string(), "Basic".to_string()],
        };
        assert_eq!(
            JsonSink::path_for(&provenance, Path::new("/assets")),
            PathBuf::from("/assets/Equipment/Armors/Basic/FUCR134.json")
        );
    }
}
