//! Data store - loads day documents from the data directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::NewsDocument;
use crate::helpers::parse_date_key;

/// Reads day documents from `{data_dir}/{YYYY-MM-DD}.json`.
///
/// A missing or unparsable document is not an error at this layer: the
/// lookup yields `None` and the caller substitutes the sample document.
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Create a store over a data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for a date key.
    pub fn day_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Load the document for a date key.
    ///
    /// Returns `None` when the file is absent, unreadable or fails to
    /// deserialize; the failure is logged and absorbed.
    pub fn load_day(&self, key: &str) -> Option<NewsDocument> {
        let path = self.day_path(key);
        if !path.exists() {
            tracing::debug!("No data document at {:?}", path);
            return None;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        }
    }

    /// List the date keys of all well-named day documents, oldest first.
    pub fn list_days(&self) -> Vec<String> {
        if !self.data_dir.exists() {
            return Vec::new();
        }

        let mut days: Vec<String> = WalkDir::new(&self.data_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| {
                let path = e.path();
                if path.extension().and_then(|x| x.to_str()) != Some("json") {
                    return None;
                }
                let stem = path.file_stem()?.to_str()?;
                parse_date_key(stem).ok()?;
                Some(stem.to_string())
            })
            .collect();

        days.sort();
        days
    }
}
