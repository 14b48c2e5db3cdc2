//! Create a day's data document, prefilled from the sample

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::content::{sample_document, DataStore};
use crate::helpers::date_key;
use crate::Daybrief;

/// Write a prefilled data document for a date. Refuses to overwrite an
/// existing document unless `force` is set.
pub fn run(app: &Daybrief, date: NaiveDate, force: bool) -> Result<PathBuf> {
    let key = date_key(date);
    let store = DataStore::new(&app.data_dir);
    let path = store.day_path(&key);

    if path.exists() && !force {
        anyhow::bail!(
            "Data document {:?} already exists, pass --force to overwrite",
            path
        );
    }

    fs::create_dir_all(&app.data_dir)?;
    let json = serde_json::to_string_pretty(&sample_document(&key))?;
    fs::write(&path, json)?;
    tracing::info!("Created {:?}", path);

    Ok(path)
}
