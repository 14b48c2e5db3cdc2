//! Clean the output directory

use std::fs;

use anyhow::Result;

use crate::Daybrief;

pub fn run(app: &Daybrief) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Deleted: {:?}", app.public_dir);
    } else {
        tracing::debug!("Nothing to clean, {:?} does not exist", app.public_dir);
    }
    Ok(())
}
