//! List data documents or generated pages

use anyhow::Result;

use crate::archive;
use crate::content::DataStore;
use crate::helpers::display_date;
use crate::Daybrief;

pub fn run(app: &Daybrief, content_type: &str) -> Result<()> {
    match content_type {
        "data" | "days" => {
            let store = DataStore::new(&app.data_dir);
            let days = store.list_days();
            println!("Data documents ({}):", days.len());
            for day in days {
                println!("  {}", day);
            }
        }
        "page" | "pages" => {
            let entries = archive::collect_entries(&app.public_dir);
            println!("Generated pages ({}):", entries.len());
            for entry in entries {
                println!("  {}  {}", entry.filename, display_date(entry.date));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: data, page", content_type);
        }
    }
    Ok(())
}
