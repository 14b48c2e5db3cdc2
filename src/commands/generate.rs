//! Generate the briefing page for one day

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;

use crate::content::DataStore;
use crate::error::Error;
use crate::page::PageAssembler;
use crate::Daybrief;

/// Generate the page for a date and, unless `with_index` is false,
/// regenerate the archive index. Returns the written page path.
pub fn run(app: &Daybrief, date: NaiveDate, with_index: bool) -> Result<PathBuf> {
    let start = Instant::now();

    // The template is the one thing a run cannot continue without.
    let template = fs::read_to_string(&app.template_path).map_err(|_| Error::MissingTemplate {
        path: app.template_path.clone(),
    })?;

    let store = DataStore::new(&app.data_dir);
    let page = PageAssembler::new(&app.config).assemble(date, &store, &template);

    fs::create_dir_all(&app.public_dir)?;
    let output_path = app.public_dir.join(&page.filename);
    fs::write(&output_path, &page.html)?;

    if with_index {
        crate::archive::generate_index(app)?;
    }

    tracing::info!(
        "Generated {:?} in {:.2}s",
        output_path,
        start.elapsed().as_secs_f64()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::DAILY_TEMPLATE;
    use std::path::Path;
    use tempfile::tempdir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    fn setup_site(dir: &Path) -> Daybrief {
        let app = Daybrief::new(dir).unwrap();
        fs::create_dir_all(dir.join("templates")).unwrap();
        fs::write(dir.join("templates/daily.html"), DAILY_TEMPLATE).unwrap();
        app
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let dir = tempdir().unwrap();
        let app = Daybrief::new(dir.path()).unwrap();

        let err = run(&app, day(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingTemplate { .. })
        ));
        assert!(!dir.path().join("public/2026-08-22.html").exists());
    }

    #[test]
    fn test_generates_page_from_data_document() {
        let dir = tempdir().unwrap();
        let app = setup_site(dir.path());

        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            dir.path().join("data/2026-08-22.json"),
            r#"{
                "date": "2026-08-22",
                "insights": [{
                    "title": "A",
                    "author": "@x",
                    "date": "d1",
                    "summary": "s1",
                    "link": "https://e.com"
                }]
            }"#,
        )
        .unwrap();

        let path = run(&app, day(), false).unwrap();
        assert_eq!(path, dir.path().join("public/2026-08-22.html"));

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<h3>1. A</h3>"));
        assert!(html.contains("2026年8月22日 星期六"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_missing_data_falls_back_to_sample() {
        let dir = tempdir().unwrap();
        let app = setup_site(dir.path());

        let path = run(&app, day(), false).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        // The sample document shows through
        assert!(html.contains("tensor-compass"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_corrupt_data_falls_back_to_sample() {
        let dir = tempdir().unwrap();
        let app = setup_site(dir.path());

        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/2026-08-22.json"), "{not json").unwrap();

        let path = run(&app, day(), false).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("tensor-compass"));
    }

    #[test]
    fn test_regenerates_index_alongside_page() {
        let dir = tempdir().unwrap();
        let app = setup_site(dir.path());

        run(&app, day(), true).unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(index.contains("2026-08-22.html"));
        assert!(index.contains("已归档 1 期"));
    }
}
