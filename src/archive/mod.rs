//! Archive index
//!
//! Scans the output directory for generated briefing pages and renders
//! the index page linking to all of them, grouped by month.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use crate::config::Config;
use crate::helpers::{display_date, today_in};
use crate::templates::{substitute, INDEX_TEMPLATE};
use crate::Daybrief;

lazy_static! {
    static ref DAY_PAGE: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})\.html$").unwrap();
}

/// One generated briefing page found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub date: NaiveDate,
    pub filename: String,
}

/// Collect briefing pages from the output directory, newest first.
/// Files that do not look like a day page are ignored.
pub fn collect_entries(public_dir: &Path) -> Vec<ArchiveEntry> {
    if !public_dir.exists() {
        return Vec::new();
    }

    let mut entries: Vec<ArchiveEntry> = WalkDir::new(public_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            let caps = DAY_PAGE.captures(name)?;
            let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
            Some(ArchiveEntry {
                date,
                filename: name.to_string(),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Render the index page for a set of entries.
///
/// `updated_at` is passed in by the caller so rendering itself is
/// deterministic.
pub fn render_index(config: &Config, entries: &[ArchiveEntry], updated_at: &str) -> String {
    let mut values = IndexMap::new();
    values.insert("{{TITLE}}", config.title.clone());
    values.insert("{{DESCRIPTION}}", config.description.clone());
    values.insert("{{TOTAL_COUNT}}", entries.len().to_string());
    values.insert("{{ARCHIVE_SECTIONS}}", archive_sections(entries));
    values.insert("{{UPDATED_AT}}", updated_at.to_string());
    substitute(INDEX_TEMPLATE, &values)
}

/// Month sections, newest month first, one link per day.
fn archive_sections(entries: &[ArchiveEntry]) -> String {
    let mut months: BTreeMap<(i32, u32), Vec<&ArchiveEntry>> = BTreeMap::new();
    for entry in entries {
        months
            .entry((entry.date.year(), entry.date.month()))
            .or_default()
            .push(entry);
    }

    let mut html = String::new();
    for ((year, month), mut month_entries) in months.into_iter().rev() {
        month_entries.sort_by(|a, b| b.date.cmp(&a.date));

        html.push_str("<section class=\"archive-month\">\n");
        html.push_str(&format!("  <h2>{}年{}月</h2>\n", year, month));
        html.push_str("  <ul class=\"archive-list\">\n");
        for entry in month_entries {
            html.push_str(&format!(
                "    <li><a href=\"{}\">{}</a></li>\n",
                entry.filename,
                display_date(entry.date)
            ));
        }
        html.push_str("  </ul>\n");
        html.push_str("</section>\n");
    }
    html
}

/// Scan the output directory, render the index and write index.html.
pub fn generate_index(app: &Daybrief) -> Result<PathBuf> {
    let entries = collect_entries(&app.public_dir);
    let updated_at = display_date(today_in(app.config.timezone()));
    let html = render_index(&app.config, &entries, &updated_at);

    fs::create_dir_all(&app.public_dir)?;
    let output_path = app.public_dir.join("index.html");
    fs::write(&output_path, html)?;
    tracing::info!("Generated archive index with {} entries", entries.len());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(y: i32, m: u32, d: u32) -> ArchiveEntry {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        ArchiveEntry {
            date,
            filename: format!("{}.html", date.format("%Y-%m-%d")),
        }
    }

    #[test]
    fn test_collect_entries_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(collect_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_collect_entries_missing_dir() {
        assert!(collect_entries(Path::new("/nonexistent/public")).is_empty());
    }

    #[test]
    fn test_collect_entries_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("2026-08-21.html"), "x").unwrap();
        fs::write(dir.path().join("2026-08-22.html"), "x").unwrap();
        fs::write(dir.path().join("index.html"), "x").unwrap();
        fs::write(dir.path().join("2026-13-99.html"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let entries = collect_entries(dir.path());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].filename, "2026-08-22.html");
        assert_eq!(entries[1].filename, "2026-08-21.html");
    }

    #[test]
    fn test_archive_sections_group_by_month_newest_first() {
        let entries = vec![entry(2026, 8, 22), entry(2026, 8, 1), entry(2026, 7, 30)];
        let html = archive_sections(&entries);

        let august = html.find("2026年8月").unwrap();
        let july = html.find("2026年7月").unwrap();
        assert!(august < july);

        let day22 = html.find("2026-08-22.html").unwrap();
        let day01 = html.find("2026-08-01.html").unwrap();
        assert!(day22 < day01);

        assert!(html.contains("<a href=\"2026-07-30.html\">2026年7月30日 星期四</a>"));
        assert_eq!(html.matches("<section class=\"archive-month\">").count(), 2);
    }

    #[test]
    fn test_render_index_fills_every_token() {
        let config = Config::default();
        let entries = vec![entry(2026, 8, 22)];
        let html = render_index(&config, &entries, "2026年8月22日 星期六");

        assert!(!html.contains("{{"));
        assert!(html.contains("AI 简报"));
        assert!(html.contains("已归档 1 期"));
        assert!(html.contains("2026-08-22.html"));
        assert!(html.contains("最近更新：2026年8月22日 星期六"));
    }

    #[test]
    fn test_render_index_with_no_entries() {
        let config = Config::default();
        let html = render_index(&config, &[], "2026年8月22日 星期六");
        assert!(!html.contains("{{"));
        assert!(html.contains("已归档 0 期"));
    }
}
