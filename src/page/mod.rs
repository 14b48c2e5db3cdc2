//! Page assembly
//!
//! Orchestrates one page for one date: resolves the day's document
//! (falling back to the sample when the real one is missing or bad),
//! builds the full placeholder table (date, time, screenshots link,
//! then a count and a fragment per category) and substitutes it into
//! the template.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::config::Config;
use crate::content::{sample_document, DataStore, NewsDocument};
use crate::helpers::{date_key, display_date};
use crate::render::Category;
use crate::templates::substitute;

pub const DATE_TOKEN: &str = "{{DATE}}";
pub const TIME_TOKEN: &str = "{{TIME}}";
pub const SCREENSHOTS_LINK_TOKEN: &str = "{{SCREENSHOTS_LINK}}";

/// A finished page: final HTML plus the file name it should be
/// written under.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub filename: String,
}

/// Assembles a day's briefing page from a document and a template.
pub struct PageAssembler<'a> {
    config: &'a Config,
}

impl<'a> PageAssembler<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Produce the finished page for a date, resolving the day's
    /// document through the store. A day without usable data still
    /// produces a page, from the sample document.
    pub fn assemble(&self, date: NaiveDate, store: &DataStore, template: &str) -> RenderedPage {
        let key = date_key(date);
        let doc = store.load_day(&key).unwrap_or_else(|| {
            tracing::warn!(
                "No usable data for {}, falling back to the sample document",
                key
            );
            sample_document(&key)
        });

        let total: usize = Category::ALL.iter().map(|c| c.count(&doc)).sum();
        tracing::info!("Loaded {} items for {}", total, key);

        self.assemble_document(date, &doc, template)
    }

    /// Produce the finished page for an already-resolved document.
    /// Every placeholder occurrence in the template is replaced,
    /// including repeated ones.
    pub fn assemble_document(
        &self,
        date: NaiveDate,
        doc: &NewsDocument,
        template: &str,
    ) -> RenderedPage {
        let key = date_key(date);
        let values = self.substitutions(date, &key, doc);
        RenderedPage {
            html: substitute(template, &values),
            filename: format!("{}.html", key),
        }
    }

    /// The ordered placeholder table for one day.
    fn substitutions(
        &self,
        date: NaiveDate,
        key: &str,
        doc: &NewsDocument,
    ) -> IndexMap<&'static str, String> {
        let mut values = IndexMap::new();
        values.insert(DATE_TOKEN, display_date(date));
        values.insert(TIME_TOKEN, self.config.display_time.clone());
        values.insert(SCREENSHOTS_LINK_TOKEN, self.screenshots_link(key));
        for category in Category::ALL {
            values.insert(category.count_token(), category.count(doc).to_string());
            values.insert(category.html_token(), category.render(doc));
        }
        values
    }

    fn screenshots_link(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.config.screenshots_base_url.trim_end_matches('/'),
            key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HighlightItem;
    use crate::templates::DAILY_TEMPLATE;
    use std::fs;
    use tempfile::tempdir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    }

    fn assemble(doc: &NewsDocument, template: &str) -> RenderedPage {
        let config = Config::default();
        PageAssembler::new(&config).assemble_document(day(), doc, template)
    }

    #[test]
    fn test_filename_uses_date_key() {
        let page = assemble(&NewsDocument::default(), "x");
        assert_eq!(page.filename, "2026-08-22.html");
    }

    #[test]
    fn test_no_placeholder_survives_the_full_template() {
        let page = assemble(&sample_document("2026-08-22"), DAILY_TEMPLATE);
        assert!(!page.html.contains("{{"), "unreplaced token in: {}", page.html);
        assert!(!page.html.contains("}}"));
    }

    #[test]
    fn test_empty_document_fills_every_count_with_zero() {
        let page = assemble(&NewsDocument::default(), DAILY_TEMPLATE);
        assert!(!page.html.contains("{{"));
        assert!(page.html.contains("<span class=\"count\">0</span>"));
    }

    #[test]
    fn test_repeated_occurrences_are_all_replaced() {
        let template = "{{DATE}} / {{DATE}} / {{DATE}}";
        let page = assemble(&NewsDocument::default(), template);
        assert_eq!(
            page.html,
            "2026年8月22日 星期六 / 2026年8月22日 星期六 / 2026年8月22日 星期六"
        );
    }

    #[test]
    fn test_time_and_screenshots_link() {
        let template = "{{TIME}}|{{SCREENSHOTS_LINK}}";
        let page = assemble(&NewsDocument::default(), template);
        assert_eq!(
            page.html,
            "上午 8:00|https://screenshots.example.com/daily/2026-08-22"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let mut config = Config::default();
        config.screenshots_base_url = "https://shots.example.com/".to_string();
        let page = PageAssembler::new(&config).assemble_document(
            day(),
            &NewsDocument::default(),
            "{{SCREENSHOTS_LINK}}",
        );
        assert_eq!(page.html, "https://shots.example.com/2026-08-22");
    }

    #[test]
    fn test_counts_and_fragments_come_from_the_document() {
        let mut doc = NewsDocument::default();
        doc.insights.push(HighlightItem {
            title: "A".to_string(),
            author: "@x".to_string(),
            date: "d1".to_string(),
            summary: "s1".to_string(),
            screenshot: None,
            link: Some("https://e.com".to_string()),
        });

        let template = "{{INSIGHT_COUNT}}\n{{INSIGHTS_HTML}}\n{{PAPER_COUNT}}";
        let page = assemble(&doc, template);
        assert!(page.html.starts_with("1\n"));
        assert!(page.html.contains("<h3>1. A</h3>"));
        assert!(page.html.contains("@x"));
        assert!(page.html.ends_with("\n0"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let doc = sample_document("2026-08-22");
        let first = assemble(&doc, DAILY_TEMPLATE);
        let second = assemble(&doc, DAILY_TEMPLATE);
        assert_eq!(first.html, second.html);
        assert_eq!(first.filename, second.filename);
    }

    #[test]
    fn test_assemble_uses_the_stored_document() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("2026-08-22.json"),
            r#"{"date": "2026-08-22", "hn": [{"title": "真实数据", "summary": "s"}]}"#,
        )
        .unwrap();

        let config = Config::default();
        let store = DataStore::new(dir.path());
        let page = PageAssembler::new(&config).assemble(day(), &store, "{{HN_HTML}}");
        assert!(page.html.contains("真实数据"));
        assert!(!page.html.contains("tensor-compass"));
    }

    #[test]
    fn test_assemble_falls_back_to_sample() {
        let dir = tempdir().unwrap();
        let config = Config::default();
        let store = DataStore::new(dir.path());

        let page = PageAssembler::new(&config).assemble(day(), &store, DAILY_TEMPLATE);
        assert!(page.html.contains("tensor-compass"));
        assert!(!page.html.contains("{{"));
    }
}
