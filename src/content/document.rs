//! Day document model

use serde::{Deserialize, Serialize};

/// One day's briefing data, as stored in `{data_dir}/{YYYY-MM-DD}.json`.
///
/// Every category is optional in the JSON document; an absent category
/// deserializes to an empty list, renders to an empty fragment and counts
/// as zero. Field names follow the JSON convention of the data files
/// (`xPosts`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsDocument {
    /// The day being reported on, as a `YYYY-MM-DD` key.
    pub date: String,

    /// Curated highlights of the day.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<HighlightItem>,

    /// Newsletter issues worth reading.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub newsletters: Vec<NewsletterItem>,

    /// Research papers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub papers: Vec<PaperItem>,

    /// Notable posts from X, same shape as insights.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x_posts: Vec<HighlightItem>,

    /// Discord community digests.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discord: Vec<GenericItem>,

    /// Trending GitHub repositories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub github: Vec<CardItem>,

    /// Hacker News threads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hn: Vec<GenericItem>,

    /// Reddit threads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reddit: Vec<GenericItem>,

    /// New tools and products.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<CardItem>,

    /// Agent-engineering news.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agent: Vec<GenericItem>,

    /// Silicon Valley news.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub valley: Vec<GenericItem>,

    /// China AI news.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub china: Vec<GenericItem>,
}

/// An insight or X-post: the two categories rendered with the priority
/// marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightItem {
    pub title: String,
    /// Author handle or name shown on the meta line.
    pub author: String,
    /// Display-ready publication time, e.g. `今天 08:00`.
    pub date: String,
    pub summary: String,
    /// Path to a captured screenshot, relative to the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A newsletter issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterItem {
    pub title: String,
    /// Publication the issue came from.
    pub source: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A research paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperItem {
    pub title: String,
    /// Author list as one display string.
    pub authors: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A repository or tool card (github, tools).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardItem {
    pub name: String,
    pub description: String,
    /// Star count as shown upstream, e.g. `3.2k`; github only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// An item of the generic categories (discord, hn, reddit, agent, valley,
/// china).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericItem {
    pub title: String,
    pub summary: String,
    /// Community or publication label; preferred over `author` on the
    /// meta line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
