//! Section renderer - turns category item sequences into HTML fragments
//!
//! Pure string construction, no I/O. Every item renders to one
//! individually wrapped and closed block; a category fragment is the
//! concatenation of its blocks in input order, numbered from 1 per
//! category. Absent optional fields drop the whole sub-element rather
//! than emitting an empty tag or attribute.

use crate::content::{
    CardItem, GenericItem, HighlightItem, NewsDocument, NewsletterItem, PaperItem,
};
use crate::helpers::{anchor, html_escape, image};

const DEFAULT_SOURCE_LABEL: &str = "来源";
const DEFAULT_LINK_TEXT: &str = "查看原文 →";

/// The fixed set of content categories, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Insights,
    Newsletters,
    Papers,
    XPosts,
    Discord,
    Github,
    Hn,
    Reddit,
    Tools,
    Agent,
    Valley,
    China,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Insights,
        Category::Newsletters,
        Category::Papers,
        Category::XPosts,
        Category::Discord,
        Category::Github,
        Category::Hn,
        Category::Reddit,
        Category::Tools,
        Category::Agent,
        Category::Valley,
        Category::China,
    ];

    /// Template token replaced with the category's item count.
    pub fn count_token(self) -> &'static str {
        match self {
            Category::Insights => "{{INSIGHT_COUNT}}",
            Category::Newsletters => "{{NEWSLETTER_COUNT}}",
            Category::Papers => "{{PAPER_COUNT}}",
            Category::XPosts => "{{XPOST_COUNT}}",
            Category::Discord => "{{DISCORD_COUNT}}",
            Category::Github => "{{GITHUB_COUNT}}",
            Category::Hn => "{{HN_COUNT}}",
            Category::Reddit => "{{REDDIT_COUNT}}",
            Category::Tools => "{{TOOL_COUNT}}",
            Category::Agent => "{{AGENT_COUNT}}",
            Category::Valley => "{{VALLEY_COUNT}}",
            Category::China => "{{CHINA_COUNT}}",
        }
    }

    /// Template token replaced with the category's HTML fragment.
    pub fn html_token(self) -> &'static str {
        match self {
            Category::Insights => "{{INSIGHTS_HTML}}",
            Category::Newsletters => "{{NEWSLETTERS_HTML}}",
            Category::Papers => "{{PAPERS_HTML}}",
            Category::XPosts => "{{XPOSTS_HTML}}",
            Category::Discord => "{{DISCORD_HTML}}",
            Category::Github => "{{GITHUB_HTML}}",
            Category::Hn => "{{HN_HTML}}",
            Category::Reddit => "{{REDDIT_HTML}}",
            Category::Tools => "{{TOOLS_HTML}}",
            Category::Agent => "{{AGENT_HTML}}",
            Category::Valley => "{{VALLEY_HTML}}",
            Category::China => "{{CHINA_HTML}}",
        }
    }

    /// Number of items the document carries for this category.
    pub fn count(self, doc: &NewsDocument) -> usize {
        match self {
            Category::Insights => doc.insights.len(),
            Category::Newsletters => doc.newsletters.len(),
            Category::Papers => doc.papers.len(),
            Category::XPosts => doc.x_posts.len(),
            Category::Discord => doc.discord.len(),
            Category::Github => doc.github.len(),
            Category::Hn => doc.hn.len(),
            Category::Reddit => doc.reddit.len(),
            Category::Tools => doc.tools.len(),
            Category::Agent => doc.agent.len(),
            Category::Valley => doc.valley.len(),
            Category::China => doc.china.len(),
        }
    }

    /// Render the category's items from a document to one HTML fragment.
    pub fn render(self, doc: &NewsDocument) -> String {
        match self {
            Category::Insights => render_highlights(&doc.insights, "查看原文 →"),
            Category::XPosts => render_highlights(&doc.x_posts, "查看推文 →"),
            Category::Newsletters => render_newsletters(&doc.newsletters),
            Category::Papers => render_papers(&doc.papers),
            Category::Github => render_repo_cards(&doc.github),
            Category::Tools => render_tool_cards(&doc.tools),
            Category::Discord => render_generic(&doc.discord, self.generic_style()),
            Category::Hn => render_generic(&doc.hn, self.generic_style()),
            Category::Reddit => render_generic(&doc.reddit, self.generic_style()),
            Category::Agent => render_generic(&doc.agent, self.generic_style()),
            Category::Valley => render_generic(&doc.valley, self.generic_style()),
            Category::China => render_generic(&doc.china, self.generic_style()),
        }
    }

    /// Meta-label and link-text overrides for the generic categories.
    fn generic_style(self) -> GenericStyle {
        match self {
            Category::Discord => GenericStyle {
                source_label: Some("频道"),
                link_text: Some("查看讨论 →"),
            },
            Category::Hn => GenericStyle {
                source_label: None,
                link_text: Some("查看讨论 →"),
            },
            Category::Reddit => GenericStyle {
                source_label: Some("版块"),
                link_text: Some("查看讨论 →"),
            },
            _ => GenericStyle::default(),
        }
    }
}

/// Optional per-category overrides for the generic renderer; `None`
/// falls back to the fixed defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericStyle {
    pub source_label: Option<&'static str>,
    pub link_text: Option<&'static str>,
}

/// Render insights or X posts: the priority categories.
pub fn render_highlights(items: &[HighlightItem], link_text: &str) -> String {
    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"news-item priority\">\n");
        push_heading(&mut out, pos, &item.title);
        push_meta(
            &mut out,
            &format!("{} · {}", html_escape(&item.author), html_escape(&item.date)),
        );
        push_summary(&mut out, &item.summary);
        if let Some(shot) = non_empty(&item.screenshot) {
            push_line(&mut out, &image(shot, &item.title, "screenshot"));
        }
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, link_text, "source-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Render newsletter issues.
pub fn render_newsletters(items: &[NewsletterItem]) -> String {
    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"news-item\">\n");
        push_heading(&mut out, pos, &item.title);
        push_meta(&mut out, &format!("来源：{}", html_escape(&item.source)));
        push_summary(&mut out, &item.summary);
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, "阅读原文 →", "source-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Render research papers.
pub fn render_papers(items: &[PaperItem]) -> String {
    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"news-item\">\n");
        push_heading(&mut out, pos, &item.title);
        push_meta(&mut out, &format!("作者：{}", html_escape(&item.authors)));
        push_summary(&mut out, &item.summary);
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, "查看论文 →", "source-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Render trending repository cards, star count included.
pub fn render_repo_cards(items: &[CardItem]) -> String {
    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"repo-card\">\n");
        push_heading(&mut out, pos, &item.name);
        push_line(
            &mut out,
            &format!(
                "<p class=\"description\">{}</p>",
                html_escape(&item.description)
            ),
        );
        push_line(
            &mut out,
            &format!(
                "<span class=\"stars\">⭐ {}</span>",
                html_escape(item.stars.as_deref().unwrap_or_default())
            ),
        );
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, "查看项目 →", "repo-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Render tool cards.
pub fn render_tool_cards(items: &[CardItem]) -> String {
    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"tool-card\">\n");
        push_heading(&mut out, pos, &item.name);
        push_line(
            &mut out,
            &format!(
                "<p class=\"description\">{}</p>",
                html_escape(&item.description)
            ),
        );
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, "访问工具 →", "tool-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Render a generic category (discord, hn, reddit, agent, valley, china).
///
/// The meta line shows `{label}：{source}`, falling back to the item's
/// author; it is omitted entirely when the item carries neither.
pub fn render_generic(items: &[GenericItem], style: GenericStyle) -> String {
    let label = style.source_label.unwrap_or(DEFAULT_SOURCE_LABEL);
    let link_text = style.link_text.unwrap_or(DEFAULT_LINK_TEXT);

    blocks(items, |pos, item| {
        let mut out = String::new();
        out.push_str("<div class=\"news-item\">\n");
        push_heading(&mut out, pos, &item.title);
        if let Some(value) = non_empty(&item.source).or_else(|| non_empty(&item.author)) {
            push_meta(&mut out, &format!("{}：{}", label, html_escape(value)));
        }
        push_summary(&mut out, &item.summary);
        if let Some(link) = non_empty(&item.link) {
            push_line(&mut out, &anchor(link, link_text, "source-link"));
        }
        out.push_str("</div>\n");
        out
    })
}

/// Concatenate one wrapped block per item, numbered from 1 in input
/// order. Joining blocks with markup separators instead corrupts the
/// output as soon as there are two items, so each block carries its own
/// wrapper.
fn blocks<T>(items: &[T], block: impl Fn(usize, &T) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| block(i + 1, item))
        .collect()
}

fn push_heading(out: &mut String, pos: usize, title: &str) {
    out.push_str(&format!("  <h3>{}. {}</h3>\n", pos, html_escape(title)));
}

fn push_meta(out: &mut String, meta: &str) {
    out.push_str(&format!("  <div class=\"meta\">{}</div>\n", meta));
}

fn push_summary(out: &mut String, summary: &str) {
    out.push_str(&format!(
        "  <p class=\"summary\">{}</p>\n",
        html_escape(summary)
    ));
}

fn push_line(out: &mut String, element: &str) {
    out.push_str("  ");
    out.push_str(element);
    out.push('\n');
}

/// JSON data written by hand or by upstream pipelines sometimes carries
/// `""` where a field is meant to be absent; treat both the same.
fn non_empty(opt: &Option<String>) -> Option<&str> {
    opt.as_deref().filter(|s| !s.is_empty())
}
