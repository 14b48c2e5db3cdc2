//! Site configuration loaded from config.yml

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a briefing site.
///
/// Every field has a default; a missing or empty config.yml yields a
/// fully usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title shown on the archive index
    pub title: String,
    /// Tagline under the index title
    pub description: String,
    /// Directory holding the day documents, relative to the base directory
    pub data_dir: String,
    /// Output directory for generated pages
    pub public_dir: String,
    /// Daily page template, relative to the base directory
    pub template_path: String,
    /// Base URL joined with the date key to form the screenshots link
    pub screenshots_base_url: String,
    /// Fixed update time shown in the page header
    pub display_time: String,
    /// IANA timezone name used to resolve "today"
    pub timezone: String,
    /// Any additional configuration fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "AI 简报".to_string(),
            description: "每日 AI 资讯精选，覆盖行业洞察、论文、开源项目与社区讨论".to_string(),
            data_dir: "data".to_string(),
            public_dir: "public".to_string(),
            template_path: "templates/daily.html".to_string(),
            screenshots_base_url: "https://screenshots.example.com/daily".to_string(),
            display_time: "上午 8:00".to_string(),
            timezone: "Asia/Shanghai".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Timezone used to resolve the current date. Unknown names fall
    /// back to the default so generation never stops over a typo.
    pub fn timezone(&self) -> Tz {
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone '{}', using Asia/Shanghai", self.timezone);
            chrono_tz::Asia::Shanghai
        })
    }
}
