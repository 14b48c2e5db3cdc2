//! Initialize a new briefing site

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::templates::DAILY_TEMPLATE;

const DEFAULT_CONFIG: &str = r#"# daybrief configuration

# Site
title: AI 简报
description: 每日 AI 资讯精选，覆盖行业洞察、论文、开源项目与社区讨论

# Directories
data_dir: data
public_dir: public
template_path: templates/daily.html

# Page
screenshots_base_url: https://screenshots.example.com/daily
display_time: 上午 8:00
timezone: Asia/Shanghai
"#;

/// Scaffold a briefing site: the directory layout, a default config.yml
/// and a copy of the built-in daily template.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("data"))?;
    fs::create_dir_all(target_dir.join("public"))?;
    fs::create_dir_all(target_dir.join("templates"))?;

    fs::write(target_dir.join("config.yml"), DEFAULT_CONFIG)?;
    fs::write(target_dir.join("templates/daily.html"), DAILY_TEMPLATE)?;

    tracing::info!("Initialized briefing site in {:?}", target_dir);
    Ok(())
}
