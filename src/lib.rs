//! daybrief: a static page generator for daily AI news briefings
//!
//! This crate renders one HTML page per day from a JSON news document
//! and a shared placeholder template, and maintains an archive index
//! linking to every generated day.

pub mod archive;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod page;
pub mod render;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main daybrief application
#[derive(Clone)]
pub struct Daybrief {
    /// Site configuration
    pub config: config::Config,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding one JSON document per day
    pub data_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Daily page template path
    pub template_path: std::path::PathBuf,
}

impl Daybrief {
    /// Create a new Daybrief instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.yml");

        let config = if config_path.exists() {
            config::Config::load(&config_path)?
        } else {
            config::Config::default()
        };

        let data_dir = base_dir.join(&config.data_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let template_path = base_dir.join(&config.template_path);

        Ok(Self {
            config,
            base_dir,
            data_dir,
            public_dir,
            template_path,
        })
    }

    /// Generate the page for a date, along with the archive index
    pub fn generate(&self, date: chrono::NaiveDate) -> Result<std::path::PathBuf> {
        commands::generate::run(self, date, true)
    }

    /// Regenerate the archive index page
    pub fn index(&self) -> Result<std::path::PathBuf> {
        archive::generate_index(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
