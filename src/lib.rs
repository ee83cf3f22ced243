//! realtor-site: a static site generator for a single real-estate agent
//!
//! Every piece of site copy is derived from one agent identity record and a
//! YAML copy deck. The resolved [`content::ContentDocument`] is validated as a
//! whole at load time and then rendered into static HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod views;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use content::ContentDocument;
use generator::RenderReport;

/// A site directory and its configuration
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static asset directory
    pub static_dir: PathBuf,
}

impl Site {
    /// Open the site in a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            static_dir,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    /// The copy deck override, if the site declares one
    pub fn copy_path(&self) -> Option<PathBuf> {
        self.config.copy.as_ref().map(|p| self.base_dir.join(p))
    }

    /// Resolve and validate the content document
    pub fn load_content(&self) -> Result<ContentDocument> {
        let agent = self.config.agent.clone();
        let document = match self.copy_path() {
            Some(path) => {
                let copy = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read copy deck {:?}", path))?;
                content::load_with_copy(agent, &copy)
            }
            None => content::load(agent),
        };
        document.context("Invalid site content")
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<RenderReport> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
