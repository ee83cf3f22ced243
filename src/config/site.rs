//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::AgentIdentity;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // URL
    pub url: String,
    pub root: String,
    pub language: String,

    // Directory
    pub public_dir: String,
    /// Copied verbatim into the public directory (images, css, js)
    pub static_dir: String,

    /// Copy deck overriding the built-in one, relative to the site directory
    pub copy: Option<String>,

    /// The agent every derived field is built from
    pub agent: AgentIdentity,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://example.com".to_string(),
            root: "/".to_string(),
            language: "en".to_string(),

            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            copy: None,

            agent: AgentIdentity::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}
