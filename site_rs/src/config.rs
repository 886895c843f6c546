//! Site configuration file support.
//!
//! Loads `site.toml`. Unlike optional tool configs, a missing or malformed
//! site config is an error: the homepage cannot be built without a title
//! and tagline, and a silent default would ship a blank banner.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use homepage_leptos::{FeatureCatalog, SiteContext};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used as the page `<title>`
    pub title: Option<String>,
    /// Tagline shown in the hero banner
    pub tagline: Option<String>,
    /// Page meta description
    pub description: Option<String>,
    /// Prefix for links and assets, e.g. `/libriscv/`
    pub base_url: Option<String>,
    /// Directory holding static assets, relative to the config file
    pub static_dir: Option<PathBuf>,
    /// Replaces the built-in feature list when present
    pub features: Option<FeatureCatalog>,
    /// Directory the config was loaded from
    #[serde(skip)]
    pub root: PathBuf,
}

impl SiteConfig {
    /// Load config from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read site config {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("failed to parse site config {}", path.display()))?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override the base URL (CLI `--base-url`).
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    /// The catalog to render: the configured one, or the built-in libriscv list.
    pub fn catalog(&self) -> FeatureCatalog {
        self.features.clone().unwrap_or_else(FeatureCatalog::libriscv)
    }

    /// Absolute-or-relative location of the static asset directory.
    pub fn static_root(&self) -> Option<PathBuf> {
        self.static_dir.as_ref().map(|dir| self.root.join(dir))
    }
}

impl SiteContext for SiteConfig {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or("/")
    }
}
