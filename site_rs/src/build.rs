//! Homepage build pipeline: render, write `index.html`, copy assets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use homepage_leptos::render_landing_page;
use tracing::info;

use crate::assets::{StaticAssets, page_assets};
use crate::config::SiteConfig;

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Path of the written page
    pub index: PathBuf,
    /// Size of the page in bytes
    pub bytes: usize,
    /// Number of feature cards on the page
    pub features: usize,
    /// Assets copied into the output directory
    pub copied: usize,
    /// Referenced assets that were not found
    pub missing: usize,
}

/// Render the homepage for `config` without touching the filesystem.
pub fn render_page(config: &SiteConfig) -> Result<String> {
    let catalog = config.catalog();
    let assets = StaticAssets::from_config(config);
    render_landing_page(config, &catalog, &assets).context("site configuration is incomplete")
}

/// Render the homepage into `out_dir` and copy the assets it references.
pub fn build_site(config: &SiteConfig, out_dir: &Path) -> Result<BuildReport> {
    let catalog = config.catalog();
    let html = render_page(config)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output dir {}", out_dir.display()))?;
    let index = out_dir.join(INDEX_FILE);
    std::fs::write(&index, &html)
        .with_context(|| format!("failed to write {}", index.display()))?;
    info!("wrote {} ({} bytes)", index.display(), html.len());

    let copy = StaticAssets::from_config(config).copy_into(&page_assets(&catalog), out_dir)?;
    info!(
        "assets: {} copied, {} missing",
        copy.copied.len(),
        copy.missing.len()
    );

    Ok(BuildReport {
        index,
        bytes: html.len(),
        features: catalog.len(),
        copied: copy.copied.len(),
        missing: copy.missing.len(),
    })
}
