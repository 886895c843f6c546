//! Static asset resolution and copying.
//!
//! References such as `img/libriscv.gif` are served from beneath the site
//! base URL. During a build the referenced files are copied from the
//! configured static directory into the output directory. A missing file
//! is logged and left to the browser; the page still builds. A reference
//! that would leave the static or output directory is never copied.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use homepage_leptos::context::join_url;
use homepage_leptos::components::DEFAULT_ANIMATION;
use homepage_leptos::{AssetRef, AssetResolver, FeatureCatalog, SiteContext};
use tracing::{debug, warn};

use crate::config::SiteConfig;

/// Resolves assets beneath the base URL and knows where their sources live.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    base_url: String,
    static_dir: Option<PathBuf>,
}

/// Outcome of [`StaticAssets::copy_into`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination paths written
    pub copied: Vec<PathBuf>,
    /// References whose source file was not found or that escape the
    /// static directory
    pub missing: Vec<AssetRef>,
}

impl StaticAssets {
    /// Resolver for `base_url`, copying from `static_dir` when given.
    pub fn new(base_url: impl Into<String>, static_dir: Option<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            static_dir,
        }
    }

    /// Resolver matching a loaded site config.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(SiteContext::base_url(config), config.static_root())
    }

    /// Where the source file of `asset` would be, if it is a local reference
    /// that stays inside the static directory.
    pub fn source_path(&self, asset: &AssetRef) -> Option<PathBuf> {
        let relative = local_path(asset.as_str())?;
        self.static_dir.as_ref().map(|dir| dir.join(relative))
    }

    /// Copy every local asset in `assets` into `out_dir`, keeping relative paths.
    pub fn copy_into(&self, assets: &[AssetRef], out_dir: &Path) -> Result<CopyReport> {
        let mut report = CopyReport::default();
        if self.static_dir.is_none() {
            debug!("no static_dir configured, skipping asset copy");
            return Ok(report);
        }

        for asset in assets {
            if is_external(asset.as_str()) {
                continue;
            }
            let Some(relative) = local_path(asset.as_str()) else {
                warn!("asset {} points outside the static directory, skipped", asset.as_str());
                report.missing.push(asset.clone());
                continue;
            };
            let Some(source) = self.source_path(asset) else {
                continue;
            };
            if !source.is_file() {
                warn!("asset {} not found at {}", asset.as_str(), source.display());
                report.missing.push(asset.clone());
                continue;
            }

            let dest = out_dir.join(&relative);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::copy(&source, &dest).with_context(|| {
                format!("failed to copy {} to {}", source.display(), dest.display())
            })?;
            debug!("copied {}", dest.display());
            report.copied.push(dest);
        }

        Ok(report)
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, asset: &AssetRef) -> String {
        join_url(&self.base_url, asset.as_str())
    }
}

/// Every asset the homepage references: the hero animation, then each
/// illustration in catalog order, without duplicates.
pub fn page_assets(catalog: &FeatureCatalog) -> Vec<AssetRef> {
    let mut seen = HashSet::new();
    std::iter::once(AssetRef::new(DEFAULT_ANIMATION))
        .chain(catalog.iter().map(|r| r.illustration().clone()))
        .filter(|a| seen.insert(a.clone()))
        .collect()
}

fn is_external(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://") || reference.starts_with("//")
}

/// Relative path of a local reference, or `None` when it is external or
/// would climb out of its directory (`..`, a drive prefix, an absolute root).
fn local_path(reference: &str) -> Option<PathBuf> {
    if is_external(reference) {
        return None;
    }
    let relative = Path::new(reference.trim_start_matches('/'));
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        .then(|| relative.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homepage_leptos::FeatureRecord;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn page_assets_lists_animation_then_illustrations() {
        let assets = page_assets(&FeatureCatalog::libriscv());
        assert_eq!(assets.len(), 7);
        assert_eq!(assets[0].as_str(), "img/libriscv.gif");
        assert_eq!(assets[1].as_str(), "img/undraw_to_the_stars_re_wq2x.svg");
        assert_eq!(assets[6].as_str(), "img/undraw_server_re_twwj.svg");
    }

    #[test]
    fn page_assets_drops_duplicates() {
        let shared = AssetRef::new("img/shared.svg");
        let catalog = FeatureCatalog::new(vec![
            FeatureRecord::new("A", shared.clone(), "a").expect("record"),
            FeatureRecord::new("B", shared.clone(), "b").expect("record"),
        ]);
        let assets = page_assets(&catalog);
        assert_eq!(assets, vec![AssetRef::new(DEFAULT_ANIMATION), shared]);
    }

    #[test]
    fn external_references_have_no_source() {
        let assets = StaticAssets::new("/", Some(PathBuf::from("static")));
        assert_eq!(
            assets.source_path(&AssetRef::new("https://cdn.example.org/a.svg")),
            None
        );
        assert_eq!(
            assets.source_path(&AssetRef::new("/img/a.svg")),
            Some(PathBuf::from("static/img/a.svg"))
        );
    }

    #[test]
    fn copies_present_assets_and_reports_missing() {
        let src = TempDir::new().expect("src");
        let out = TempDir::new().expect("out");
        std::fs::create_dir_all(src.path().join("img")).expect("img dir");
        std::fs::write(src.path().join("img/present.svg"), "<svg/>").expect("write svg");

        let assets = StaticAssets::new("/", Some(src.path().to_path_buf()));
        let report = assets
            .copy_into(
                &[AssetRef::new("img/present.svg"), AssetRef::new("img/absent.svg")],
                out.path(),
            )
            .expect("copy");

        assert_eq!(report.copied, vec![out.path().join("img/present.svg")]);
        assert_eq!(report.missing, vec![AssetRef::new("img/absent.svg")]);
        assert_eq!(
            std::fs::read_to_string(out.path().join("img/present.svg")).expect("copied"),
            "<svg/>"
        );
    }

    #[test]
    fn parent_references_stay_inside_build_dir() {
        let root = TempDir::new().expect("root");
        let static_dir = root.path().join("site/static");
        let out = root.path().join("build");
        std::fs::create_dir_all(&static_dir).expect("static dir");
        std::fs::write(root.path().join("site/secret.txt"), "secret").expect("write secret");

        let escaping = AssetRef::new("../secret.txt");
        let nested = AssetRef::new("img/../../secret.txt");
        let report = StaticAssets::new("/", Some(static_dir.clone()))
            .copy_into(&[escaping.clone(), nested.clone()], &out)
            .expect("copy");

        assert!(report.copied.is_empty());
        assert_eq!(report.missing, vec![escaping.clone(), nested]);
        assert!(!root.path().join("secret.txt").exists());
        assert!(!out.exists());
        assert_eq!(
            StaticAssets::new("/", Some(static_dir)).source_path(&escaping),
            None
        );
    }

    #[test]
    fn local_path_accepts_only_plain_relative_paths() {
        assert_eq!(local_path("img/a.svg"), Some(PathBuf::from("img/a.svg")));
        assert_eq!(local_path("/img/a.svg"), Some(PathBuf::from("img/a.svg")));
        assert_eq!(local_path("./img/a.svg"), Some(PathBuf::from("./img/a.svg")));
        assert_eq!(local_path("../a.svg"), None);
        assert_eq!(local_path("img/../../a.svg"), None);
        assert_eq!(local_path("https://cdn.example.org/a.svg"), None);
    }

    #[test]
    fn no_static_dir_copies_nothing() {
        let out = TempDir::new().expect("out");
        let report = StaticAssets::new("/", None)
            .copy_into(&[AssetRef::new("img/a.svg")], out.path())
            .expect("copy");
        assert_eq!(report, CopyReport::default());
    }

    #[test]
    fn resolves_beneath_base_url() {
        let assets = StaticAssets::new("/libriscv/", None);
        assert_eq!(
            assets.resolve(&AssetRef::new("img/a.svg")),
            "/libriscv/img/a.svg"
        );
    }
}
