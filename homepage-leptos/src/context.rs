//! Boundaries to the collaborators the homepage does not own.
//!
//! Site configuration and asset resolution are supplied by the caller.
//! The renderer only reads through these traits, so the library does not
//! depend on any particular config format or asset pipeline.

/// Read-only view of the site configuration.
pub trait SiteContext {
    /// Site title, used as the page `<title>`.
    fn title(&self) -> Option<&str>;

    /// Tagline shown in the hero banner.
    fn tagline(&self) -> Option<&str>;

    /// Page meta description; `None` falls back to the default blurb.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Prefix joined onto every site-relative link and asset.
    fn base_url(&self) -> &str {
        "/"
    }
}

/// Turns an opaque asset reference into something a browser can load.
pub trait AssetResolver {
    /// Resolve `asset` to a URL. Unknown references are passed through as-is.
    fn resolve(&self, asset: &crate::types::AssetRef) -> String;
}

/// Resolver serving every asset from beneath a base URL.
#[derive(Clone, Debug)]
pub struct BaseUrlAssets {
    base_url: String,
}

impl BaseUrlAssets {
    /// Resolve assets beneath `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for BaseUrlAssets {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetResolver for BaseUrlAssets {
    fn resolve(&self, asset: &crate::types::AssetRef) -> String {
        join_url(&self.base_url, asset.as_str())
    }
}

/// In-memory [`SiteContext`], handy for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSite {
    /// Site title
    pub title: Option<String>,
    /// Hero tagline
    pub tagline: Option<String>,
    /// Meta description
    pub description: Option<String>,
    /// Base URL, `/` when unset
    pub base_url: Option<String>,
}

impl StaticSite {
    /// Context with a title and tagline and defaults for everything else.
    pub fn new(title: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            tagline: Some(tagline.into()),
            ..Default::default()
        }
    }
}

impl SiteContext for StaticSite {
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

/// Join a site-relative `path` onto `base`.
///
/// Absolute URLs (`http://`, `https://`, `//`) are returned untouched.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetRef;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("/", "/docs/intro"), "/docs/intro");
        assert_eq!(join_url("/", "img/a.svg"), "/img/a.svg");
        assert_eq!(join_url("/libriscv/", "/docs/intro"), "/libriscv/docs/intro");
        assert_eq!(join_url("", "img/a.svg"), "/img/a.svg");
        assert_eq!(
            join_url("https://example.org", "img/a.svg"),
            "https://example.org/img/a.svg"
        );
    }

    #[test]
    fn join_url_keeps_absolute_targets() {
        assert_eq!(
            join_url("/base/", "https://github.com/libriscv/libriscv"),
            "https://github.com/libriscv/libriscv"
        );
    }

    #[test]
    fn base_url_assets_prefix_references() {
        let assets = BaseUrlAssets::new("/libriscv/");
        assert_eq!(
            assets.resolve(&AssetRef::new("img/libriscv.gif")),
            "/libriscv/img/libriscv.gif"
        );
        assert_eq!(
            BaseUrlAssets::default().resolve(&AssetRef::new("img/x.svg")),
            "/img/x.svg"
        );
    }

    #[test]
    fn static_site_defaults_base_url() {
        let site = StaticSite::new("libriscv", "RISC-V sandbox");
        assert_eq!(site.base_url(), "/");
        assert_eq!(site.description(), None);
        assert_eq!(site.tagline(), Some("RISC-V sandbox"));
    }
}
