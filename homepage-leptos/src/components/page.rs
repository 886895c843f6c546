//! Landing page - header banner plus feature grid inside the page shell

use leptos::prelude::*;

use super::header::required;
use super::{
    FeatureGrid, HeaderContent, HomepageHeader, PageShell, ResolvedFeature, ResolvedHeader,
    resolve_features,
};
use crate::catalog::FeatureCatalog;
use crate::context::{AssetResolver, SiteContext};
use crate::error::SiteError;

/// Meta description used when site configuration does not set one.
pub const DEFAULT_DESCRIPTION: &str =
    "libriscv is a simple, slim and complete sandbox that is highly embeddable and configurable.";

/// Fully resolved page content.
///
/// Built by [`Homepage::compose`]; rendering it cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Homepage {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Hero banner
    pub header: ResolvedHeader,
    /// Feature cards in display order
    pub features: Vec<ResolvedFeature>,
}

impl Homepage {
    /// Read site configuration once and resolve every asset and link.
    ///
    /// Fails with [`SiteError::MissingConfig`] when the title or tagline is absent.
    pub fn compose(
        site: &dyn SiteContext,
        catalog: &FeatureCatalog,
        assets: &dyn AssetResolver,
    ) -> Result<Self, SiteError> {
        let title = required(site.title(), "title")?;
        let header = HeaderContent::from_site(site)?.resolve(site.base_url(), assets);
        let description = site
            .description()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        Ok(Self {
            title,
            description,
            header,
            features: resolve_features(catalog, assets),
        })
    }
}

/// The complete homepage document.
#[component]
pub fn LandingPage(page: Homepage) -> impl IntoView {
    let Homepage {
        title,
        description,
        header,
        features,
    } = page;

    view! {
        <PageShell title=title description=description>
            <HomepageHeader header=header />
            <main>
                <FeatureGrid features=features />
            </main>
        </PageShell>
    }
}
