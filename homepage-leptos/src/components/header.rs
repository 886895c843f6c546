//! Hero banner - tagline, animation and the documentation button

use leptos::prelude::*;

use crate::context::{AssetResolver, SiteContext, join_url};
use crate::error::SiteError;
use crate::types::{AssetRef, CallToAction};

/// Animated demo shown in the hero banner.
pub const DEFAULT_ANIMATION: &str = "img/libriscv.gif";

impl CallToAction {
    /// The "Documentation" button pointing at the docs landing page.
    pub fn documentation() -> Self {
        Self {
            to: "/docs/intro".into(),
            label: "Documentation".into(),
        }
    }
}

/// Everything the hero banner shows, before URL resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderContent {
    /// Tagline from site configuration
    pub tagline: String,
    /// Animation reference
    pub animation: AssetRef,
    /// The single navigational button
    pub cta: CallToAction,
}

impl HeaderContent {
    /// Read the tagline from `site`; a missing or blank tagline is an error.
    pub fn from_site(site: &dyn SiteContext) -> Result<Self, SiteError> {
        let tagline = required(site.tagline(), "tagline")?;
        Ok(Self {
            tagline,
            animation: AssetRef::new(DEFAULT_ANIMATION),
            cta: CallToAction::documentation(),
        })
    }

    /// Resolve the animation and the button target to URLs.
    pub fn resolve(self, base_url: &str, assets: &dyn AssetResolver) -> ResolvedHeader {
        ResolvedHeader {
            animation_src: assets.resolve(&self.animation),
            cta_href: join_url(base_url, &self.cta.to),
            cta_label: self.cta.label,
            tagline: self.tagline,
        }
    }
}

/// Hero banner content ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Tagline text
    pub tagline: String,
    /// Animation URL
    pub animation_src: String,
    /// Button URL
    pub cta_href: String,
    /// Button label
    pub cta_label: String,
}

pub(crate) fn required(value: Option<&str>, key: &'static str) -> Result<String, SiteError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(SiteError::MissingConfig { key }),
    }
}

/// Hero banner at the top of the homepage.
#[component]
pub fn HomepageHeader(header: ResolvedHeader) -> impl IntoView {
    let ResolvedHeader {
        tagline,
        animation_src,
        cta_href,
        cta_label,
    } = header;

    view! {
        <header class="hero hero--primary heroBanner" style="padding-top: 30px;">
            <div class="container">
                <img
                    src=animation_src
                    alt="loading..."
                    style="border-radius: 10px; border: solid 4px black;"
                />
                <p class="hero__subtitle">{tagline}</p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href=cta_href>
                        {cta_label}
                    </a>
                </div>
            </div>
        </header>
    }
}
