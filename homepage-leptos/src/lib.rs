//! # homepage-leptos
//!
//! Leptos SSR renderer for the libriscv documentation homepage.
//!
//! The page is a hero banner followed by a grid of feature cards. Cards are
//! driven by a [`FeatureCatalog`]: one card per record, in catalog order.
//! Output is static HTML; nothing is hydrated.
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage_leptos::{render_landing_page, BaseUrlAssets, FeatureCatalog, StaticSite};
//!
//! let site = StaticSite::new("libriscv", "RISC-V userspace emulator library");
//! let html = render_landing_page(&site, &FeatureCatalog::libriscv(), &BaseUrlAssets::default())
//!     .expect("site configuration is complete");
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Secure Sandbox"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - feature records and rich description text
//! - [`catalog`] - the ordered feature list
//! - [`context`] - traits for site configuration and asset resolution
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Site configuration is read exactly once per render, in
//! [`components::Homepage::compose`]. A missing title or tagline is an
//! error, never a blank banner.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod context;
pub mod error;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use catalog::FeatureCatalog;
pub use components::Homepage;
pub use context::{AssetResolver, BaseUrlAssets, SiteContext, StaticSite};
pub use error::SiteError;
pub use types::{AssetRef, Description, FeatureRecord, Inline};

use components::{FeatureCard, FeatureGrid, LandingPage, resolve_features};

/// Render one feature card to an HTML fragment.
///
/// ```rust
/// use homepage_leptos::{render_card, AssetRef, BaseUrlAssets, FeatureRecord};
///
/// let record = FeatureRecord::new(
///     "Godot Addon",
///     AssetRef::new("img/undraw_video_games_x1tr.svg"),
///     "Supports Godot game engine with godot-sandbox addon.",
/// )
/// .unwrap();
///
/// let html = render_card(&record, &BaseUrlAssets::default());
/// assert!(html.contains("<h3>Godot Addon</h3>"));
/// ```
pub fn render_card(record: &FeatureRecord, assets: &dyn AssetResolver) -> String {
    let illustration_src = assets.resolve(record.illustration());
    view! { <FeatureCard record=record.clone() illustration_src=illustration_src /> }.to_html()
}

/// Render the feature grid for `catalog` to an HTML fragment.
pub fn render_grid(catalog: &FeatureCatalog, assets: &dyn AssetResolver) -> String {
    let features = resolve_features(catalog, assets);
    view! { <FeatureGrid features=features /> }.to_html()
}

/// Render the complete homepage document.
///
/// Returns [`SiteError::MissingConfig`] when `site` lacks a title or tagline.
pub fn render_landing_page(
    site: &dyn SiteContext,
    catalog: &FeatureCatalog,
    assets: &dyn AssetResolver,
) -> Result<String, SiteError> {
    let page = Homepage::compose(site, catalog, assets)?;
    Ok(render_homepage(page))
}

/// Render an already composed [`Homepage`].
pub fn render_homepage(page: Homepage) -> String {
    let html = view! { <LandingPage page=page /> }.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
