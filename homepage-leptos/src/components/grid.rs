//! Feature grid - the catalog laid out as rows of cards

use leptos::prelude::*;

use super::FeatureCard;
use crate::catalog::FeatureCatalog;
use crate::context::AssetResolver;
use crate::types::FeatureRecord;

/// A catalog record paired with its resolved illustration URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFeature {
    /// The record as it appears in the catalog
    pub record: FeatureRecord,
    /// URL of the illustration
    pub illustration_src: String,
}

/// Resolve every illustration of `catalog`, preserving catalog order.
pub fn resolve_features(
    catalog: &FeatureCatalog,
    assets: &dyn AssetResolver,
) -> Vec<ResolvedFeature> {
    catalog
        .iter()
        .map(|record| ResolvedFeature {
            illustration_src: assets.resolve(record.illustration()),
            record: record.clone(),
        })
        .collect()
}

/// One card per feature, in order, keyed by position.
#[component]
pub fn FeatureGrid(features: Vec<ResolvedFeature>) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {features
                        .into_iter()
                        .enumerate()
                        .map(|(position, feature)| {
                            view! {
                                <FeatureCard
                                    record=feature.record
                                    illustration_src=feature.illustration_src
                                    position=position
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
