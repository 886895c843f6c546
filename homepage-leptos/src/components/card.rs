//! Feature card - one column of the feature grid

use leptos::prelude::*;

use crate::types::{Description, FeatureRecord, Inline};

/// A single feature: illustration, heading, body text, all centered.
///
/// `position` is emitted as `data-key` when the card is part of a grid.
#[component]
pub fn FeatureCard(
    record: FeatureRecord,
    illustration_src: String,
    #[prop(optional)] position: Option<usize>,
) -> impl IntoView {
    let FeatureRecord {
        title, description, ..
    } = record;
    let key = position.map(|p| p.to_string());

    view! {
        <div class="col col--4" data-key=key>
            <div class="text--center">
                <img class="featureSvg" role="img" src=illustration_src alt=title.clone() />
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{title}</h3>
                <p class="feature-description">
                    <FeatureDescription description=description />
                </p>
            </div>
        </div>
    }
}

/// Body text of a card, plain or made of inline spans.
#[component]
pub fn FeatureDescription(description: Description) -> impl IntoView {
    match description {
        Description::Text(text) => text.into_any(),
        Description::Spans(spans) => spans
            .into_iter()
            .map(inline_view)
            .collect::<Vec<_>>()
            .into_any(),
    }
}

fn inline_view(span: Inline) -> AnyView {
    match span {
        Inline::Text { text } => text.into_any(),
        Inline::Strong { text } => view! { <strong>{text}</strong> }.into_any(),
        Inline::Emphasis { text } => view! { <em>{text}</em> }.into_any(),
        Inline::Code { text } => view! { <code>{text}</code> }.into_any(),
        Inline::Link { href, label } => view! { <a href=href>{label}</a> }.into_any(),
    }
}
