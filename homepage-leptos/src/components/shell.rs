//! Page shell - the html/head/body wrapper

use leptos::prelude::*;

use crate::styles::SITE_CSS;

/// Minimal host layout: document head with title, description and the
/// inlined stylesheet, then `children` as the body.
#[component]
pub fn PageShell(title: String, description: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <meta name="description" content=description />
                <style>{SITE_CSS}</style>
            </head>
            <body>{children()}</body>
        </html>
    }
}
