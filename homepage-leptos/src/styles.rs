//! CSS for the homepage.
//!
//! The class names follow the Infima conventions used by the rest of the
//! documentation site (`container`, `row`, `col--4`, `hero--primary`, ...),
//! so the page looks the same whether or not the site theme is loaded.
//!
//! Grid policy: a `col--4` card takes a third of the row, giving three
//! cards per row on wide viewports. Below 996px every column takes the
//! full width and cards stack.

/// Complete stylesheet, inlined into the page `<head>`.
pub const SITE_CSS: &str = r#"
:root{--ifm-color-primary:#2e8555;--ifm-spacing-horizontal:1rem;--ifm-container-width:1140px;}
*{box-sizing:border-box;}
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Cantarell,Noto Sans,sans-serif;line-height:1.65;color:#1c1e21;}
h3{font-size:1.25rem;margin:0 0 0.5rem;}
p{margin:0 0 1.25rem;}
.container{margin:0 auto;max-width:var(--ifm-container-width);padding:0 var(--ifm-spacing-horizontal);width:100%;}
.row{display:flex;flex-wrap:wrap;margin:0 calc(var(--ifm-spacing-horizontal) * -1);}
.col{flex:1 0 0;max-width:100%;padding:0 var(--ifm-spacing-horizontal);width:100%;}
.col--4{flex:0 0 33.3333%;max-width:33.3333%;}
.text--center{text-align:center;}
.padding-horiz--md{padding-left:1rem;padding-right:1rem;}
.hero{display:flex;align-items:center;padding:4rem 2rem;}
.hero--primary{background-color:var(--ifm-color-primary);color:#fff;}
.hero__subtitle{font-size:1.5rem;margin:1rem 0;}
.button{display:inline-block;border-radius:0.4rem;font-weight:700;text-decoration:none;cursor:pointer;}
.button--secondary{background:#ebedf0;color:#1c1e21;border:1px solid #ebedf0;}
.button--lg{font-size:1.2rem;padding:0.75rem 2rem;}
.heroBanner{padding:4rem 0;text-align:center;position:relative;overflow:hidden;}
.heroBanner img{max-width:100%;height:auto;}
.buttons{display:flex;align-items:center;justify-content:center;}
.features{display:flex;align-items:center;padding:2rem 0;width:100%;}
.featureSvg{height:200px;width:200px;}
.feature-description strong{font-weight:700;}
.feature-description code{background:#f6f8fa;padding:2px 4px;border-radius:4px;}

@media screen and (max-width:996px){
  .heroBanner{padding:2rem;}
  .col--4{flex:0 0 100%;max-width:100%;}
}
"#;
