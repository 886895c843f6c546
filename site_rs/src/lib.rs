//! Static build of the libriscv documentation homepage.
//!
//! Reads `site.toml`, renders the page with [`homepage_leptos`] and writes
//! it out together with the images it references. The `riscv-site` binary
//! is a thin wrapper around [`cli::run`].

pub mod assets;
pub mod build;
pub mod cli;
pub mod config;

pub use build::{BuildReport, build_site, render_page};
pub use config::SiteConfig;
