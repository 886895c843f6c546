//! Leptos UI components for the homepage.
//!
//! Every component takes owned, already-resolved data. Asset references
//! and configuration are resolved in [`Homepage::compose`] before any view
//! is built.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingPage
//! └── PageShell (html/head/body)
//!     ├── HomepageHeader
//!     └── main
//!         └── FeatureGrid
//!             └── FeatureCard (per catalog record)
//!                 └── FeatureDescription
//! ```

mod card;
mod grid;
mod header;
mod page;
mod shell;

pub use card::{FeatureCard, FeatureDescription};
pub use grid::{FeatureGrid, ResolvedFeature, resolve_features};
pub use header::{DEFAULT_ANIMATION, HeaderContent, HomepageHeader, ResolvedHeader};
pub use page::{DEFAULT_DESCRIPTION, Homepage, LandingPage};
pub use shell::PageShell;
