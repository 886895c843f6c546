//! Error type for homepage construction and rendering.

use thiserror::Error;

/// Configuration defects detected before or while composing the page.
///
/// Rendering itself is total; every variant here describes input that
/// should have been fixed before deployment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// A feature record field was empty or whitespace-only.
    #[error("feature record field `{field}` must not be empty")]
    EmptyField {
        /// Name of the offending field
        field: &'static str,
    },

    /// A value the page needs from site configuration is missing.
    #[error("site configuration is missing `{key}`")]
    MissingConfig {
        /// Configuration key that was absent or blank
        key: &'static str,
    },

    /// A record of a custom catalog failed validation.
    #[error("feature #{index} is invalid: {source}")]
    InvalidCatalog {
        /// Zero-based position of the record in the catalog
        index: usize,
        /// Underlying record error
        #[source]
        source: Box<SiteError>,
    },
}
