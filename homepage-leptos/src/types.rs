//! Homepage data types.
//!
//! A [`FeatureRecord`] is the only real entity on the page. Its fields are
//! private and [`FeatureRecord::new`] rejects blank input, so every record
//! that reaches a renderer is complete.
//!
//! # Example
//!
//! ```rust
//! use homepage_leptos::types::{AssetRef, Description, FeatureRecord, Inline};
//!
//! let record = FeatureRecord::new(
//!     "Tiny memory footprint",
//!     AssetRef::new("img/undraw_server_re_twwj.svg"),
//!     Description::Spans(vec![
//!         Inline::Text { text: "Less than ".into() },
//!         Inline::Strong { text: "40kB".into() },
//!         Inline::Text { text: " total memory usage.".into() },
//!     ]),
//! )
//! .unwrap();
//!
//! assert_eq!(record.description().plain_text(), "Less than 40kB total memory usage.");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Opaque reference to a static visual asset, e.g. `img/libriscv.gif`.
///
/// Resolution into a URL belongs to an [`crate::AssetResolver`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Wrap an asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// One inline span of rich description text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Inline {
    /// Unformatted text
    Text {
        /// Span content
        text: String,
    },
    /// Bold text
    Strong {
        /// Span content
        text: String,
    },
    /// Italic text
    Emphasis {
        /// Span content
        text: String,
    },
    /// Inline code
    Code {
        /// Span content
        text: String,
    },
    /// Hyperlink
    Link {
        /// Link target, site-relative or absolute
        href: String,
        /// Visible link text
        label: String,
    },
}

impl Inline {
    fn visible_text(&self) -> &str {
        match self {
            Inline::Text { text }
            | Inline::Strong { text }
            | Inline::Emphasis { text }
            | Inline::Code { text } => text,
            Inline::Link { label, .. } => label,
        }
    }
}

/// Body text of a feature card.
///
/// Serialized untagged: a TOML/JSON string becomes [`Description::Text`],
/// an array of spans becomes [`Description::Spans`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// Plain text
    Text(String),
    /// Sequence of formatted spans
    Spans(Vec<Inline>),
}

impl Description {
    /// Description text with all inline formatting dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Spans(spans) => spans.iter().map(Inline::visible_text).collect(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Description::Text(text) => text.trim().is_empty(),
            Description::Spans(spans) => spans.iter().all(|s| s.visible_text().trim().is_empty()),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

/// A single entry of the feature list: title, illustration, description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureRecord", into = "RawFeatureRecord")]
pub struct FeatureRecord {
    pub(crate) title: String,
    pub(crate) illustration: AssetRef,
    pub(crate) description: Description,
}

impl FeatureRecord {
    /// Validate and build a record.
    ///
    /// Fails with [`SiteError::EmptyField`] when any field is blank.
    pub fn new(
        title: impl Into<String>,
        illustration: AssetRef,
        description: impl Into<Description>,
    ) -> Result<Self, SiteError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(SiteError::EmptyField { field: "title" });
        }
        if illustration.as_str().trim().is_empty() {
            return Err(SiteError::EmptyField {
                field: "illustration",
            });
        }
        if description.is_blank() {
            return Err(SiteError::EmptyField {
                field: "description",
            });
        }

        Ok(Self {
            title,
            illustration,
            description,
        })
    }

    /// Card heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Illustration shown above the heading.
    pub fn illustration(&self) -> &AssetRef {
        &self.illustration
    }

    /// Card body text.
    pub fn description(&self) -> &Description {
        &self.description
    }
}

/// Wire shape of [`FeatureRecord`]; validated on the way in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct RawFeatureRecord {
    pub(crate) title: String,
    pub(crate) illustration: AssetRef,
    pub(crate) description: Description,
}

impl TryFrom<RawFeatureRecord> for FeatureRecord {
    type Error = SiteError;

    fn try_from(raw: RawFeatureRecord) -> Result<Self, Self::Error> {
        FeatureRecord::new(raw.title, raw.illustration, raw.description)
    }
}

impl From<FeatureRecord> for RawFeatureRecord {
    fn from(record: FeatureRecord) -> Self {
        Self {
            title: record.title,
            illustration: record.illustration,
            description: record.description,
        }
    }
}

/// Navigational link rendered as the header's single button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Site-relative target path, e.g. `/docs/intro`
    pub to: String,
    /// Button label
    pub label: String,
}
