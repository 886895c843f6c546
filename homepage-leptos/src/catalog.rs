//! The feature list shown on the homepage.
//!
//! The built-in libriscv entries live in a `const` table. The table is
//! checked at compile time, so a blank field is a build failure rather
//! than a half-rendered card.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::types::{AssetRef, Description, FeatureRecord, RawFeatureRecord};

/// Static form of a feature record, usable in `const` context.
struct FeatureEntry {
    title: &'static str,
    illustration: &'static str,
    description: &'static str,
}

const LIBRISCV_FEATURES: [FeatureEntry; 6] = [
    FeatureEntry {
        title: "Lowest possible latency",
        illustration: "img/undraw_to_the_stars_re_wq2x.svg",
        description: "Calling a guest VM function can finish 1-2 orders of magnitude before other emulators begin executing the first instruction",
    },
    FeatureEntry {
        title: "Cross-platform support",
        illustration: "img/undraw_real_time_collaboration_c62i.svg",
        description: "Compile once your code and run it. The sandbox will be compiled for every platform and interpret your code.",
    },
    FeatureEntry {
        title: "Secure Sandbox",
        illustration: "img/undraw_safe_re_kiil.svg",
        description: "Provides a safe sandbox that guests can not escape from, short of vulnerabilities in custom system calls installed by the host.",
    },
    FeatureEntry {
        title: "Godot Addon",
        illustration: "img/undraw_video_games_x1tr.svg",
        description: "Supports Godot game engine with godot-sandbox addon.",
    },
    FeatureEntry {
        title: "JIT-compiled languages",
        illustration: "img/undraw_start_building_re_xani.svg",
        description: "Supports sandboxing language-runtimes that use JIT-compilation, eg. V8 JavaScript.",
    },
    FeatureEntry {
        title: "Tiny memory footprint",
        illustration: "img/undraw_server_re_twwj.svg",
        description: "Less than 40kB total memory usage for fibonacci program.",
    },
];

const fn entries_complete(entries: &[FeatureEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let e = &entries[i];
        if e.title.is_empty() || e.illustration.is_empty() || e.description.is_empty() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    entries_complete(&LIBRISCV_FEATURES),
    "every built-in feature needs a title, an illustration and a description"
);

/// Ordered, read-only sequence of [`FeatureRecord`]s.
///
/// Order is display order: left to right, top to bottom. Serialized as a
/// plain list; a bad entry in that list is reported by position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<RawFeatureRecord>",
    into = "Vec<FeatureRecord>"
)]
pub struct FeatureCatalog {
    records: Vec<FeatureRecord>,
}

impl FeatureCatalog {
    /// Catalog from already-validated records, kept in the given order.
    pub fn new(records: Vec<FeatureRecord>) -> Self {
        Self { records }
    }

    /// Build a catalog from raw `(title, illustration, description)` triples.
    ///
    /// The first invalid entry aborts with [`SiteError::InvalidCatalog`].
    pub fn try_from_entries<I, T, D>(entries: I) -> Result<Self, SiteError>
    where
        I: IntoIterator<Item = (T, AssetRef, D)>,
        T: Into<String>,
        D: Into<Description>,
    {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (title, illustration, description))| {
                FeatureRecord::new(title, illustration, description).map_err(|e| {
                    SiteError::InvalidCatalog {
                        index,
                        source: Box::new(e),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// The libriscv homepage features.
    pub fn libriscv() -> Self {
        let records = LIBRISCV_FEATURES
            .iter()
            .map(|e| FeatureRecord {
                title: e.title.to_string(),
                illustration: AssetRef::new(e.illustration),
                description: Description::Text(e.description.to_string()),
            })
            .collect();
        Self { records }
    }

    /// Records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRecord> {
        self.records.iter()
    }

    /// Number of cards the grid will render.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no features.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FeatureRecord> {
        self.records.get(index)
    }

    /// Titles in display order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(FeatureRecord::title).collect()
    }
}

impl TryFrom<Vec<RawFeatureRecord>> for FeatureCatalog {
    type Error = SiteError;

    fn try_from(raw: Vec<RawFeatureRecord>) -> Result<Self, Self::Error> {
        Self::try_from_entries(
            raw.into_iter()
                .map(|r| (r.title, r.illustration, r.description)),
        )
    }
}

impl From<FeatureCatalog> for Vec<FeatureRecord> {
    fn from(catalog: FeatureCatalog) -> Self {
        catalog.records
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::libriscv()
    }
}

impl<'a> IntoIterator for &'a FeatureCatalog {
    type Item = &'a FeatureRecord;
    type IntoIter = std::slice::Iter<'a, FeatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
