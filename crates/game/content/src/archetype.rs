//! Archetype records and the tables that group them by class.
//!
//! An archetype swaps out part of a base class. Each record lists the class
//! features it fully replaces and the ones it only modifies, by feature code.

use std::collections::BTreeMap;

use crate::catalog::FeatureCatalog;
use crate::error::{ContentError, Result, TableProblem};

/// How an archetype affects a base class feature.
///
/// Source tables mark these as `X` (replaced) and `C` (changed).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// The feature is removed and replaced.
    #[strum(to_string = "replaces", serialize = "X")]
    Replaces,
    /// The feature is kept but altered.
    #[strum(to_string = "modifies", serialize = "C")]
    Modifies,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::Replaces, Marker::Modifies];
}

/// One archetype as authored in a content table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeRecord {
    /// Publisher label, e.g. `"Paizo"`.
    pub source: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub markers: BTreeMap<Marker, Vec<String>>,
}

impl ArchetypeRecord {
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            markers: BTreeMap::new(),
        }
    }

    /// Adds codes under `marker`, appending to any already present.
    pub fn with<I, S>(mut self, marker: Marker, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers
            .entry(marker)
            .or_default()
            .extend(codes.into_iter().map(Into::into));
        self
    }

    /// Codes listed under `marker`; empty when the marker is absent.
    pub fn codes(&self, marker: Marker) -> &[String] {
        self.markers.get(&marker).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// All archetypes of one class together with the features they reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeTable {
    /// Class name, used as the slug prefix (`"fighter"`).
    pub class: String,
    pub features: FeatureCatalog,
    pub archetypes: Vec<ArchetypeRecord>,
}

impl ArchetypeTable {
    pub fn new(class: impl Into<String>, features: FeatureCatalog) -> Self {
        Self {
            class: class.into(),
            features,
            archetypes: Vec::new(),
        }
    }

    pub fn with_archetype(mut self, record: ArchetypeRecord) -> Self {
        self.archetypes.push(record);
        self
    }

    /// Checks that every referenced code exists in the catalog.
    ///
    /// Unlike [`FeatureCatalog::expand`], this collects every unknown
    /// reference instead of stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        for record in &self.archetypes {
            for marker in Marker::ALL {
                for code in record.codes(marker) {
                    if !self.features.contains(code) {
                        problems.push(TableProblem {
                            archetype: record.name.clone(),
                            marker,
                            code: code.clone(),
                        });
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ContentError::InconsistentTable { problems })
        }
    }
}
