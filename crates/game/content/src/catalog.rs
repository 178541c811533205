//! Feature code catalog.
//!
//! Archetype records refer to class features by short codes (`"bf1"`,
//! `"wt3"`). The catalog maps each code to the display name written to the
//! generated data file.

use std::collections::HashMap;

use crate::error::{ContentError, Result};

/// Immutable mapping from feature codes to display names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeatureCatalog {
    names: HashMap<String, String>,
}

impl FeatureCatalog {
    /// Builds a catalog from `(code, name)` pairs. Later pairs win on duplicate codes.
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    /// Returns the display name for `code`.
    pub fn lookup(&self, code: &str) -> Result<&str> {
        self.names
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| ContentError::UnknownFeatureCode {
                code: code.to_string(),
            })
    }

    /// Expands codes into display names, preserving order and duplicates.
    ///
    /// Stops at the first unknown code.
    pub fn expand<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<String>> {
        codes
            .iter()
            .map(|code| self.lookup(code.as_ref()).map(str::to_string))
            .collect()
    }
}
