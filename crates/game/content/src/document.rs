//! Output document assembled from an archetype table.
//!
//! The document is the shape consumed by the character builder front end:
//! `{ "entries": [ { id, name, source, replaces?, modifies? }, ... ] }`.

use crate::archetype::{ArchetypeRecord, ArchetypeTable, Marker};
use crate::catalog::FeatureCatalog;
use crate::error::Result;
use crate::slug::slugify;

/// One archetype with its feature codes expanded to display names.
///
/// Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeEntry {
    pub id: String,
    pub name: String,
    pub source: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub replaces: Option<Vec<String>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub modifies: Option<Vec<String>>,
}

impl ArchetypeEntry {
    /// Expands a single record. `None` lists stay absent rather than empty.
    pub fn from_record(
        class: &str,
        features: &FeatureCatalog,
        record: &ArchetypeRecord,
    ) -> Result<Self> {
        let expand_marker = |marker: Marker| -> Result<Option<Vec<String>>> {
            let codes = record.codes(marker);
            if codes.is_empty() {
                Ok(None)
            } else {
                features.expand(codes).map(Some)
            }
        };

        Ok(Self {
            id: slugify(class, &record.name),
            name: record.name.clone(),
            source: record.source.clone(),
            replaces: expand_marker(Marker::Replaces)?,
            modifies: expand_marker(Marker::Modifies)?,
        })
    }
}

/// Full generated data file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeDocument {
    pub entries: Vec<ArchetypeEntry>,
}

impl ArchetypeDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the document for `table`, one entry per record in table order.
///
/// Fails on the first unknown feature code; nothing partial is returned.
pub fn build_document(table: &ArchetypeTable) -> Result<ArchetypeDocument> {
    let mut entries = Vec::with_capacity(table.archetypes.len());

    for record in &table.archetypes {
        let entry = ArchetypeEntry::from_record(&table.class, &table.features, record)?;
        tracing::debug!(
            id = %entry.id,
            replaces = entry.replaces.as_ref().map_or(0, Vec::len),
            modifies = entry.modifies.as_ref().map_or(0, Vec::len),
            "expanded archetype"
        );
        entries.push(entry);
    }

    Ok(ArchetypeDocument { entries })
}
