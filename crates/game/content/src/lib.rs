//! Data-driven class archetype content.
//!
//! This crate houses the archetype tables the character builder consumes:
//! - Feature catalogs mapping short feature codes to display names
//! - Archetype records listing which class features they replace or modify
//! - Slug identifiers and the expanded output document
//! - RON loaders for the tables embedded in `content/` (feature `loaders`)
//!
//! Everything here is pure: tables go in, documents come out. Writing the
//! document to disk is the job of the `archetype-bake` tool.

pub mod archetype;
pub mod catalog;
pub mod document;
pub mod error;
pub mod slug;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use archetype::{ArchetypeRecord, ArchetypeTable, Marker};
pub use catalog::FeatureCatalog;
pub use document::{ArchetypeDocument, ArchetypeEntry, build_document};
pub use error::{ContentError, Result, TableProblem};
pub use slug::slugify;

#[cfg(feature = "loaders")]
pub use loaders::ArchetypeLoader;
