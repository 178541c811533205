//! Content loaders for archetype tables authored in RON.
//!
//! Tables ship inside the crate (see `content/`) and are parsed on demand;
//! nothing is read from disk at runtime.

pub mod archetypes;

pub use archetypes::ArchetypeLoader;
