//! Bake configuration.
use std::path::{Path, PathBuf};

use game_content::ArchetypeTable;

/// Directory, relative to the working directory, that generated files land in.
pub const DATA_DIR: &str = "data";

/// Where a bake run writes its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BakeConfig {
    pub output: PathBuf,
}

impl Default for BakeConfig {
    /// `data/fighter-archetypes.json`
    fn default() -> Self {
        Self::for_class("fighter")
    }
}

impl BakeConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Default location for a class: `data/<class>-archetypes.json`.
    pub fn for_class(class: &str) -> Self {
        Self::new(Path::new(DATA_DIR).join(format!("{class}-archetypes.json")))
    }

    pub fn for_table(table: &ArchetypeTable) -> Self {
        Self::for_class(&table.class)
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
