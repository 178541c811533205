//! Bakes archetype content tables into JSON data files.
//!
//! A bake is a single pass: load the embedded table, check its feature
//! references, expand every record, and replace the output file. Any error
//! stops the run before the destination is touched.

pub mod config;
pub mod writer;

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::{ArchetypeTable, build_document};

pub use config::BakeConfig;

/// Outcome of a successful bake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BakeSummary {
    pub entries: usize,
    pub path: PathBuf,
}

impl fmt::Display for BakeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrote {} entries", self.entries)
    }
}

/// Bakes the embedded fighter table to `config.output`.
pub fn run(config: &BakeConfig) -> Result<BakeSummary> {
    let table = ArchetypeTable::fighter().context("Failed to load embedded fighter table")?;
    bake(&table, config)
}

/// Bakes `table` to `config.output`.
pub fn bake(table: &ArchetypeTable, config: &BakeConfig) -> Result<BakeSummary> {
    table
        .validate()
        .with_context(|| format!("Archetype table for {:?} is inconsistent", table.class))?;

    let document = build_document(table)
        .with_context(|| format!("Failed to expand {} archetypes", table.class))?;
    let json = writer::render_json(&document)?;
    writer::write_atomic(&config.output, &json)?;

    let summary = BakeSummary {
        entries: document.len(),
        path: config.output.clone(),
    };

    tracing::info!(
        class = %table.class,
        entries = summary.entries,
        path = %summary.path.display(),
        "Baked archetype table"
    );

    Ok(summary)
}
