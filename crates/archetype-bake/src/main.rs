//! Writes `data/fighter-archetypes.json` from the embedded fighter table.
//!
//! Run from the directory that holds `data/`:
//!   cargo run -p archetype-bake

use anyhow::Result;
use archetype_bake::BakeConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let summary = archetype_bake::run(&BakeConfig::default())?;
    println!("{summary}");

    Ok(())
}
