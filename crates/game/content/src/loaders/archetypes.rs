//! Archetype table loader.

use crate::archetype::ArchetypeTable;
use crate::error::{ContentError, Result};

/// Fighter table compiled into the crate.
const FIGHTER_RON: &str = include_str!("../../content/fighter.ron");

/// Loader for archetype tables from RON text.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Parse an archetype table from RON text.
    ///
    /// Only checks the shape of the data; call [`ArchetypeTable::validate`]
    /// to check feature references.
    pub fn from_ron(content: &str) -> Result<ArchetypeTable> {
        let table: ArchetypeTable =
            ron::from_str(content).map_err(|e| ContentError::Parse(e.to_string()))?;

        tracing::debug!(
            class = %table.class,
            features = table.features.len(),
            archetypes = table.archetypes.len(),
            "Loaded archetype table"
        );

        Ok(table)
    }

    /// The embedded fighter archetype table.
    pub fn fighter() -> Result<ArchetypeTable> {
        Self::from_ron(FIGHTER_RON)
    }
}

impl ArchetypeTable {
    /// Shorthand for [`ArchetypeLoader::fighter`].
    pub fn fighter() -> Result<Self> {
        ArchetypeLoader::fighter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Marker;
    use crate::document::build_document;

    #[test]
    fn fighter_table_is_consistent() {
        let table = ArchetypeLoader::fighter().unwrap();

        assert_eq!(table.class, "fighter");
        assert_eq!(table.features.len(), 28);
        assert_eq!(table.archetypes.len(), 10);
        table.validate().unwrap();
    }

    #[test]
    fn fighter_table_keeps_authored_order() {
        let table = ArchetypeTable::fighter().unwrap();
        let names: Vec<&str> = table.archetypes.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "Archer",
                "Armiger",
                "Armor Master",
                "Aquanaut",
                "Blackjack",
                "Border Defender",
                "Brawler",
                "Buckler Duelist",
                "Cad",
                "Child of War",
            ]
        );
        assert!(table.archetypes.iter().all(|a| a.source == "Paizo"));
    }

    #[test]
    fn archer_entry_matches_published_features() {
        let document = build_document(&ArchetypeTable::fighter().unwrap()).unwrap();
        let archer = &document.entries[0];

        assert_eq!(archer.id, "fighter-archer");
        assert_eq!(archer.name, "Archer");
        assert_eq!(archer.source, "Paizo");
        assert_eq!(
            archer.replaces.as_deref().unwrap(),
            [
                "Bravery (1)",
                "Bravery (2)",
                "Bravery (3)",
                "Bravery (4)",
                "Armor Training (1)",
                "Armor Training (2)",
                "Armor Training (3)",
                "Armor Training (4)",
                "Weapon Training (1)",
                "Weapon Training (2)",
                "Weapon Training (3)",
                "Weapon Training (4)",
            ]
        );
        assert_eq!(archer.modifies.as_deref().unwrap(), ["Weapon Mastery"]);
    }

    #[test]
    fn records_without_modifications_omit_modifies() {
        let document = build_document(&ArchetypeTable::fighter().unwrap()).unwrap();
        let without: Vec<&str> = document
            .entries
            .iter()
            .filter(|e| e.modifies.is_none())
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(
            without,
            [
                "fighter-armor-master",
                "fighter-blackjack",
                "fighter-border-defender",
            ]
        );
        assert!(document.entries.iter().all(|e| e.replaces.is_some()));
    }

    #[test]
    fn child_of_war_modifies_four_features() {
        let table = ArchetypeTable::fighter().unwrap();
        let child = table.archetypes.last().unwrap();

        assert_eq!(child.codes(Marker::Modifies), ["cs", "sr", "wa", "bf4"]);
    }

    #[test]
    fn parse_error_is_reported() {
        let err = ArchetypeLoader::from_ron("(class: \"fighter\"").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn short_table_without_markers_parses() {
        let table = ArchetypeLoader::from_ron(
            r#"(
                class: "rogue",
                features: { "ev": "Evasion" },
                archetypes: [(source: "Paizo", name: "Scout")],
            )"#,
        )
        .unwrap();

        assert_eq!(table.class, "rogue");
        assert!(table.archetypes[0].markers.is_empty());
    }
}
