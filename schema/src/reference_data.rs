use crate::Table;
use serde::{Deserialize, Serialize};

/// The `{"name": ...}` wrapper the datasets use for every species or move reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

impl NamedRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub pokemon: Vec<NamedRef>,
    #[serde(default)]
    pub moves: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggGroupRecord {
    pub name: String,
    #[serde(default)]
    pub pokemon_species: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub name: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub pokemon_with_ability: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    #[serde(rename = "type", default)]
    pub move_type: Option<String>,
    #[serde(default)]
    pub damage_class: Option<String>,
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub pp: Option<u16>,
    #[serde(default)]
    pub accuracy: Option<u16>,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub learned_by_pokemon: Vec<NamedRef>,
}

/// A breeding chain, donor first and target species last.
pub type BreedingChain = Vec<String>;

// Dataset documents, one per file.
pub type SpeciesTable = Table<crate::SpeciesRecord>;
pub type TypeTable = Table<TypeRecord>;
pub type TierTable = Table<Vec<NamedRef>>;
pub type EggGroupTable = Table<EggGroupRecord>;
pub type AbilityTable = Table<AbilityRecord>;
pub type MoveTable = Table<MoveRecord>;
/// species -> move -> chains
pub type EggMoveTable = Table<Table<Vec<BreedingChain>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_allows_null_numbers() {
        let record: MoveRecord = serde_json::from_str(
            r#"{"name": "growl", "type": "normal", "damage_class": "status",
                "power": null, "pp": 40, "accuracy": 100, "effect": "Lowers Attack."}"#,
        )
        .unwrap();
        assert_eq!(record.power, None);
        assert_eq!(record.pp, Some(40));
        assert!(record.learned_by_pokemon.is_empty());
    }

    #[test]
    fn test_move_record_without_type_or_class() {
        let record: MoveRecord = serde_json::from_str(r#"{"name": "struggle"}"#).unwrap();
        assert_eq!(record.move_type, None);
        assert_eq!(record.damage_class, None);
        assert_eq!(record.power, None);
    }

    #[test]
    fn test_egg_move_table_keeps_move_order() {
        let table: EggMoveTable = serde_json::from_str(
            r#"{"bulbasaur": {"petal dance": [["bellossom", "bulbasaur"]], "amnesia": []}}"#,
        )
        .unwrap();
        let moves = table.get("bulbasaur").unwrap();
        assert_eq!(moves.keys().collect::<Vec<_>>(), vec!["petal dance", "amnesia"]);
    }
}
