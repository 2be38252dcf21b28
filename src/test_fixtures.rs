//! Shared in-memory datasets for unit tests.

use crate::datastore::{DataStore, MemorySource};
use crate::lookup::LookupEngine;
use schema::{Dataset, SpeciesRecord};
use serde_json::{json, Value};

fn species_json() -> Value {
    let locations: Vec<Value> = (1..=26)
        .map(|i| {
            let location = format!("Route {}", i);
            let rarity = if i == 26 { 12.5 } else { 20.0 };
            json!({
                "location": location,
                "min_level": i + 1,
                "max_level": i + 2,
                "rarity": rarity,
            })
        })
        .collect();

    let mut moves = vec![
        json!({"name": "tackle", "type": "level", "level": 1}),
        json!({"name": "cut", "type": "machine"}),
    ];
    moves.extend((3..=40).map(|i| {
        let name = format!("move {}", i);
        json!({"name": name, "type": "level", "level": i})
    }));
    moves.push(json!({"name": "move 41", "type": "egg"}));

    json!({
        "bulbasaur": {
            "name": "bulbasaur",
            "sprites": {"front_default": "https://sprites.example/1.png"},
            "types": ["grass", "poison"],
            "abilities": [
                {"ability_name": "overgrow", "is_hidden": false},
                {"ability_name": "chlorophyll", "is_hidden": true}
            ],
            "stats": [
                {"stat_name": "hp", "base_stat": 45},
                {"stat_name": "attack", "base_stat": 49},
                {"stat_name": "special-attack", "base_stat": 65}
            ],
            "capture_rate": 45,
            "egg_groups": ["monster", "plant"],
            "evolution_chain": {"chain": {
                "species": {"name": "bulbasaur"},
                "evolves_to": [{
                    "species": {"name": "ivysaur"},
                    "evolves_to": [{"species": {"name": "venusaur"}, "evolves_to": []}]
                }]
            }},
            "moves": moves,
            "location_area_encounters": locations
        },
        "eevee": {
            "name": "eevee",
            "sprites": {"front_default": null},
            "types": ["normal"],
            "abilities": [{"ability_name": "run-away", "is_hidden": false}],
            "stats": [{"stat_name": "hp", "base_stat": 55}],
            "capture_rate": 45,
            "egg_groups": ["ground"],
            "evolution_chain": {"chain": {
                "species": {"name": "eevee"},
                "evolves_to": [
                    {"species": {"name": "vaporeon"}, "evolves_to": []},
                    {"species": {"name": "jolteon"}, "evolves_to": []},
                    {"species": {"name": "flareon"}, "evolves_to": []}
                ]
            }},
            "moves": [{"name": "tackle", "type": "level", "level": 1}],
            "location_area_encounters": [
                {"location": "Celadon City", "min_level": 25, "max_level": 25, "rarity": 100}
            ]
        },
        "ditto": {
            "name": "ditto",
            "types": ["normal"],
            "abilities": [{"ability_name": "limber", "is_hidden": false}],
            "stats": [{"stat_name": "hp", "base_stat": 48}],
            "capture_rate": 35,
            "egg_groups": ["ditto"],
            "evolution_chain": {"chain": {"species": {"name": "ditto"}, "evolves_to": []}},
            "moves": [{"name": "transform", "type": "level", "level": 1}],
            "location_area_encounters": [
                {"location": "Route 13", "min_level": 23, "max_level": 25, "rarity": 5}
            ]
        },
        "mew": {
            "name": "mew",
            "types": ["psychic"],
            "egg_groups": ["no-eggs"]
        }
    })
}

// The documents below are written out by hand because `json!` objects do not keep key
// order, and these datasets are the ones whose listings and pages depend on it.

const TYPES_JSON: &str = r#"{
    "fire": {
        "pokemon": [{"name": "charmander"}, {"name": "vulpix"}],
        "moves": [{"name": "ember"}, {"name": "flamethrower"}]
    },
    "water": {
        "pokemon": [{"name": "squirtle"}],
        "moves": [{"name": "surf"}]
    },
    "grass": {
        "pokemon": [{"name": "bulbasaur"}],
        "moves": [{"name": "vine-whip"}]
    }
}"#;

const TIERS_JSON: &str = r#"{
    "UBER": [{"name": "mewtwo"}],
    "OU": [{"name": "mr-mime"}, {"name": "snorlax"}],
    "UU": []
}"#;

const EGG_GROUPS_JSON: &str = r#"{
    "monster": {"name": "monster", "pokemon_species": [{"name": "bulbasaur"}]},
    "water1": {"name": "water1", "pokemon_species": [{"name": "squirtle"}, {"name": "tapu-fini"}]},
    "plant": {"name": "plant", "pokemon_species": [{"name": "oddish"}]}
}"#;

fn egg_moves_json() -> String {
    let petal_dance: Vec<String> = (1..=31)
        .map(|i| format!(r#"["Donor{}", "Bulbasaur"]"#, i))
        .collect();
    format!(
        r#"{{
            "bulbasaur": {{
                "Petal Dance": [{}],
                "Amnesia": [["Slowpoke", "Bulbasaur"], ["Psyduck", "Oddish", "Bulbasaur"]]
            }},
            "ditto": {{}}
        }}"#,
        petal_dance.join(", ")
    )
}

fn numbered_species(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            let name = format!("species {}", i);
            json!({ "name": name })
        })
        .collect()
}

fn abilities_json() -> Value {
    json!({
        "overgrow": {
            "name": "overgrow",
            "effect": "Strengthens grass moves in a pinch.",
            "pokemon_with_ability": numbered_species(31)
        },
        "stench": {
            "name": "stench",
            "effect": "May cause flinching."
        }
    })
}

fn moves_json() -> Value {
    json!({
        "tackle": {
            "name": "tackle",
            "type": "normal",
            "damage_class": "physical",
            "power": 40,
            "pp": 35,
            "accuracy": 100,
            "effect": "Inflicts regular damage.",
            "learned_by_pokemon": numbered_species(61)
        },
        "growl": {
            "name": "growl",
            "type": "normal",
            "damage_class": "status",
            "power": null,
            "pp": 40,
            "accuracy": 100,
            "effect": "Lowers the target's Attack by one stage.",
            "learned_by_pokemon": [{"name": "bulbasaur"}, {"name": "mr-mime"}]
        },
        "struggle": {
            "name": "struggle",
            "effect": "Used when no other move is possible."
        }
    })
}

/// Every dataset populated with small, known documents.
pub fn fixture_source() -> MemorySource {
    MemorySource::new()
        .with_document(Dataset::Species, species_json().to_string())
        .with_document(Dataset::Types, TYPES_JSON)
        .with_document(Dataset::PvpTiers, TIERS_JSON)
        .with_document(Dataset::EggGroups, EGG_GROUPS_JSON)
        .with_document(Dataset::EggMoves, egg_moves_json())
        .with_document(Dataset::Abilities, abilities_json().to_string())
        .with_document(Dataset::Moves, moves_json().to_string())
}

pub fn fixture_engine() -> LookupEngine {
    LookupEngine::new(DataStore::uncached(fixture_source()))
}

/// One decoded species record from the fixture dataset.
pub fn species_record(name: &str) -> SpeciesRecord {
    let value = species_json()
        .get(name)
        .cloned()
        .unwrap_or_else(|| panic!("no fixture species named {}", name));
    serde_json::from_value(value).expect("fixture species should decode")
}
