use crate::NamedRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability_name: String,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStat {
    pub stat_name: String,
    pub base_stat: u16,
}

/// One node of an evolution tree: a species and the species it can evolve into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedRef,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn leaf(name: &str) -> Self {
        Self {
            species: NamedRef::new(name),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_children(name: &str, evolves_to: Vec<EvolutionNode>) -> Self {
        Self {
            species: NamedRef::new(name),
            evolves_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub chain: EvolutionNode,
}

/// How a species picks up a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition<'a> {
    Level(u16),
    Method(&'a str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnableMove {
    pub name: String,
    /// "level" for level-up moves, otherwise the method name ("machine", "egg", "tutor").
    #[serde(rename = "type")]
    pub method: String,
    #[serde(default)]
    pub level: Option<u16>,
}

impl LearnableMove {
    pub fn acquisition(&self) -> Acquisition<'_> {
        match (self.method.as_str(), self.level) {
            ("level", Some(level)) => Acquisition::Level(level),
            (method, _) => Acquisition::Method(method),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEncounter {
    pub location: String,
    pub min_level: u16,
    pub max_level: u16,
    /// Encounter rate in percent.
    pub rarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<BaseStat>,
    #[serde(default)]
    pub capture_rate: Option<u16>,
    #[serde(default)]
    pub egg_groups: Vec<String>,
    #[serde(default)]
    pub evolution_chain: Option<EvolutionChain>,
    #[serde(default)]
    pub moves: Vec<LearnableMove>,
    #[serde(default)]
    pub location_area_encounters: Vec<LocationEncounter>,
}

impl SpeciesRecord {
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    pub fn evolution_root(&self) -> Option<&EvolutionNode> {
        self.evolution_chain.as_ref().map(|chain| &chain.chain)
    }
}
