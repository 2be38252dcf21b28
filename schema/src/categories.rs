use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The reference-data domains a lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Category {
    Species,
    Type,
    Tier,
    EggGroup,
    Ability,
    Move,
    EggMoves,
    Locations,
    LearnableMoves,
}

/// How a category expects its query key to be cased before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Lower,
    Upper,
}

impl Category {
    /// The dataset document this category reads from.
    pub fn dataset(self) -> Dataset {
        match self {
            Category::Species | Category::Locations | Category::LearnableMoves => {
                Dataset::Species
            }
            Category::Type => Dataset::Types,
            Category::Tier => Dataset::PvpTiers,
            Category::EggGroup => Dataset::EggGroups,
            Category::EggMoves => Dataset::EggMoves,
            Category::Ability => Dataset::Abilities,
            Category::Move => Dataset::Moves,
        }
    }

    /// Whether the `all` wildcard lists every key instead of looking one up.
    pub fn supports_listing(self) -> bool {
        matches!(self, Category::Type | Category::Tier | Category::EggGroup)
    }

    pub fn key_case(self) -> KeyCase {
        match self {
            Category::Tier => KeyCase::Upper,
            _ => KeyCase::Lower,
        }
    }

    /// Applies the category's casing convention to a raw query key.
    pub fn normalize_key(self, key: &str) -> String {
        let trimmed = key.trim();
        match self.key_case() {
            KeyCase::Lower => trimmed.to_lowercase(),
            KeyCase::Upper => trimmed.to_uppercase(),
        }
    }

    /// Human-facing name used in "not found" replies.
    pub fn label(self) -> &'static str {
        match self {
            Category::Species => "Pokémon",
            Category::Type => "Pokémon Type",
            Category::Tier => "PvP Tier",
            Category::EggGroup => "Egg Group",
            Category::Ability => "Ability",
            Category::Move => "Move",
            Category::EggMoves => "egg move",
            Category::Locations => "location",
            Category::LearnableMoves => "move",
        }
    }

    /// Human-facing name used in "could not fetch" replies.
    pub fn data_label(self) -> &'static str {
        match self {
            Category::Species => "Pokémon",
            Category::Type => "Pokémon type",
            Category::Tier => "PvP tier",
            Category::EggGroup => "Egg Group",
            Category::Ability => "ability",
            Category::Move => "move",
            Category::EggMoves => "egg moves",
            Category::Locations => "location",
            Category::LearnableMoves => "learnable moves",
        }
    }

    /// Title used for the `all` listing page, e.g. "All Types".
    pub fn listing_title(self) -> &'static str {
        match self {
            Category::Type => "All Types",
            Category::Tier => "All Tiers",
            Category::EggGroup => "All Egg Groups",
            _ => "All Entries",
        }
    }
}

/// One immutable JSON document in the dataset store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Dataset {
    Species,
    Types,
    PvpTiers,
    EggGroups,
    EggMoves,
    Abilities,
    Moves,
}

impl Dataset {
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Species => "pokemon-data.json",
            Dataset::Types => "types-data.json",
            Dataset::PvpTiers => "pvp-data.json",
            Dataset::EggGroups => "egg-groups-data.json",
            Dataset::EggMoves => "egg-moves-data.json",
            Dataset::Abilities => "abilities-data.json",
            Dataset::Moves => "moves-data.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!(Category::from_str("EGG-GROUP").ok(), Some(Category::EggGroup));
        assert_eq!(Category::from_str("learnable-moves").ok(), Some(Category::LearnableMoves));
        assert!(Category::from_str("berries").is_err());
    }

    #[test]
    fn test_tier_keys_are_uppercased() {
        assert_eq!(Category::Tier.normalize_key(" uber "), "UBER");
        assert_eq!(Category::Species.normalize_key("PikaChu"), "pikachu");
    }

    #[test]
    fn test_only_grouping_categories_list() {
        let listing: Vec<Category> = Category::iter().filter(|c| c.supports_listing()).collect();
        assert_eq!(listing, vec![Category::Type, Category::Tier, Category::EggGroup]);
    }

    #[test]
    fn test_every_dataset_has_a_distinct_file() {
        let mut names: Vec<&str> = Dataset::iter().map(Dataset::file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Dataset::iter().count());
    }
}
