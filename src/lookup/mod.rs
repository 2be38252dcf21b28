//! The reference-data lookup engine.
//!
//! A lookup takes a [`Category`] and a free-text key, resolves it against the category's
//! dataset and returns one or more [`Page`]s. Dataset failures are logged here, at the
//! category boundary, and reported to the caller only as [`LookupError::DataUnavailable`].

mod breeding;
mod details;
mod groups;
mod species;

pub use species::{evolution_chain, MAX_EVOLUTION_DEPTH};

use crate::datastore::DataStore;
use crate::errors::{DataResult, LookupError, LookupResult};
use crate::page::Page;
use schema::{
    AbilityTable, Category, EggGroupTable, EggMoveTable, MoveTable, SpeciesTable, TierTable,
    TypeTable,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Query token that lists every key of a category instead of looking one up.
pub const WILDCARD: &str = "all";

pub const LOCATIONS_PER_PAGE: usize = 25;
pub const LEARNABLE_MOVES_PER_PAGE: usize = 40;
/// Species listed per follow-up page of an ability or move.
pub const SPECIES_PER_PAGE: usize = 30;
/// Breeding chains shown per egg move; the rest are dropped.
pub const CHAINS_PER_EGG_MOVE: usize = 30;

pub struct LookupEngine {
    store: DataStore,
}

impl LookupEngine {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Resolves `key` within `category`.
    ///
    /// `"all"` (any casing) lists the category's keys when the category supports
    /// listing; for other categories it is looked up like any other name.
    pub fn lookup(&self, category: Category, key: &str) -> LookupResult<Vec<Page>> {
        let normalized = category.normalize_key(key);
        debug!(%category, key = %normalized, "lookup");

        if category.supports_listing() && normalized.eq_ignore_ascii_case(WILDCARD) {
            return self.list(category).map(|page| vec![page]);
        }

        let pages = match category {
            Category::Species => {
                let table: Arc<SpeciesTable> = self.table(category)?;
                table.get(&normalized).map(|record| vec![species::species_page(record)])
            }
            Category::Locations => {
                let table: Arc<SpeciesTable> = self.table(category)?;
                table.get(&normalized).map(species::location_pages)
            }
            Category::LearnableMoves => {
                let table: Arc<SpeciesTable> = self.table(category)?;
                table.get(&normalized).map(species::learnable_move_pages)
            }
            Category::Type => {
                let table: Arc<TypeTable> = self.table(category)?;
                table
                    .get(&normalized)
                    .map(|record| vec![groups::type_page(&normalized, record)])
            }
            Category::Tier => {
                let table: Arc<TierTable> = self.table(category)?;
                table
                    .get(&normalized)
                    .map(|members| vec![groups::tier_page(&normalized, members)])
            }
            Category::EggGroup => {
                let table: Arc<EggGroupTable> = self.table(category)?;
                groups::find_egg_group(&table, &normalized)
                    .map(|record| vec![groups::egg_group_page(record)])
            }
            Category::EggMoves => {
                let table: Arc<EggMoveTable> = self.table(category)?;
                table.get(&normalized).map(breeding::egg_move_pages)
            }
            Category::Ability => {
                let table: Arc<AbilityTable> = self.table(category)?;
                table.get(&normalized).map(details::ability_pages)
            }
            Category::Move => {
                let table: Arc<MoveTable> = self.table(category)?;
                table.get(&normalized).map(details::move_pages)
            }
        };

        match pages {
            Some(pages) if !pages.is_empty() => Ok(pages),
            _ => Err(LookupError::not_found(category, shown_key(category, key, &normalized))),
        }
    }

    /// The single page produced by the `all` wildcard.
    fn list(&self, category: Category) -> LookupResult<Page> {
        let keys: Vec<String> = match category {
            Category::Type => {
                let table: Arc<TypeTable> = self.table(category)?;
                table.keys().map(str::to_string).collect()
            }
            Category::Tier => {
                let table: Arc<TierTable> = self.table(category)?;
                table.keys().map(str::to_string).collect()
            }
            Category::EggGroup => {
                let table: Arc<EggGroupTable> = self.table(category)?;
                groups::egg_group_names(&table)
            }
            _ => return Err(LookupError::not_found(category, WILDCARD)),
        };
        Ok(groups::listing_page(category, keys))
    }

    /// Loads the dataset behind `category`.
    fn table<T>(&self, category: Category) -> LookupResult<Arc<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        guard(category, self.store.load(category.dataset()))
    }
}

/// Turns a dataset failure into the caller-facing error, logging the real cause.
fn guard<T>(category: Category, loaded: DataResult<T>) -> LookupResult<T> {
    loaded.map_err(|source| {
        error!(%category, error = %source, "could not load dataset");
        LookupError::DataUnavailable { category, source }
    })
}

/// The key echoed back in a not-found reply. Egg-move replies show the normalized key.
fn shown_key<'a>(category: Category, raw: &'a str, normalized: &'a str) -> &'a str {
    match category {
        Category::EggMoves => normalized,
        _ => raw.trim(),
    }
}
