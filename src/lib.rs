//! PokeMMO Dex
//!
//! Chat-bot command layer for PokeMMO: an in-game clock calculator and a lookup engine
//! over the community JSON datasets (species, types, PvP tiers, egg groups, egg moves,
//! abilities and moves), answering with paginated pages.

// --- MODULE DECLARATIONS ---
pub mod commands;
pub mod config;
pub mod datastore;
pub mod errors;
pub mod game_clock;
pub mod lookup;
pub mod page;
pub mod render;
pub mod text;

#[cfg(test)]
mod test_fixtures;

// --- PUBLIC API RE-EXPORTS ---

// Dataset records and lookup categories from the `schema` crate.
pub use schema::{Category, Dataset, SpeciesRecord, Table};

// Command surface.
pub use commands::{parse_command_line, ChannelGate, Command, Dispatcher, Invocation, Reply};
pub use config::Config;

// Data access and lookups.
pub use datastore::{DataStore, DatasetSource, FsSource, MemorySource};
pub use lookup::LookupEngine;
pub use page::{Page, Section};
pub use render::{render_page, render_reply, split_message};

// Game clock.
pub use game_clock::GameStatus;

// Crate-specific error and result types.
pub use errors::{ConfigError, DataError, DataResult, LookupError, LookupResult};
