// PokeMMO Dex Schema - Shared dataset definitions
// This crate contains the record types for every reference dataset the bot reads,
// plus the category and dataset enums shared by the lookup engine and the binaries.

// Re-export the main types
pub use categories::*;
pub use reference_data::*;
pub use species_data::*;
pub use table::Table;

pub mod categories;
pub mod reference_data;
pub mod species_data;
pub mod table;
