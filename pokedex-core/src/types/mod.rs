//! Type definition module

mod color;
mod list_entry;
mod pagination;
mod resource;

pub use color::Color;
pub use list_entry::{extract_number, ListEntry};
pub use pagination::{PaginationState, GRID_COLUMNS};
pub use resource::{Resource, UNKNOWN_ERROR_MESSAGE};

// Re-export wire types from the client library
pub use pokedex_provider::{
    AbilitySlot, ListParams, NamedResource, Pokemon, PokemonList, PokemonListResult,
    PokemonStat, PokemonTypeSlot, Sprites,
};
