//! API client implementations

/// Shared utilities used by client implementations.
pub mod common;

mod pokeapi;

pub use pokeapi::{MAX_PAGE_LIMIT, PokeApiClient};
