//! Trait definition module
//!
//! Seams between the controllers and the data source, so platform layers
//! (and tests) can substitute their own implementation.

mod pokemon_repository;

pub use pokemon_repository::PokemonRepository;
