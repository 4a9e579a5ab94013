//! Catalog data source abstract Trait

use async_trait::async_trait;

use crate::types::{Pokemon, PokemonList, Resource};

/// Catalog repository Trait
///
/// Implementations translate every transport failure into
/// [`Resource::Error`]; neither method can fail any other way.
///
/// Platform implementation:
/// - [`PokeRepository`](crate::services::PokeRepository) (PokeAPI over HTTP)
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Fetch one page of the catalog
    ///
    /// # Arguments
    /// * `limit` - Page size
    /// * `offset` - Entries to skip
    async fn fetch_list(&self, limit: u32, offset: u32) -> Resource<PokemonList>;

    /// Fetch a single record
    ///
    /// # Arguments
    /// * `name` - Pokémon name, any casing
    async fn fetch_by_name(&self, name: &str) -> Resource<Pokemon>;
}
