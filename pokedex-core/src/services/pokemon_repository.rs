//! PokeAPI-backed catalog repository

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_provider::{ApiError, ListParams, PokeApi};

use crate::traits::PokemonRepository;
use crate::types::{Pokemon, PokemonList, Resource, UNKNOWN_ERROR_MESSAGE};

/// Repository over a [`PokeApi`] client.
///
/// The only place transport errors are translated: each one is logged with
/// its detail and then collapsed into [`UNKNOWN_ERROR_MESSAGE`].
pub struct PokeRepository {
    api: Arc<dyn PokeApi>,
}

impl PokeRepository {
    #[must_use]
    pub fn new(api: Arc<dyn PokeApi>) -> Self {
        Self { api }
    }
}

fn collapse<T>(operation: &str, result: Result<T, ApiError>) -> Resource<T> {
    if let Err(e) = &result {
        if e.is_expected() {
            log::warn!("{operation} failed: {e}");
        } else {
            log::error!("{operation} failed: {e}");
        }
    }
    Resource::from(result)
}

#[async_trait]
impl PokemonRepository for PokeRepository {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Resource<PokemonList> {
        let params = ListParams { limit, offset };
        let result = self.api.list_pokemon(&params).await;
        if let Ok(page) = &result {
            log::debug!(
                "Fetched {} entries at offset {offset} (count {})",
                page.results.len(),
                page.count
            );
        }
        collapse("fetch_list", result)
    }

    async fn fetch_by_name(&self, name: &str) -> Resource<Pokemon> {
        let name = name.trim().to_lowercase();
        collapse("fetch_by_name", self.api.get_pokemon(&name).await)
    }
}
