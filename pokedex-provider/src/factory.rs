//! Client factory

use std::sync::Arc;

use crate::error::Result;
use crate::providers::PokeApiClient;
use crate::traits::PokeApi;
use crate::types::ClientOptions;

/// Creates a [`PokeApi`] client from connection options.
///
/// The client is wrapped in `Arc<dyn PokeApi>` so a single instance can be
/// shared by every controller of an application.
///
/// # Examples
///
/// ```rust,no_run
/// use pokedex_provider::{create_client, ClientOptions, PokeApi};
///
/// let api = create_client(&ClientOptions::default()).unwrap();
/// assert_eq!(api.base_url(), "https://pokeapi.co/api/v2");
/// ```
pub fn create_client(options: &ClientOptions) -> Result<Arc<dyn PokeApi>> {
    Ok(Arc::new(PokeApiClient::new(options)?))
}
