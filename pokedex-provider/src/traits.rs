use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ListParams, Pokemon, PokemonList};

/// Remote Pokédex API
///
/// Declarative description of the two endpoints the catalog needs. Pure
/// transport: implementations send the request, classify the failure and
/// deserialize the body, nothing else.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Base URL requests are issued against, without a trailing slash
    fn base_url(&self) -> &str;

    /// `GET /pokemon?limit={limit}&offset={offset}`
    async fn list_pokemon(&self, params: &ListParams) -> Result<PokemonList>;

    /// `GET /pokemon/{name}`
    ///
    /// The name is sent as given; callers normalize casing.
    async fn get_pokemon(&self, name: &str) -> Result<Pokemon>;
}
