//! `PokeApi` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::encode_path_segment;
use crate::traits::PokeApi;
use crate::types::{ListParams, Pokemon, PokemonList};

use super::{MAX_PAGE_LIMIT, PokeApiClient};

#[async_trait]
impl PokeApi for PokeApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_pokemon(&self, params: &ListParams) -> Result<PokemonList> {
        let params = params.validated(MAX_PAGE_LIMIT);
        self.get_json(
            "pokemon",
            "pokemon",
            &[
                ("limit", params.limit.to_string()),
                ("offset", params.offset.to_string()),
            ],
        )
        .await
    }

    async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let segment = encode_path_segment("name", name)?;
        self.get_json("pokemon/{name}", &format!("pokemon/{segment}"), &[])
            .await
    }
}
