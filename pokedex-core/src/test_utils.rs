//! Test helper module
//!
//! Scripted mocks for both seams plus fixture builders.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use pokedex_provider::{ApiError, ListParams, PokeApi, Result as ApiResult};
use tokio::sync::{Mutex, Notify};

use crate::traits::PokemonRepository;
use crate::types::{Pokemon, PokemonList, PokemonListResult, Resource, Sprites};

// ===== Fixtures =====

/// A list page whose entries are `pokemon-{n}` with canonical resource URLs.
pub fn list_page(count: u32, numbers: impl IntoIterator<Item = u32>) -> PokemonList {
    let results = numbers
        .into_iter()
        .map(|n| PokemonListResult {
            name: format!("pokemon-{n}"),
            url: format!("https://pokeapi.co/api/v2/pokemon/{n}/"),
        })
        .collect();
    PokemonList {
        count,
        next: None,
        previous: None,
        results,
    }
}

/// A list page with explicit names.
pub fn named_page(count: u32, entries: &[(&str, u32)]) -> PokemonList {
    let mut page = list_page(count, entries.iter().map(|(_, n)| *n));
    for (result, (name, _)) in page.results.iter_mut().zip(entries) {
        (*name).clone_into(&mut result.name);
    }
    page
}

/// A minimal detail record.
pub fn pokemon(name: &str, id: u32) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 4,
        weight: 60,
        base_experience: None,
        order: None,
        types: Vec::new(),
        stats: Vec::new(),
        abilities: Vec::new(),
        sprites: Sprites::default(),
    }
}

// ===== MockRepository =====

/// Repository serving scripted responses in order.
///
/// When the script runs dry, calls resolve to an error. With a gate set,
/// every call parks after being recorded until the gate is notified.
#[derive(Default)]
pub struct MockRepository {
    list_responses: Mutex<VecDeque<Resource<PokemonList>>>,
    detail_responses: Mutex<VecDeque<Resource<Pokemon>>>,
    list_calls: Mutex<Vec<(u32, u32)>>,
    detail_calls: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub async fn push_list(&self, response: Resource<PokemonList>) {
        self.list_responses.lock().await.push_back(response);
    }

    pub async fn push_detail(&self, response: Resource<Pokemon>) {
        self.detail_responses.lock().await.push_back(response);
    }

    /// `(limit, offset)` of every `fetch_list` call
    pub async fn list_calls(&self) -> Vec<(u32, u32)> {
        self.list_calls.lock().await.clone()
    }

    pub async fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().await.clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl PokemonRepository for MockRepository {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Resource<PokemonList> {
        self.list_calls.lock().await.push((limit, offset));
        self.pass_gate().await;
        self.list_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Resource::error("no scripted list response"))
    }

    async fn fetch_by_name(&self, name: &str) -> Resource<Pokemon> {
        self.detail_calls.lock().await.push(name.to_string());
        self.pass_gate().await;
        self.detail_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Resource::error("no scripted detail response"))
    }
}

// ===== MockPokeApi =====

/// API client serving scripted results in order.
pub struct MockPokeApi {
    list_results: Mutex<VecDeque<ApiResult<PokemonList>>>,
    detail_results: Mutex<VecDeque<ApiResult<Pokemon>>>,
    list_calls: Mutex<Vec<ListParams>>,
    detail_calls: Mutex<Vec<String>>,
}

impl MockPokeApi {
    pub fn new() -> Self {
        Self {
            list_results: Mutex::new(VecDeque::new()),
            detail_results: Mutex::new(VecDeque::new()),
            list_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn push_list(&self, result: ApiResult<PokemonList>) {
        self.list_results.lock().await.push_back(result);
    }

    pub async fn push_detail(&self, result: ApiResult<Pokemon>) {
        self.detail_results.lock().await.push_back(result);
    }

    pub async fn list_calls(&self) -> Vec<ListParams> {
        self.list_calls.lock().await.clone()
    }

    pub async fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().await.clone()
    }
}

fn exhausted(endpoint: &str) -> ApiError {
    ApiError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: "no scripted result".to_string(),
    }
}

#[async_trait]
impl PokeApi for MockPokeApi {
    fn base_url(&self) -> &str {
        "http://mock.invalid/api/v2"
    }

    async fn list_pokemon(&self, params: &ListParams) -> ApiResult<PokemonList> {
        self.list_calls.lock().await.push(*params);
        self.list_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("list_pokemon")))
    }

    async fn get_pokemon(&self, name: &str) -> ApiResult<Pokemon> {
        self.detail_calls.lock().await.push(name.to_string());
        self.detail_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("get_pokemon")))
    }
}
