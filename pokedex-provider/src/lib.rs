//! # pokedex-provider
//!
//! Typed async client for the [PokeAPI](https://pokeapi.co/) REST service.
//!
//! Only the two endpoints a catalog browser needs are covered:
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `GET /pokemon?limit={limit}&offset={offset}` | [`PokeApi::list_pokemon`] |
//! | `GET /pokemon/{name}` | [`PokeApi::get_pokemon`] |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pokedex_provider::{create_client, ClientOptions, ListParams, PokeApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_client(&ClientOptions::default())?;
//!
//!     // First page of 20 entries
//!     let page = api.list_pokemon(&ListParams::for_page(0, 20)).await?;
//!     println!("{} entries in total", page.count);
//!
//!     let pikachu = api.get_pokemon("pikachu").await?;
//!     println!("#{} weighs {} kg", pikachu.id, pikachu.weight_kg());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`]: no response arrived
//! - [`ApiError::NotFound`]: HTTP 404, e.g. an unknown name
//! - [`ApiError::HttpStatus`]: any other non-success status
//! - [`ApiError::ParseError`]: the body did not match the expected shape
//!
//! Nothing is retried; callers re-issue the call if they want to.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ApiError, Result};

pub use factory::create_client;

pub use traits::PokeApi;

pub use types::{
    AbilitySlot, ClientOptions, DEFAULT_BASE_URL, ListParams, NamedResource, Pokemon,
    PokemonList, PokemonListResult, PokemonStat, PokemonTypeSlot, Sprites,
};

pub use providers::{MAX_PAGE_LIMIT, PokeApiClient};
