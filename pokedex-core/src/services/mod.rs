//! Catalog services: repository and the two screen controllers

mod detail_controller;
mod list_controller;
mod pokemon_repository;

pub use detail_controller::PokemonDetailController;
pub use list_controller::{LoadOutcome, PokemonListController};
pub use pokemon_repository::PokeRepository;

use std::sync::Arc;

use pokedex_provider::create_client;

use crate::config::PokedexConfig;
use crate::error::CoreResult;
use crate::traits::PokemonRepository;

/// Service context - holds all dependencies
///
/// The composition root: one repository shared by every controller it hands
/// out. Platform layers may inject their own repository through [`new`](Self::new).
pub struct ServiceContext {
    pub config: PokedexConfig,
    pub repository: Arc<dyn PokemonRepository>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(config: PokedexConfig, repository: Arc<dyn PokemonRepository>) -> Self {
        Self { config, repository }
    }

    /// Validate `config` and wire a PokeAPI-backed repository.
    pub fn from_config(config: PokedexConfig) -> CoreResult<Self> {
        config.validate()?;
        let api = create_client(&config.client_options())?;
        log::info!(
            "Catalog ready: {} (page size {})",
            api.base_url(),
            config.page_size
        );
        Ok(Self::new(config, Arc::new(PokeRepository::new(api))))
    }

    /// An idle list controller
    pub fn list_controller(&self) -> PokemonListController {
        PokemonListController::new(Arc::clone(&self.repository), &self.config)
    }

    /// A list controller already loading its first page
    pub fn launch_list_controller(&self) -> PokemonListController {
        PokemonListController::launch(Arc::clone(&self.repository), &self.config)
    }

    pub fn detail_controller(&self) -> PokemonDetailController {
        PokemonDetailController::new(Arc::clone(&self.repository))
    }
}
