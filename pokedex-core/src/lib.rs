//! Pokedex Core Library
//!
//! Platform-independent catalog logic for a Pokédex browser:
//! - Repository (`PokeRepository`): the single point where transport errors
//!   become [`Resource::Error`]
//! - Paginated list (`PokemonListController`): append-only paging with end
//!   detection and a non-destructive search filter
//! - Detail (`PokemonDetailController`): one record by name
//! - Theming: dominant color of a sprite (`palette`), type and stat colors
//!   (`utils`)
//!
//! Controllers publish their state through `tokio::sync::watch` channels and
//! never fail; a fetch error is stored in state and can be retried.
//!
//! ```no_run
//! use pokedex_core::{PokedexConfig, ServiceContext};
//!
//! # async fn run() -> pokedex_core::CoreResult<()> {
//! let config = PokedexConfig::default().with_env_overrides()?;
//! let ctx = ServiceContext::from_config(config)?;
//!
//! let list = ctx.launch_list_controller();
//! let mut updates = list.subscribe();
//! while updates.changed().await.is_ok() {
//!     let state = updates.borrow_and_update().clone();
//!     if !state.is_loading {
//!         println!("{} entries loaded", state.items.len());
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod palette;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::PokedexConfig;
pub use error::{CoreError, CoreResult};
pub use services::{
    LoadOutcome, PokeRepository, PokemonDetailController, PokemonListController, ServiceContext,
};
pub use traits::PokemonRepository;
pub use types::{Color, ListEntry, PaginationState, Resource};
