//! Single-record detail controller

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::traits::PokemonRepository;
use crate::types::{Pokemon, Resource};

/// Loads one record by name and publishes it as a [`Resource`].
///
/// When several fetches overlap, only the most recently started one is
/// published.
#[derive(Clone)]
pub struct PokemonDetailController {
    inner: Arc<DetailInner>,
}

struct DetailInner {
    repository: Arc<dyn PokemonRepository>,
    state: watch::Sender<Resource<Pokemon>>,
    last_name: Mutex<Option<String>>,
    generation: AtomicU64,
    disposed: AtomicBool,
}

impl PokemonDetailController {
    #[must_use]
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        let (state, _) = watch::channel(Resource::Loading);
        Self {
            inner: Arc::new(DetailInner {
                repository,
                state,
                last_name: Mutex::new(None),
                generation: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Fetch `name` (lowercased), publishing `Loading` first and then the result.
    pub async fn fetch(&self, name: &str) -> Resource<Pokemon> {
        let name = name.to_lowercase();
        *self.last_name() = Some(name.clone());
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.is_disposed() {
            self.inner.state.send_replace(Resource::Loading);
        }

        let resource = self.inner.repository.fetch_by_name(&name).await;

        if self.is_disposed() {
            log::debug!("Discarding detail of '{name}': controller disposed");
        } else if self.inner.generation.load(Ordering::SeqCst) == generation {
            self.inner.state.send_replace(resource.clone());
        } else {
            log::debug!("Detail of '{name}' superseded by a newer request");
        }
        resource
    }

    /// Fetch the last requested name again. `None` if nothing was requested yet.
    pub async fn retry(&self) -> Option<Resource<Pokemon>> {
        let name = self.last_name().clone()?;
        Some(self.fetch(&name).await)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Resource<Pokemon> {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<Resource<Pokemon>> {
        self.inner.state.subscribe()
    }

    /// Ignore every later result. Idempotent.
    pub fn dispose(&self) {
        if !self.inner.disposed.swap(true, Ordering::SeqCst) {
            log::debug!("Detail controller disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }

    fn last_name(&self) -> MutexGuard<'_, Option<String>> {
        self.inner
            .last_name
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
