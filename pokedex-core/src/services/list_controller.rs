//! Paginated catalog list controller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::PokedexConfig;
use crate::traits::PokemonRepository;
use crate::types::{ListEntry, PaginationState, Resource};

/// Result of one `load_next_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A load was already in flight, the end was reached, or the controller
    /// is disposed. Nothing was requested.
    Skipped,
    /// The page was appended; carries the number of new entries.
    Appended(usize),
    /// The fetch failed; carries the message stored in `load_error`.
    Failed(String),
    /// The controller was disposed while the fetch was in flight.
    Discarded,
}

/// Drives pagination over a [`PokemonRepository`].
///
/// Cheap to clone; clones share one state. At most one page fetch is in
/// flight at a time: the `is_loading` check-and-set is a single atomic
/// update of the watch channel.
#[derive(Clone)]
pub struct PokemonListController {
    inner: Arc<ListInner>,
}

struct ListInner {
    repository: Arc<dyn PokemonRepository>,
    page_size: u32,
    sprite_template: String,
    state: watch::Sender<PaginationState>,
    disposed: AtomicBool,
}

impl PokemonListController {
    /// Create an idle controller. Nothing is fetched until
    /// [`load_next_page`](Self::load_next_page) is called.
    #[must_use]
    pub fn new(repository: Arc<dyn PokemonRepository>, config: &PokedexConfig) -> Self {
        let (state, _) = watch::channel(PaginationState::default());
        Self {
            inner: Arc::new(ListInner {
                repository,
                page_size: config.page_size,
                sprite_template: config.sprite_url_template.clone(),
                state,
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Create a controller and start loading the first page in the background.
    ///
    /// Outside a tokio runtime the controller is returned idle and the first
    /// page has to be requested with [`load_next_page`](Self::load_next_page).
    #[must_use]
    pub fn launch(repository: Arc<dyn PokemonRepository>, config: &PokedexConfig) -> Self {
        let controller = Self::new(repository, config);
        match Handle::try_current() {
            Ok(_) => drop(controller.spawn_load_next_page()),
            Err(e) => log::warn!("List controller launched without a runtime, staying idle: {e}"),
        }
        controller
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PaginationState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<PaginationState> {
        self.inner.state.subscribe()
    }

    /// Entries matching the current search
    pub fn visible_items(&self) -> Vec<ListEntry> {
        self.inner.state.borrow().visible_items().cloned().collect()
    }

    /// Fetch and append the next page.
    ///
    /// A no-op while another load is in flight or once the end of the
    /// catalog was reached. A failure leaves items and page index untouched.
    pub async fn load_next_page(&self) -> LoadOutcome {
        if self.is_disposed() {
            return LoadOutcome::Skipped;
        }

        let mut claimed = None;
        self.inner.state.send_if_modified(|state| {
            claimed = state.begin_load();
            claimed.is_some()
        });
        let Some(page_index) = claimed else {
            return LoadOutcome::Skipped;
        };
        let slot = LoadSlot::new(&self.inner.state);

        let limit = self.inner.page_size;
        let offset = page_index.saturating_mul(limit);
        log::debug!("Loading page {page_index} (limit {limit}, offset {offset})");

        let resource = self.inner.repository.fetch_list(limit, offset).await;

        if self.is_disposed() {
            log::debug!("Discarding page {page_index}: controller disposed");
            return LoadOutcome::Discarded;
        }

        slot.release_with(|state| match resource {
            Resource::Success(page) => {
                let appended = state.apply_page(&page, limit, &self.inner.sprite_template);
                if state.end_reached {
                    log::info!("End of catalog reached after {} entries", state.items.len());
                }
                LoadOutcome::Appended(appended)
            }
            Resource::Error { message, .. } => {
                log::info!("Page {page_index} failed: {message}");
                state.apply_error(&message);
                LoadOutcome::Failed(message)
            }
            Resource::Loading => {
                state.finish_without_result();
                LoadOutcome::Skipped
            }
        })
    }

    /// [`load_next_page`](Self::load_next_page) on a background task.
    pub fn spawn_load_next_page(&self) -> JoinHandle<LoadOutcome> {
        let controller = self.clone();
        tokio::spawn(async move { controller.load_next_page().await })
    }

    /// Retry the step that failed.
    pub async fn retry(&self) -> LoadOutcome {
        self.load_next_page().await
    }

    /// Filter the visible entries. Loaded items are never modified; a blank
    /// query clears the filter.
    pub fn search(&self, query: &str) {
        self.inner.state.send_if_modified(|state| {
            if state.search_query == query {
                return false;
            }
            state.set_search(query);
            true
        });
    }

    /// Whether displaying grid row `visible_row` should load the next page.
    pub fn should_load_more(&self, visible_row: usize) -> bool {
        !self.is_disposed() && self.inner.state.borrow().should_load_more(visible_row)
    }

    /// Ignore every later result. Idempotent.
    pub fn dispose(&self) {
        if !self.inner.disposed.swap(true, Ordering::SeqCst) {
            log::debug!("List controller disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }
}

/// Claimed `is_loading` slot of one page load.
///
/// Released on drop, so a load whose future is dropped mid-fetch (aborted
/// task, `select!`, timeout) leaves the list retryable.
struct LoadSlot<'a> {
    state: &'a watch::Sender<PaginationState>,
    armed: bool,
}

impl<'a> LoadSlot<'a> {
    fn new(state: &'a watch::Sender<PaginationState>) -> Self {
        Self { state, armed: true }
    }

    /// Apply the result of the load and release the slot in the same update.
    fn release_with(mut self, apply: impl FnOnce(&mut PaginationState) -> LoadOutcome) -> LoadOutcome {
        self.armed = false;
        let mut outcome = LoadOutcome::Skipped;
        self.state.send_modify(|state| outcome = apply(state));
        outcome
    }
}

impl Drop for LoadSlot<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::debug!("Page load dropped before completing, releasing the slot");
            self.state.send_modify(PaginationState::finish_without_result);
        }
    }
}
