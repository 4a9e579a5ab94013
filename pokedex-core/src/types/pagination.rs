//! Paginated list state
//!
//! Pure transitions; the list controller decides when to apply them and
//! publishes every result.

use pokedex_provider::PokemonList;
use serde::Serialize;

use super::ListEntry;

/// Entries per grid row in the catalog list.
pub const GRID_COLUMNS: usize = 2;

/// Observable state of the paginated catalog list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Index of the next page to fetch
    pub current_page: u32,
    /// Loaded entries, append-only
    pub items: Vec<ListEntry>,
    pub is_loading: bool,
    /// A non-blank search query is active
    pub is_searching: bool,
    pub end_reached: bool,
    /// Message of the last failed load, empty otherwise
    pub load_error: String,
    pub search_query: String,
}

impl PaginationState {
    /// Claim the single load slot.
    ///
    /// Returns the page index to fetch, or `None` when a load is already in
    /// flight or the end of the catalog was reached. State is unchanged on
    /// `None`.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.is_loading || self.end_reached {
            return None;
        }
        self.is_loading = true;
        Some(self.current_page)
    }

    /// Apply a successfully fetched page and release the load slot.
    ///
    /// `end_reached` is evaluated against the page index before it is
    /// incremented. Results whose URL carries no catalog number are skipped.
    /// Returns the number of entries appended.
    pub fn apply_page(&mut self, page: &PokemonList, page_size: u32, sprite_template: &str) -> usize {
        self.end_reached =
            u64::from(self.current_page) * u64::from(page_size) >= u64::from(page.count);

        let entries: Vec<ListEntry> = page
            .results
            .iter()
            .filter_map(|result| {
                let entry = ListEntry::from_result(result, sprite_template);
                if entry.is_none() {
                    log::warn!(
                        "Skipping list entry '{}': no catalog number in {}",
                        result.name,
                        result.url
                    );
                }
                entry
            })
            .collect();
        let appended = entries.len();

        self.current_page = self.current_page.saturating_add(1);
        self.load_error.clear();
        self.items.extend(entries);
        self.is_loading = false;
        appended
    }

    /// Record a failed load. Items and page index are kept so the same page
    /// can be retried.
    pub fn apply_error(&mut self, message: &str) {
        message.clone_into(&mut self.load_error);
        self.is_loading = false;
    }

    /// Release the load slot without changing anything else.
    pub fn finish_without_result(&mut self) {
        self.is_loading = false;
    }

    pub fn set_search(&mut self, query: &str) {
        query.clone_into(&mut self.search_query);
        self.is_searching = !query.trim().is_empty();
    }

    /// Entries matching the active search, or all entries when not searching.
    ///
    /// A query matches case-insensitively on the name, or exactly on the
    /// catalog number.
    pub fn visible_items(&self) -> impl Iterator<Item = &ListEntry> + '_ {
        let query = self.search_query.trim().to_lowercase();
        let searching = self.is_searching;
        self.items.iter().filter(move |entry| {
            !searching
                || entry.name.to_lowercase().contains(&query)
                || entry.number.to_string() == query
        })
    }

    /// Rows of the grid over the loaded entries.
    pub fn row_count(&self) -> usize {
        self.items.len().div_ceil(GRID_COLUMNS)
    }

    /// Whether showing grid row `visible_row` should trigger the next page.
    pub fn should_load_more(&self, visible_row: usize) -> bool {
        visible_row >= self.row_count().saturating_sub(1)
            && !self.end_reached
            && !self.is_loading
            && !self.is_searching
    }
}
