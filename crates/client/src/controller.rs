//! Per-entity list query coordination.
//!
//! The controller owns the draft search text, the equality filters, and the
//! pagination cursor, and turns every logical change into exactly one
//! dispatched fetch. Search edits ride a quiet-period timer; filter changes
//! and page moves dispatch immediately. Every dispatch carries a monotonic
//! sequence number so the result store can discard responses that resolve
//! after a newer request was issued.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::debounce::Debouncer;
use crate::query::{DEFAULT_LIMIT, ListQuery, SEARCH_DEBOUNCE, SortBy, SortOrder};
use crate::store::{LoadAction, SharedResultStore};

/// Dispatch target for composed list queries.
///
/// Implementations perform the request asynchronously and resolve it into
/// the shared result store under the same `seq`. `fetch` must not block and
/// must not call back into the controller synchronously.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self, seq: u64, query: ListQuery);
}

/// Which equality filter to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    Category,
}

/// Tunables for one list screen.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Quiet period for search-as-you-type.
    pub debounce: Duration,

    /// Minimum committed search length; 0 disables the rule. The products
    /// screen uses [`crate::query::MIN_SEARCH_LEN`].
    pub min_search_len: usize,

    pub limit: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: SEARCH_DEBOUNCE,
            min_search_len: 0,
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

struct Inner {
    draft_search: String,
    committed_search: Option<String>,
    validation: Option<String>,
    brand_id: Option<String>,
    category_id: Option<String>,
    offset: u32,
    next_seq: u64,
    search_generation: u64,
    debounce: Debouncer,
}

/// Query coordinator for one list screen.
pub struct ListQueryController<T, F> {
    inner: Arc<Mutex<Inner>>,
    store: SharedResultStore<T>,
    fetcher: Arc<F>,
    options: ControllerOptions,
}

impl<T, F> Clone for ListQueryController<T, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            store: Arc::clone(&self.store),
            fetcher: Arc::clone(&self.fetcher),
            options: self.options.clone(),
        }
    }
}

impl<T, F> ListQueryController<T, F>
where
    T: Send + Sync + 'static,
    F: Fetch,
{
    /// Construction arms nothing: the mount-time load is the caller's
    /// explicit [`refresh`](Self::refresh).
    pub fn new(fetcher: Arc<F>, store: SharedResultStore<T>, options: ControllerOptions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                draft_search: String::new(),
                committed_search: None,
                validation: None,
                brand_id: None,
                category_id: None,
                offset: 0,
                next_seq: 1,
                search_generation: 0,
                debounce: Debouncer::new(),
            })),
            store,
            fetcher,
            options,
        }
    }

    /// Unconditional fetch of the current query: the mount-time load, and
    /// the resync after every successful write.
    pub fn refresh(&self) {
        let mut inner = self.inner.lock();
        self.dispatch(&mut inner);
    }

    /// Record a keystroke and (re)arm the quiet-period timer. Only the text
    /// present when the timer fires is committed and fetched; a burst of
    /// edits collapses to one request.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.draft_search = text.into();
        inner.search_generation += 1;

        let generation = inner.search_generation;
        let controller = self.clone();
        let quiet = self.options.debounce;
        inner.debounce.arm(quiet, async move {
            controller.commit_search(generation);
        });
    }

    fn commit_search(&self, generation: u64) {
        let mut inner = self.inner.lock();
        // A keystroke that raced the timer wins; its own timer is pending.
        if generation != inner.search_generation {
            return;
        }

        let trimmed = inner.draft_search.trim().to_string();
        if trimmed.is_empty() {
            inner.committed_search = None;
            inner.validation = None;
        } else if self.options.min_search_len > 0
            && trimmed.chars().count() < self.options.min_search_len
        {
            // Too short to search: drop `q` but still fetch with the other
            // filters, surfacing the message locally.
            inner.committed_search = None;
            inner.validation = Some(format!(
                "Enter at least {} characters to search",
                self.options.min_search_len
            ));
        } else {
            inner.committed_search = Some(trimmed);
            inner.validation = None;
        }

        inner.offset = 0;
        self.dispatch(&mut inner);
    }

    /// Set or clear an equality filter. Not debounced: fetches immediately,
    /// resetting the cursor to the first page while preserving the
    /// committed search text and the other filter.
    pub fn set_filter(&self, field: FilterField, value: Option<String>) {
        let mut inner = self.inner.lock();
        match field {
            FilterField::Brand => inner.brand_id = value,
            FilterField::Category => inner.category_id = value,
        }
        inner.offset = 0;
        self.dispatch(&mut inner);
    }

    /// Advance one page. A no-op on the last page.
    pub fn next_page(&self) {
        let total = self.store.read().pagination().total;
        let mut inner = self.inner.lock();
        if u64::from(inner.offset) + u64::from(self.options.limit) >= total {
            return;
        }
        inner.offset += self.options.limit;
        self.dispatch(&mut inner);
    }

    /// Step back one page. A no-op on the first page.
    pub fn previous_page(&self) {
        let mut inner = self.inner.lock();
        if inner.offset == 0 {
            return;
        }
        inner.offset = inner.offset.saturating_sub(self.options.limit);
        self.dispatch(&mut inner);
    }

    /// The locally surfaced search validation message, if any.
    pub fn validation_message(&self) -> Option<String> {
        self.inner.lock().validation.clone()
    }

    /// The draft search text as last typed.
    pub fn search_text(&self) -> String {
        self.inner.lock().draft_search.clone()
    }

    /// The query the next dispatch would send.
    pub fn current_query(&self) -> ListQuery {
        self.compose(&self.inner.lock())
    }

    fn compose(&self, inner: &Inner) -> ListQuery {
        ListQuery {
            search: inner.committed_search.clone(),
            limit: self.options.limit,
            offset: inner.offset,
            brand_id: inner.brand_id.clone(),
            category_id: inner.category_id.clone(),
            sort_by: self.options.sort_by,
            sort_order: self.options.sort_order,
        }
    }

    fn dispatch(&self, inner: &mut Inner) {
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let query = self.compose(inner);
        debug!(seq, offset = query.offset, search = ?query.search, "dispatching list fetch");
        self.store.write().apply(LoadAction::Started { seq });
        self.fetcher.fetch(seq, query);
    }
}
