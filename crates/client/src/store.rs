//! Result-set state container for one list screen.
//!
//! A pure reducer over tagged load actions. The driver applies `Started`
//! at dispatch time and `Succeeded`/`Failed` at resolution time; the store
//! compares sequence numbers so a late response for a superseded request
//! can never overwrite a newer one.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::query::Pagination;
use crate::rows::{ProductRow, ProductStatus};

/// Load phase of the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    /// The message stays until the next successful load; the previous
    /// payload is left visible underneath.
    Error(String),
}

/// Tagged load actions. `seq` is the monotonic sequence number assigned at
/// dispatch time.
#[derive(Debug, Clone)]
pub enum LoadAction<T> {
    Started {
        seq: u64,
    },
    Succeeded {
        seq: u64,
        items: Vec<T>,
        pagination: Pagination,
    },
    Failed {
        seq: u64,
        message: String,
    },
}

/// Shared handle to a result store.
pub type SharedResultStore<T> = Arc<RwLock<ListResultStore<T>>>;

/// The result set and pagination metadata for one list screen.
#[derive(Debug)]
pub struct ListResultStore<T> {
    phase: Phase,
    items: Vec<T>,
    pagination: Pagination,
    latest_seq: u64,
}

impl<T> Default for ListResultStore<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            items: Vec::new(),
            pagination: Pagination::default(),
            latest_seq: 0,
        }
    }
}

impl<T> ListResultStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh shared handle.
    pub fn shared() -> SharedResultStore<T> {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Apply one load action. Actions whose `seq` is older than the latest
    /// observed sequence are ignored — last request wins regardless of
    /// response arrival order.
    pub fn apply(&mut self, action: LoadAction<T>) {
        match action {
            LoadAction::Started { seq } => {
                if seq < self.latest_seq {
                    return;
                }
                self.latest_seq = seq;
                self.phase = Phase::Loading;
            }
            LoadAction::Succeeded {
                seq,
                items,
                pagination,
            } => {
                if seq < self.latest_seq {
                    return;
                }
                // Replacement, not merge: the page is the whole result set.
                self.items = items;
                self.pagination = pagination;
                self.phase = Phase::Loaded;
            }
            LoadAction::Failed { seq, message } => {
                if seq < self.latest_seq {
                    return;
                }
                // Payload untouched: stale data stays on screen.
                self.phase = Phase::Error(message);
            }
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// 1-based index of the first row on screen; 0 when the set is empty.
    pub fn display_start(&self) -> u64 {
        if self.pagination.total > 0 {
            u64::from(self.pagination.offset) + 1
        } else {
            0
        }
    }

    /// 1-based index of the last row on screen.
    pub fn display_end(&self) -> u64 {
        (u64::from(self.pagination.offset) + u64::from(self.pagination.limit))
            .min(self.pagination.total)
    }

    pub fn next_disabled(&self) -> bool {
        u64::from(self.pagination.offset) + u64::from(self.pagination.limit)
            >= self.pagination.total
    }

    pub fn previous_disabled(&self) -> bool {
        self.pagination.offset == 0
    }
}

impl ListResultStore<ProductRow> {
    /// Returnable products on the current page.
    ///
    /// Display approximation by design: recomputed from the freshly loaded
    /// page only, not a global aggregate over the full filtered set.
    pub fn returnable_count(&self) -> usize {
        self.items
            .iter()
            .filter(|p| p.status == ProductStatus::Returnable)
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn page(total: u64) -> Pagination {
        Pagination {
            limit: 10,
            offset: 0,
            total,
        }
    }

    #[test]
    fn lifecycle_idle_loading_loaded() {
        let mut store: ListResultStore<u32> = ListResultStore::new();
        assert_eq!(*store.phase(), Phase::Idle);

        store.apply(LoadAction::Started { seq: 1 });
        assert!(store.is_loading());

        store.apply(LoadAction::Succeeded {
            seq: 1,
            items: vec![10, 20],
            pagination: page(2),
        });
        assert_eq!(*store.phase(), Phase::Loaded);
        assert_eq!(store.items(), &[10, 20]);
    }

    #[test]
    fn failure_keeps_previous_payload_visible() {
        let mut store: ListResultStore<u32> = ListResultStore::new();
        store.apply(LoadAction::Started { seq: 1 });
        store.apply(LoadAction::Succeeded {
            seq: 1,
            items: vec![10],
            pagination: page(1),
        });

        store.apply(LoadAction::Started { seq: 2 });
        store.apply(LoadAction::Failed {
            seq: 2,
            message: "network error".to_string(),
        });

        assert_eq!(store.error_message(), Some("network error"));
        assert_eq!(store.items(), &[10]);
        assert_eq!(store.pagination().total, 1);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut store: ListResultStore<u32> = ListResultStore::new();
        store.apply(LoadAction::Started { seq: 1 });
        store.apply(LoadAction::Started { seq: 2 });

        // Request 1 resolves after request 2 was dispatched.
        store.apply(LoadAction::Succeeded {
            seq: 1,
            items: vec![99],
            pagination: page(1),
        });
        assert!(store.is_loading(), "stale success must not land");
        assert!(store.items().is_empty());

        store.apply(LoadAction::Succeeded {
            seq: 2,
            items: vec![1],
            pagination: page(1),
        });
        assert_eq!(store.items(), &[1]);

        // A stale failure is equally ignored.
        store.apply(LoadAction::Failed {
            seq: 1,
            message: "late timeout".to_string(),
        });
        assert_eq!(*store.phase(), Phase::Loaded);
    }

    #[test]
    fn display_range_and_button_states() {
        let mut store: ListResultStore<u32> = ListResultStore::new();

        // Empty set: 0-0, both buttons disabled.
        assert_eq!(store.display_start(), 0);
        assert_eq!(store.display_end(), 0);
        assert!(store.next_disabled());
        assert!(store.previous_disabled());

        // Middle page: limit 10, offset 10, total 25 → rows 11-20.
        store.apply(LoadAction::Started { seq: 1 });
        store.apply(LoadAction::Succeeded {
            seq: 1,
            items: vec![0; 10],
            pagination: Pagination {
                limit: 10,
                offset: 10,
                total: 25,
            },
        });
        assert_eq!(store.display_start(), 11);
        assert_eq!(store.display_end(), 20);
        assert!(!store.next_disabled());
        assert!(!store.previous_disabled());

        // Last, short page: offset 20, total 25 → rows 21-25, next disabled.
        store.apply(LoadAction::Started { seq: 2 });
        store.apply(LoadAction::Succeeded {
            seq: 2,
            items: vec![0; 5],
            pagination: Pagination {
                limit: 10,
                offset: 20,
                total: 25,
            },
        });
        assert_eq!(store.display_start(), 21);
        assert_eq!(store.display_end(), 25);
        assert!(store.next_disabled());
        assert!(!store.previous_disabled());
    }

    #[test]
    fn returnable_count_reflects_current_page_only() {
        use crate::records::ApiRecord;
        use crate::rows::ProductRow;

        let row = |returnable: bool| {
            let record: ApiRecord = serde_json::from_value(serde_json::json!({
                "id": 1,
                "isReturnable": returnable
            }))
            .unwrap();
            ProductRow::from_api(&record)
        };

        let mut store = ListResultStore::new();
        store.apply(LoadAction::Started { seq: 1 });
        store.apply(LoadAction::Succeeded {
            seq: 1,
            items: vec![row(true), row(false), row(true)],
            // total says 40 products exist; the count still only sees 3.
            pagination: Pagination {
                limit: 3,
                offset: 0,
                total: 40,
            },
        });
        assert_eq!(store.returnable_count(), 2);
    }
}
