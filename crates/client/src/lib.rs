//! Query coordination for inventory list screens.
//!
//! Three pieces cooperate per entity (products, brands, categories):
//!
//! - [`ListQueryController`] owns the draft search text, equality filters,
//!   and pagination cursor, and turns every logical change into exactly one
//!   dispatched fetch (search edits debounced, everything else immediate).
//! - [`ListResultStore`] receives the responses as tagged load actions and
//!   replaces the page atomically, discarding out-of-order stale responses
//!   by sequence number.
//! - [`ApiClient`] is the typed REST surface, mapping wire records to
//!   display rows and HTTP failures to the [`ClientError`] taxonomy.
//!
//! Flow: input → controller → `Fetch` collaborator → API →
//! `{data, pagination}` → row transform → result store → caller.

pub mod api;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod query;
pub mod records;
pub mod rows;
pub mod store;

pub use api::{ApiClient, ChildrenQuery, ProductFetcher, TreeRecordFetcher};
pub use controller::{ControllerOptions, Fetch, FilterField, ListQueryController};
pub use error::{ClientError, ClientResult};
pub use query::{ListQuery, Pagination, SortBy, SortOrder};
pub use rows::{FilterOption, ProductRow, ProductStatus, RecordRef, TreeRecordRow};
pub use store::{ListResultStore, LoadAction, Phase, SharedResultStore};
