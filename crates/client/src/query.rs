//! Query composition for list requests.

use std::time::Duration;

use serde::Deserialize;

/// Quiet period before a search edit is committed and fetched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Minimum committed search length on screens that enforce one (products).
pub const MIN_SEARCH_LEN: usize = 3;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 10;

/// Sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Id,
    Code,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Code => "code",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Pagination metadata returned with every page. `total` counts the full
/// filtered set, independent of `limit` and `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            total: 0,
        }
    }
}

/// A composed list request: committed search text, equality filters, sort,
/// and the pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Committed, validated search text. `None` when empty or below the
    /// screen's minimum — the `q` parameter is omitted entirely.
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
            brand_id: None,
            category_id: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Wire query pairs for the request URL.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(q) = &self.search {
            params.push(("q", q.clone()));
        }
        if let Some(brand_id) = &self.brand_id {
            params.push(("brandId", brand_id.clone()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("categoryId", category_id.clone()));
        }
        params.push(("sortBy", self.sort_by.as_str().to_string()));
        params.push(("sortOrder", self.sort_order.as_str().to_string()));
        params
    }
}
