//! List query parameters and the fixed search → filter → sort → paginate
//! pipeline applied by every list endpoint.

use serde::{Deserialize, Serialize};

/// Page size applied when a request omits `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// Sort field accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Id,
    Code,
}

/// Sort direction, ascending when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Flat query parameters shared by the three list endpoints.
///
/// `brand_id`, `category_id` and `status` only ever match products; on
/// hierarchical collections those filters exclude everything, which is what
/// a caller sending them there deserves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive substring search over `code` and `name`.
    pub q: Option<String>,

    /// Page size; defaults to [`DEFAULT_LIMIT`].
    pub limit: Option<u32>,

    /// Slice start; defaults to 0.
    pub offset: Option<u32>,

    /// `root=true` keeps only records with no parent snapshot.
    pub root: Option<bool>,

    /// Comma-separated code membership filter, case-insensitive.
    pub entity_codes: Option<String>,

    /// Comma-separated id membership filter. Entries that do not parse as
    /// ids never match.
    pub entity_ids: Option<String>,

    pub sort_by: SortBy,
    pub sort_order: SortOrder,

    /// Brand equality filter (products).
    pub brand_id: Option<u64>,

    /// Category equality filter (products).
    pub category_id: Option<u64>,

    /// `returnable` or `standard` (products).
    pub status: Option<String>,
}

/// Pagination metadata. `total` counts the full filtered set, independent
/// of `limit` and `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
}

/// One bounded slice of a filtered, sorted result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Access to the fields the list pipeline filters and sorts on.
pub trait Listable {
    fn id(&self) -> u64;
    fn code(&self) -> &str;
    fn name(&self) -> &str;

    /// Id of the parent snapshot, when the record has one.
    fn parent_id(&self) -> Option<u64>;

    /// Brand reference id. `None` on collections without one.
    fn brand_id(&self) -> Option<u64> {
        None
    }

    /// Category reference id. `None` on collections without one.
    fn category_id(&self) -> Option<u64> {
        None
    }

    /// Returnable flag. `None` on collections without one.
    fn returnable(&self) -> Option<bool> {
        None
    }
}

/// Run the full pipeline over a record set.
///
/// Pure over its inputs: calling twice with unchanged `records` yields
/// identical output.
pub fn process<T: Listable + Clone>(records: &[T], query: &ListQuery) -> Page<T> {
    let mut matched: Vec<&T> = records.iter().filter(|r| matches(*r, query)).collect();
    sort(&mut matched, query.sort_by, query.sort_order);

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = query.offset.unwrap_or(0);
    let total = matched.len() as u64;

    let data = matched
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    Page {
        data,
        pagination: Pagination {
            limit,
            offset,
            total,
        },
    }
}

fn matches<T: Listable>(record: &T, query: &ListQuery) -> bool {
    if let Some(q) = query.q.as_deref().filter(|q| !q.trim().is_empty()) {
        let needle = q.trim().to_lowercase();
        if !record.code().to_lowercase().contains(&needle)
            && !record.name().to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if query.root == Some(true) && record.parent_id().is_some() {
        return false;
    }

    if let Some(codes) = query.entity_codes.as_deref() {
        let code = record.code().to_lowercase();
        if !codes.split(',').any(|c| c.trim().to_lowercase() == code) {
            return false;
        }
    }

    if let Some(ids) = query.entity_ids.as_deref() {
        let id = record.id();
        if !ids
            .split(',')
            .filter_map(|raw| raw.trim().parse::<u64>().ok())
            .any(|candidate| candidate == id)
        {
            return false;
        }
    }

    if let Some(brand_id) = query.brand_id {
        if record.brand_id() != Some(brand_id) {
            return false;
        }
    }

    if let Some(category_id) = query.category_id {
        if record.category_id() != Some(category_id) {
            return false;
        }
    }

    if let Some(status) = query.status.as_deref() {
        let want_returnable = status.eq_ignore_ascii_case("returnable");
        if record.returnable() != Some(want_returnable) {
            return false;
        }
    }

    true
}

/// Stable sort; reversing the comparator (not the slice) keeps ties in
/// insertion order for both directions.
fn sort<T: Listable>(records: &mut [&T], by: SortBy, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = match by {
            SortBy::Id => a.id().cmp(&b.id()),
            SortBy::Code => a.code().to_lowercase().cmp(&b.code().to_lowercase()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec {
        id: u64,
        code: String,
        name: String,
        parent_id: Option<u64>,
    }

    impl Rec {
        fn new(id: u64, code: &str, name: &str, parent_id: Option<u64>) -> Self {
            Self {
                id,
                code: code.to_string(),
                name: name.to_string(),
                parent_id,
            }
        }
    }

    impl Listable for Rec {
        fn id(&self) -> u64 {
            self.id
        }

        fn code(&self) -> &str {
            &self.code
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn parent_id(&self) -> Option<u64> {
            self.parent_id
        }
    }

    fn sample() -> Vec<Rec> {
        vec![
            Rec::new(1, "A", "Alpha", None),
            Rec::new(2, "B", "Beta", Some(1)),
            Rec::new(3, "c", "Gamma", Some(1)),
            Rec::new(4, "D", "delta ray", None),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_id_order() {
        let page = process(&sample(), &ListQuery::default());
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.limit, DEFAULT_LIMIT);
        assert_eq!(page.pagination.offset, 0);
        let ids: Vec<u64> = page.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_code_and_name() {
        let query = ListQuery {
            q: Some("DELTA".to_string()),
            ..ListQuery::default()
        };
        let page = process(&sample(), &query);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 4);

        // Matches on code too.
        let query = ListQuery {
            q: Some("b".to_string()),
            ..ListQuery::default()
        };
        let page = process(&sample(), &query);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 2);
    }

    #[test]
    fn blank_search_is_skipped() {
        let query = ListQuery {
            q: Some("   ".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(process(&sample(), &query).pagination.total, 4);
    }

    #[test]
    fn root_filter_keeps_parentless_records() {
        let query = ListQuery {
            root: Some(true),
            ..ListQuery::default()
        };
        let ids: Vec<u64> = process(&sample(), &query).data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4]);

        // root=false is not a filter.
        let query = ListQuery {
            root: Some(false),
            ..ListQuery::default()
        };
        assert_eq!(process(&sample(), &query).pagination.total, 4);
    }

    #[test]
    fn entity_codes_membership_is_case_insensitive() {
        let query = ListQuery {
            entity_codes: Some(" a , C".to_string()),
            ..ListQuery::default()
        };
        let ids: Vec<u64> = process(&sample(), &query).data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn entity_ids_membership_ignores_unparseable_entries() {
        let query = ListQuery {
            entity_ids: Some("2, nope, 4".to_string()),
            ..ListQuery::default()
        };
        let ids: Vec<u64> = process(&sample(), &query).data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn sort_by_code_folds_case_and_desc_reverses() {
        let query = ListQuery {
            sort_by: SortBy::Code,
            ..ListQuery::default()
        };
        let ids: Vec<u64> = process(&sample(), &query).data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let query = ListQuery {
            sort_by: SortBy::Code,
            sort_order: SortOrder::Desc,
            ..ListQuery::default()
        };
        let ids: Vec<u64> = process(&sample(), &query).data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn sort_is_stable_for_ties_in_both_directions() {
        let records = vec![
            Rec::new(10, "same", "first", None),
            Rec::new(20, "same", "second", None),
            Rec::new(30, "same", "third", None),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let query = ListQuery {
                sort_by: SortBy::Code,
                sort_order: order,
                ..ListQuery::default()
            };
            let ids: Vec<u64> = process(&records, &query).data.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![10, 20, 30], "ties must keep insertion order");
        }
    }

    #[test]
    fn pagination_slices_after_filtering() {
        let query = ListQuery {
            limit: Some(2),
            offset: Some(1),
            ..ListQuery::default()
        };
        let page = process(&sample(), &query);
        assert_eq!(page.pagination.total, 4);
        let ids: Vec<u64> = page.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // Offset past the end yields an empty page, total unchanged.
        let query = ListQuery {
            limit: Some(2),
            offset: Some(10),
            ..ListQuery::default()
        };
        let page = process(&sample(), &query);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 4);
    }

    #[test]
    fn desc_id_sort_with_limit_one() {
        // Two records, DESC by id, first page of one.
        let records = vec![
            Rec::new(1, "A", "Alpha", None),
            Rec::new(2, "B", "Beta", Some(1)),
        ];
        let query = ListQuery {
            sort_by: SortBy::Id,
            sort_order: SortOrder::Desc,
            limit: Some(1),
            offset: Some(0),
            ..ListQuery::default()
        };
        let page = process(&records, &query);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 2);
        assert_eq!(
            page.pagination,
            Pagination {
                limit: 1,
                offset: 0,
                total: 2
            }
        );
    }

    #[test]
    fn process_is_idempotent() {
        let records = sample();
        let query = ListQuery {
            q: Some("a".to_string()),
            sort_by: SortBy::Code,
            sort_order: SortOrder::Desc,
            limit: Some(2),
            ..ListQuery::default()
        };
        let first = process(&records, &query);
        let second = process(&records, &query);
        assert_eq!(first.data, second.data);
        assert_eq!(first.pagination, second.pagination);
    }
}
