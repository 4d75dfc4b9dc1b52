//! Record types shared across the REST surface.

mod brand;
mod category;
mod product;

pub use brand::{Brand, CreateBrand, UpdateBrand};
pub use category::{Category, CreateCategory, UpdateCategory};
pub use product::{CreateProduct, Product, UpdateProduct};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Synthetic author id stamped on records the mock store writes.
pub const SYSTEM_USER_ID: u64 = 15_000_449;

/// Embedded `{id, code, name}` snapshot of a referenced record.
///
/// Captured at write time rather than joined live: renaming the referenced
/// record later does not rewrite existing snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub id: u64,
    pub code: String,
    pub name: String,
}

/// Audit metadata stamped by the store on every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    pub created_by: u64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl Attribution {
    /// Fresh attribution for a newly created record.
    pub fn stamp() -> Self {
        let now = Utc::now();
        Self {
            created_by: SYSTEM_USER_ID,
            created_date: now,
            modified_date: now,
        }
    }

    /// Restamp the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_date = Utc::now();
    }
}

/// Deserialize a field where JSON `null` must stay distinguishable from the
/// field being absent: `None` = absent, `Some(None)` = explicit null.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Derive a record code from a display name: lowercased, whitespace runs
/// collapsed to single dashes.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        parent_id: Option<Option<u64>>,
    }

    #[test]
    fn double_option_distinguishes_null_from_absent() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.parent_id, None);

        let null: Patch = serde_json::from_str(r#"{"parentId":null}"#).unwrap();
        assert_eq!(null.parent_id, Some(None));

        let set: Patch = serde_json::from_str(r#"{"parentId":7}"#).unwrap();
        assert_eq!(set.parent_id, Some(Some(7)));
    }

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Home & Garden"), "home-&-garden");
        assert_eq!(slugify("  Winter   Sports  "), "winter-sports");
        assert_eq!(slugify("Electronics"), "electronics");
    }
}
