//! Category records: hierarchical product classification.

use serde::{Deserialize, Serialize};

use crate::models::{Attribution, ParentRef, double_option};
use crate::query::Listable;

/// A product category. Categories form a tree via a single optional parent
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Numeric identifier, unique within the collection.
    pub id: u64,

    /// Short mnemonic code, searched and sorted alongside `name`.
    pub code: String,

    /// Human-readable name.
    pub name: String,

    /// Optional description.
    #[serde(default)]
    pub description: String,

    /// Parent snapshot captured at write time. `None` for root categories.
    pub parent: Option<ParentRef>,

    /// Audit timestamps.
    pub attribution: Attribution,
}

impl Category {
    /// Snapshot of this category for embedding in a child record.
    pub fn as_parent_ref(&self) -> ParentRef {
        ParentRef {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

impl Listable for Category {
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
        self.parent.as_ref().map(|p| p.id)
    }
}

/// Input for creating a category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,

    /// Defaults to a slug of `name` when absent.
    pub code: Option<String>,

    pub description: Option<String>,

    /// Resolved to an embedded parent snapshot at write time.
    pub parent_id: Option<u64>,
}

/// Input for updating a category.
///
/// `parent_id` distinguishes "field absent" (keep the current parent) from
/// explicit `null` (detach).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<u64>>,
}
