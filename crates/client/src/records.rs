//! Wire-side shapes: records as the API returns them, and the draft/patch
//! bodies sent on writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// A record as it appears on the wire. One lenient shape covers all three
/// resources; the row transforms pick out what each screen needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiRecord {
    pub id: u64,
    pub code: Option<String>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<ApiRef>,
    pub brand: Option<ApiRef>,
    pub category: Option<ApiRef>,
    pub is_returnable: Option<bool>,
    pub attribution: Option<ApiAttribution>,
    pub children: Option<Vec<ApiRef>>,
}

/// Embedded `{id, code, name}` reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiRef {
    pub id: u64,
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Audit timestamps as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiAttribution {
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

// -------------------------------------------------------------------------
// Write bodies
// -------------------------------------------------------------------------

/// Body for creating a category or brand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRecordDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

impl TreeRecordDraft {
    /// Local validation; failures never reach the network layer.
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}

/// Partial update for a category or brand. `parent_id: Some(None)`
/// serializes as explicit `null`, detaching the parent; `None` omits the
/// field and keeps the current snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<u64>>,
}

/// Body for creating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    pub is_returnable: bool,
}

impl ProductDraft {
    /// Local validation; failures never reach the network layer.
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}

/// Partial update for a product. `brand_id` / `category_id` follow the same
/// absent-vs-null convention as [`TreeRecordPatch::parent_id`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_returnable: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_detach_from_keep() {
        let keep = TreeRecordPatch {
            name: Some("Renamed".to_string()),
            ..TreeRecordPatch::default()
        };
        let json = serde_json::to_value(&keep).unwrap();
        assert!(json.get("parentId").is_none());

        let detach = TreeRecordPatch {
            parent_id: Some(None),
            ..TreeRecordPatch::default()
        };
        let json = serde_json::to_value(&detach).unwrap();
        assert!(json["parentId"].is_null());

        let reattach = TreeRecordPatch {
            parent_id: Some(Some(7)),
            ..TreeRecordPatch::default()
        };
        let json = serde_json::to_value(&reattach).unwrap();
        assert_eq!(json["parentId"], 7);
    }

    #[test]
    fn blank_name_fails_validation() {
        let draft = ProductDraft {
            name: "   ".to_string(),
            sku: None,
            description: None,
            brand_id: None,
            category_id: None,
            is_returnable: false,
        };
        assert!(matches!(
            draft.validate(),
            Err(ClientError::Validation(_))
        ));
    }
}
