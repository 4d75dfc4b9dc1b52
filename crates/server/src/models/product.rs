//! Product records.

use serde::{Deserialize, Serialize};

use crate::models::{Attribution, ParentRef, double_option};
use crate::query::Listable;

/// A product. Products reference a brand and a category by snapshot but do
/// not form a hierarchy of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric identifier, unique within the collection.
    pub id: u64,

    /// Stock keeping unit; doubles as the record code for search and sort.
    pub sku: String,

    /// Human-readable name.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Brand snapshot captured at write time.
    pub brand: Option<ParentRef>,

    /// Category snapshot captured at write time.
    pub category: Option<ParentRef>,

    /// Whether the product can be returned after purchase.
    pub is_returnable: bool,

    /// Audit timestamps.
    pub attribution: Attribution,
}

impl Listable for Product {
    fn id(&self) -> u64 {
        self.id
    }

    fn code(&self) -> &str {
        &self.sku
    }

    fn name(&self) -> &str {
        &self.name
    }

    // Products are flat: no parent, never anyone's parent.
    fn parent_id(&self) -> Option<u64> {
        None
    }

    fn brand_id(&self) -> Option<u64> {
        self.brand.as_ref().map(|b| b.id)
    }

    fn category_id(&self) -> Option<u64> {
        self.category.as_ref().map(|c| c.id)
    }

    fn returnable(&self) -> Option<bool> {
        Some(self.is_returnable)
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,

    /// Defaults to a slug of `name` when absent.
    pub sku: Option<String>,

    pub description: Option<String>,

    /// Resolved to an embedded brand snapshot at write time.
    pub brand_id: Option<u64>,

    /// Resolved to an embedded category snapshot at write time.
    pub category_id: Option<u64>,

    /// Defaults to `false`.
    pub is_returnable: Option<bool>,
}

/// Input for updating a product.
///
/// `brand_id` and `category_id` distinguish "field absent" (keep the current
/// snapshot) from explicit `null` (detach).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub brand_id: Option<Option<u64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<u64>>,
    pub is_returnable: Option<bool>,
}
