//! Display rows: the screen-facing view of wire records.
//!
//! The API and the screens disagree slightly about shape (numeric vs
//! stringified ids, embedded refs vs flattened names, ISO timestamps vs
//! display dates), so every fetched record passes through one of these
//! transforms before it reaches a result store.

use std::fmt;

use crate::records::{ApiAttribution, ApiRecord, ApiRef};

/// Display format for `lastUpdated` columns.
const LAST_UPDATED_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Product status as shown in the list, derived from the returnable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Returnable,
    Standard,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Returnable => write!(f, "Returnable"),
            ProductStatus::Standard => write!(f, "Standard"),
        }
    }
}

/// One row of the products list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub brand: Option<String>,
    pub brand_id: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub last_updated: String,
    pub status: ProductStatus,
    pub description: String,
}

impl ProductRow {
    /// Map a wire record to a row, falling back field by field.
    pub fn from_api(record: &ApiRecord) -> Self {
        let sku = record
            .sku
            .clone()
            .or_else(|| record.code.clone())
            .unwrap_or_else(|| format!("SKU-{:0>4}", record.id));

        Self {
            id: record.id.to_string(),
            name: record.name.clone().unwrap_or_default(),
            sku,
            brand: record.brand.as_ref().and_then(|b| b.name.clone()),
            brand_id: record.brand.as_ref().map(|b| b.id.to_string()),
            category: record.category.as_ref().and_then(|c| c.name.clone()),
            category_id: record.category.as_ref().map(|c| c.id.to_string()),
            last_updated: format_last_updated(record.attribution.as_ref()),
            status: if record.is_returnable.unwrap_or(false) {
                ProductStatus::Returnable
            } else {
                ProductStatus::Standard
            },
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

/// One row of the categories or brands list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRecordRow {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Display name of the parent, when attached.
    pub parent: Option<String>,
    pub parent_id: Option<String>,
    pub last_updated: String,
    pub description: String,
}

impl TreeRecordRow {
    /// Map a wire record to a row.
    pub fn from_api(record: &ApiRecord) -> Self {
        Self {
            id: record.id.to_string(),
            code: record.code.clone().unwrap_or_default(),
            name: record.name.clone().unwrap_or_default(),
            parent: record.parent.as_ref().and_then(|p| p.name.clone()),
            parent_id: record.parent.as_ref().map(|p| p.id.to_string()),
            last_updated: format_last_updated(record.attribution.as_ref()),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

/// Stringified `{id, code, name}` reference, as used for children listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl RecordRef {
    pub fn from_api(reference: &ApiRef) -> Self {
        Self {
            id: reference.id.to_string(),
            code: reference.code.clone().unwrap_or_default(),
            name: reference.name.clone().unwrap_or_default(),
        }
    }
}

/// `{value, label}` entry for a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn from_api(record: &ApiRecord) -> Self {
        Self {
            value: record.id.to_string(),
            label: record.name.clone().unwrap_or_default(),
        }
    }
}

fn format_last_updated(attribution: Option<&ApiAttribution>) -> String {
    attribution
        .and_then(|a| a.modified_date)
        .map_or_else(|| "N/A".to_string(), |d| d.format(LAST_UPDATED_FORMAT).to_string())
}
