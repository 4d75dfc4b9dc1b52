//! In-memory record collections.
//!
//! The store assumes a single writer: within one collection, id assignment
//! and parent-snapshot resolution happen inside the same write-lock
//! critical section, so readers never observe a half-applied write.
//! Product mutations resolve brand/category snapshots from the other
//! collections before taking the product write lock.

mod brands;
mod categories;
mod products;

use parking_lot::RwLock;
use serde::Serialize;

use crate::models::{Brand, Category, ParentRef, Product};
use crate::seed::SeedData;

/// Window over a record's children for detail lookups.
#[derive(Debug, Clone, Copy)]
pub struct ChildrenWindow {
    pub limit: u32,
    pub offset: u32,
}

impl Default for ChildrenWindow {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// A record plus an optional window of its children, for detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct Detail<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ParentRef>>,
}

/// The in-memory inventory collections.
pub struct Inventory {
    categories: RwLock<Vec<Category>>,
    brands: RwLock<Vec<Brand>>,
    products: RwLock<Vec<Product>>,
}

impl Inventory {
    /// Build the store from seed collections.
    pub fn new(seed: SeedData) -> Self {
        Self {
            categories: RwLock::new(seed.categories),
            brands: RwLock::new(seed.brands),
            products: RwLock::new(seed.products),
        }
    }

    pub fn category_count(&self) -> usize {
        self.categories.read().len()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.read().len()
    }

    pub fn product_count(&self) -> usize {
        self.products.read().len()
    }
}

/// Next id for a collection: one past the highest existing id, or one past
/// the collection's fixed seed id when empty.
fn next_id<T>(records: &[T], id_of: impl Fn(&T) -> u64, seed_id: u64) -> u64 {
    records.iter().map(id_of).max().unwrap_or(seed_id) + 1
}
