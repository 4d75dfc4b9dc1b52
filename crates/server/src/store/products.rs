//! Product collection operations.
//!
//! Products are flat: they embed brand and category snapshots but never
//! parent other records, so deletes cannot hit a referential conflict.

use crate::error::{ApiError, ApiResult};
use crate::models::{Attribution, CreateProduct, ParentRef, Product, UpdateProduct, slugify};
use crate::query::{self, ListQuery, Page};

use super::{Inventory, next_id};

/// Fallback base for id assignment when the collection is empty.
const PRODUCT_SEED_ID: u64 = 30_118_200;

impl Inventory {
    /// List products through the query pipeline.
    pub fn list_products(&self, query: &ListQuery) -> Page<Product> {
        query::process(&self.products.read(), query)
    }

    /// Fetch one product.
    pub fn get_product(&self, id: u64) -> ApiResult<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("Product"))
    }

    /// Create a product, resolving `brand_id` and `category_id` to embedded
    /// snapshots. Unknown ids leave the snapshot empty.
    pub fn create_product(&self, input: CreateProduct) -> Product {
        let brand = input.brand_id.and_then(|id| self.brand_ref(id));
        let category = input.category_id.and_then(|id| self.category_ref(id));

        let mut products = self.products.write();
        let id = next_id(&products, |p| p.id, PRODUCT_SEED_ID);

        let product = Product {
            id,
            sku: input.sku.unwrap_or_else(|| slugify(&input.name)),
            name: input.name,
            description: input.description.unwrap_or_default(),
            brand,
            category,
            is_returnable: input.is_returnable.unwrap_or(false),
            attribution: Attribution::stamp(),
        };
        products.push(product.clone());
        product
    }

    /// Merge provided fields into a product. Changed `brand_id` /
    /// `category_id` re-resolve the snapshot; explicit `null` detaches;
    /// unknown ids leave the current snapshot in place.
    pub fn update_product(&self, id: u64, input: UpdateProduct) -> ApiResult<Product> {
        let brand_change = match input.brand_id {
            None => None,
            Some(None) => Some(None),
            Some(Some(bid)) => self.brand_ref(bid).map(Some),
        };
        let category_change = match input.category_id {
            None => None,
            Some(None) => Some(None),
            Some(Some(cid)) => self.category_ref(cid).map(Some),
        };

        let mut products = self.products.write();
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Err(ApiError::NotFound("Product"));
        };

        if let Some(name) = input.name {
            product.name = name;
        }
        if let Some(sku) = input.sku {
            product.sku = sku;
        }
        if let Some(description) = input.description {
            product.description = description;
        }
        if let Some(brand) = brand_change {
            product.brand = brand;
        }
        if let Some(category) = category_change {
            product.category = category;
        }
        if let Some(is_returnable) = input.is_returnable {
            product.is_returnable = is_returnable;
        }
        product.attribution.touch();

        Ok(product.clone())
    }

    /// Delete a product. Nothing references products, so this only fails
    /// for unknown ids.
    pub fn delete_product(&self, id: u64) -> ApiResult<()> {
        let mut products = self.products.write();
        if !products.iter().any(|p| p.id == id) {
            return Err(ApiError::NotFound("Product"));
        }
        products.retain(|p| p.id != id);
        Ok(())
    }

    fn brand_ref(&self, id: u64) -> Option<ParentRef> {
        self.brands
            .read()
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.as_parent_ref())
    }

    fn category_ref(&self, id: u64) -> Option<ParentRef> {
        self.categories
            .read()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.as_parent_ref())
    }
}
