//! Brand collection operations. Same shape as categories: brands form a
//! single-parent tree and refuse deletion while referenced as a parent.

use crate::error::{ApiError, ApiResult};
use crate::models::{Attribution, Brand, CreateBrand, UpdateBrand, slugify};
use crate::query::{self, ListQuery, Page};

use super::{ChildrenWindow, Detail, Inventory, next_id};

/// Fallback base for id assignment when the collection is empty.
const BRAND_SEED_ID: u64 = 20_440_700;

impl Inventory {
    /// List brands through the query pipeline.
    pub fn list_brands(&self, query: &ListQuery) -> Page<Brand> {
        query::process(&self.brands.read(), query)
    }

    /// Fetch one brand, optionally with a window of its children.
    pub fn get_brand(&self, id: u64, children: Option<ChildrenWindow>) -> ApiResult<Detail<Brand>> {
        let brands = self.brands.read();
        let brand = brands
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("Brand"))?;

        let children = children.map(|window| {
            brands
                .iter()
                .filter(|b| b.parent.as_ref().is_some_and(|p| p.id == id))
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .map(Brand::as_parent_ref)
                .collect()
        });

        Ok(Detail {
            record: brand,
            children,
        })
    }

    /// Create a brand, resolving `parent_id` to an embedded snapshot.
    /// An unknown `parent_id` creates a root brand.
    pub fn create_brand(&self, input: CreateBrand) -> Brand {
        let mut brands = self.brands.write();
        let id = next_id(&brands, |b| b.id, BRAND_SEED_ID);
        let parent = input.parent_id.and_then(|pid| {
            brands
                .iter()
                .find(|b| b.id == pid)
                .map(Brand::as_parent_ref)
        });

        let brand = Brand {
            id,
            code: input.code.unwrap_or_else(|| slugify(&input.name)),
            name: input.name,
            description: input.description.unwrap_or_default(),
            parent,
            attribution: Attribution::stamp(),
        };
        brands.push(brand.clone());
        brand
    }

    /// Merge provided fields into a brand. A changed `parent_id` re-resolves
    /// the snapshot; explicit `null` detaches; an unknown id leaves the
    /// current snapshot in place.
    pub fn update_brand(&self, id: u64, input: UpdateBrand) -> ApiResult<Brand> {
        let mut brands = self.brands.write();

        let parent_change = match input.parent_id {
            None => None,
            Some(None) => Some(None),
            Some(Some(pid)) => brands
                .iter()
                .find(|b| b.id == pid)
                .map(|p| Some(p.as_parent_ref())),
        };

        let Some(brand) = brands.iter_mut().find(|b| b.id == id) else {
            return Err(ApiError::NotFound("Brand"));
        };

        if let Some(name) = input.name {
            brand.name = name;
        }
        if let Some(code) = input.code {
            brand.code = code;
        }
        if let Some(description) = input.description {
            brand.description = description;
        }
        if let Some(parent) = parent_change {
            brand.parent = parent;
        }
        brand.attribution.touch();

        Ok(brand.clone())
    }

    /// Delete a brand. Refused while any other brand still points at it as
    /// parent.
    pub fn delete_brand(&self, id: u64) -> ApiResult<()> {
        let mut brands = self.brands.write();

        if !brands.iter().any(|b| b.id == id) {
            return Err(ApiError::NotFound("Brand"));
        }

        let has_children = brands
            .iter()
            .any(|b| b.parent.as_ref().is_some_and(|p| p.id == id));
        if has_children {
            return Err(ApiError::Conflict {
                code: "BRAND_HAS_CHILDREN",
                message: "Cannot delete brand with sub-brands".to_string(),
            });
        }

        brands.retain(|b| b.id != id);
        Ok(())
    }
}
