//! Category collection operations.

use crate::error::{ApiError, ApiResult};
use crate::models::{Attribution, Category, CreateCategory, UpdateCategory, slugify};
use crate::query::{self, ListQuery, Page};

use super::{ChildrenWindow, Detail, Inventory, next_id};

/// Fallback base for id assignment when the collection is empty.
const CATEGORY_SEED_ID: u64 = 10_173_900;

impl Inventory {
    /// List categories through the query pipeline.
    pub fn list_categories(&self, query: &ListQuery) -> Page<Category> {
        query::process(&self.categories.read(), query)
    }

    /// Fetch one category, optionally with a window of its children.
    pub fn get_category(
        &self,
        id: u64,
        children: Option<ChildrenWindow>,
    ) -> ApiResult<Detail<Category>> {
        let categories = self.categories.read();
        let category = categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::NotFound("Category"))?;

        let children = children.map(|window| {
            categories
                .iter()
                .filter(|c| c.parent.as_ref().is_some_and(|p| p.id == id))
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .map(Category::as_parent_ref)
                .collect()
        });

        Ok(Detail {
            record: category,
            children,
        })
    }

    /// Create a category, resolving `parent_id` to an embedded snapshot.
    /// An unknown `parent_id` creates a root category.
    pub fn create_category(&self, input: CreateCategory) -> Category {
        let mut categories = self.categories.write();
        let id = next_id(&categories, |c| c.id, CATEGORY_SEED_ID);
        let parent = input.parent_id.and_then(|pid| {
            categories
                .iter()
                .find(|c| c.id == pid)
                .map(Category::as_parent_ref)
        });

        let category = Category {
            id,
            code: input.code.unwrap_or_else(|| slugify(&input.name)),
            name: input.name,
            description: input.description.unwrap_or_default(),
            parent,
            attribution: Attribution::stamp(),
        };
        categories.push(category.clone());
        category
    }

    /// Merge provided fields into a category. A changed `parent_id`
    /// re-resolves the snapshot; explicit `null` detaches; an unknown id
    /// leaves the current snapshot in place.
    pub fn update_category(&self, id: u64, input: UpdateCategory) -> ApiResult<Category> {
        let mut categories = self.categories.write();

        let parent_change = match input.parent_id {
            None => None,
            Some(None) => Some(None),
            Some(Some(pid)) => categories
                .iter()
                .find(|c| c.id == pid)
                .map(|p| Some(p.as_parent_ref())),
        };

        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return Err(ApiError::NotFound("Category"));
        };

        if let Some(name) = input.name {
            category.name = name;
        }
        if let Some(code) = input.code {
            category.code = code;
        }
        if let Some(description) = input.description {
            category.description = description;
        }
        if let Some(parent) = parent_change {
            category.parent = parent;
        }
        category.attribution.touch();

        Ok(category.clone())
    }

    /// Delete a category. Refused while any other category still points at
    /// it as parent.
    pub fn delete_category(&self, id: u64) -> ApiResult<()> {
        let mut categories = self.categories.write();

        if !categories.iter().any(|c| c.id == id) {
            return Err(ApiError::NotFound("Category"));
        }

        let has_children = categories
            .iter()
            .any(|c| c.parent.as_ref().is_some_and(|p| p.id == id));
        if has_children {
            return Err(ApiError::Conflict {
                code: "CATEGORY_HAS_CHILDREN",
                message: "Cannot delete category with subcategories".to_string(),
            });
        }

        categories.retain(|c| c.id != id);
        Ok(())
    }
}
