//! Seed data for the in-memory store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{Attribution, Brand, Category, ParentRef, Product};

/// Record collections loaded at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl SeedData {
    /// Load seed data from a JSON file shaped
    /// `{"categories": [...], "brands": [...], "products": [...]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    /// Built-in sample data used when no seed file is configured.
    pub fn sample() -> Self {
        let category = |id: u64, code: &str, name: &str, parent: Option<&Category>| Category {
            id,
            code: code.to_string(),
            name: name.to_string(),
            description: String::new(),
            parent: parent.map(Category::as_parent_ref),
            attribution: Attribution::stamp(),
        };
        let brand = |id: u64, code: &str, name: &str| Brand {
            id,
            code: code.to_string(),
            name: name.to_string(),
            description: String::new(),
            parent: None,
            attribution: Attribution::stamp(),
        };

        let electronics = category(10_173_901, "electronics", "Electronics", None);
        let laptops = category(10_173_902, "laptops", "Laptops", Some(&electronics));
        let smartphones = category(10_173_903, "smartphones", "Smartphones", Some(&electronics));
        let home_garden = category(10_173_904, "home-garden", "Home & Garden", None);

        let aurora = brand(20_440_701, "aurora", "Aurora");
        let keystone = brand(20_440_702, "keystone", "Keystone");
        let northwind = brand(20_440_703, "northwind", "Northwind");

        let product = |id: u64,
                       sku: &str,
                       name: &str,
                       brand: &Brand,
                       category: &Category,
                       is_returnable: bool| Product {
            id,
            sku: sku.to_string(),
            name: name.to_string(),
            description: String::new(),
            brand: Some(ParentRef {
                id: brand.id,
                code: brand.code.clone(),
                name: brand.name.clone(),
            }),
            category: Some(category.as_parent_ref()),
            is_returnable,
            attribution: Attribution::stamp(),
        };

        let products = vec![
            product(30_118_201, "SKU-0001", "Aurora Book 14", &aurora, &laptops, true),
            product(30_118_202, "SKU-0002", "Keystone Phone X", &keystone, &smartphones, false),
            product(30_118_203, "SKU-0003", "Garden Hose 20m", &northwind, &home_garden, true),
        ];

        Self {
            categories: vec![electronics, laptops, smartphones, home_garden],
            brands: vec![aurora, keystone, northwind],
            products,
        }
    }
}
