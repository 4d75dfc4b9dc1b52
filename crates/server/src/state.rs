//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::seed::SeedData;
use crate::store::Inventory;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// In-memory record collections.
    inventory: Inventory,
}

impl AppState {
    /// Build state from configuration, loading seed data from disk when a
    /// seed path is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let seed = match &config.seed_path {
            Some(path) => SeedData::from_file(path)?,
            None => SeedData::sample(),
        };
        Ok(Self::with_seed(seed))
    }

    /// Build state from explicit seed data (used by tests).
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                inventory: Inventory::new(seed),
            }),
        }
    }

    /// Access the inventory store.
    pub fn inventory(&self) -> &Inventory {
        &self.inner.inventory
    }
}
