//! HTTP route handlers.

pub mod brands;
pub mod categories;
pub mod health;
pub mod products;

use serde::{Deserialize, Serialize};

use crate::store::ChildrenWindow;

/// `{data}` envelope for single-record responses.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{message}` envelope for delete acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

/// Detail query parameters: `includeChildren`, `childrenLimit`,
/// `childrenOffset`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailQuery {
    pub include_children: bool,
    pub children_limit: Option<u32>,
    pub children_offset: Option<u32>,
}

impl DetailQuery {
    /// The requested children window, when `includeChildren=true`.
    pub fn window(&self) -> Option<ChildrenWindow> {
        self.include_children.then(|| ChildrenWindow {
            limit: self.children_limit.unwrap_or(ChildrenWindow::default().limit),
            offset: self.children_offset.unwrap_or(ChildrenWindow::default().offset),
        })
    }
}
