//! Typed REST client for the inventory API, plus the production fetchers
//! that resolve list requests into shared result stores.

use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::warn;

use crate::controller::Fetch;
use crate::error::{ClientError, ClientResult};
use crate::query::{ListQuery, Pagination};
use crate::records::{ApiRecord, ProductDraft, ProductPatch, TreeRecordDraft, TreeRecordPatch};
use crate::rows::{FilterOption, ProductRow, RecordRef, TreeRecordRow};
use crate::store::{LoadAction, SharedResultStore};

/// Page size used when loading filter dropdown options.
const FILTER_OPTIONS_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<ApiRecord>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope {
    data: ApiRecord,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<ErrorCode>,
}

#[derive(Debug, Deserialize)]
struct ErrorCode {
    code: String,
}

/// Children window for detail fetches.
#[derive(Debug, Clone, Copy)]
pub struct ChildrenQuery {
    pub limit: u32,
    pub offset: u32,
}

/// Typed client for the inventory REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` without the versioned path, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    async fn list(&self, resource: &str, query: &ListQuery) -> ClientResult<ListEnvelope> {
        let response = self
            .http
            .get(self.url(&format!("/{resource}")))
            .query(&query.to_params())
            .send()
            .await?;
        Self::ok_json(response).await
    }

    /// Parse a 2xx JSON body, or convert the response to the error
    /// taxonomy: 404 → NotFound, 400 with a code → Conflict, anything
    /// else → Server.
    async fn ok_json<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body.message.unwrap_or_else(|| status.to_string());
        Err(match (status, body.error) {
            (StatusCode::NOT_FOUND, _) => ClientError::NotFound(message),
            (StatusCode::BAD_REQUEST, Some(code)) => ClientError::Conflict {
                code: code.code,
                message,
            },
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        })
    }

    // ---------------------------------------------------------------------
    // Lists
    // ---------------------------------------------------------------------

    pub async fn list_products(
        &self,
        query: &ListQuery,
    ) -> ClientResult<(Vec<ProductRow>, Pagination)> {
        let envelope = self.list("products", query).await?;
        let rows = envelope.data.iter().map(ProductRow::from_api).collect();
        Ok((rows, envelope.pagination))
    }

    pub async fn list_brands(
        &self,
        query: &ListQuery,
    ) -> ClientResult<(Vec<TreeRecordRow>, Pagination)> {
        let envelope = self.list("brands", query).await?;
        let rows = envelope.data.iter().map(TreeRecordRow::from_api).collect();
        Ok((rows, envelope.pagination))
    }

    pub async fn list_categories(
        &self,
        query: &ListQuery,
    ) -> ClientResult<(Vec<TreeRecordRow>, Pagination)> {
        let envelope = self.list("categories", query).await?;
        let rows = envelope.data.iter().map(TreeRecordRow::from_api).collect();
        Ok((rows, envelope.pagination))
    }

    /// Brand options for the products filter dropdown.
    pub async fn brands_for_filter(&self) -> ClientResult<Vec<FilterOption>> {
        let query = ListQuery {
            limit: FILTER_OPTIONS_LIMIT,
            ..ListQuery::default()
        };
        let envelope = self.list("brands", &query).await?;
        Ok(envelope.data.iter().map(FilterOption::from_api).collect())
    }

    /// Category options for the products filter dropdown.
    pub async fn categories_for_filter(&self) -> ClientResult<Vec<FilterOption>> {
        let query = ListQuery {
            limit: FILTER_OPTIONS_LIMIT,
            ..ListQuery::default()
        };
        let envelope = self.list("categories", &query).await?;
        Ok(envelope.data.iter().map(FilterOption::from_api).collect())
    }

    // ---------------------------------------------------------------------
    // Details
    // ---------------------------------------------------------------------

    pub async fn get_product(&self, id: &str) -> ClientResult<ProductRow> {
        let response = self
            .http
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        let envelope: DataEnvelope = Self::ok_json(response).await?;
        Ok(ProductRow::from_api(&envelope.data))
    }

    pub async fn get_category(
        &self,
        id: &str,
        children: Option<ChildrenQuery>,
    ) -> ClientResult<(TreeRecordRow, Option<Vec<RecordRef>>)> {
        self.get_tree_record("categories", id, children).await
    }

    pub async fn get_brand(
        &self,
        id: &str,
        children: Option<ChildrenQuery>,
    ) -> ClientResult<(TreeRecordRow, Option<Vec<RecordRef>>)> {
        self.get_tree_record("brands", id, children).await
    }

    async fn get_tree_record(
        &self,
        resource: &str,
        id: &str,
        children: Option<ChildrenQuery>,
    ) -> ClientResult<(TreeRecordRow, Option<Vec<RecordRef>>)> {
        let mut request = self.http.get(self.url(&format!("/{resource}/{id}")));
        if let Some(window) = children {
            request = request.query(&[
                ("includeChildren", "true".to_string()),
                ("childrenLimit", window.limit.to_string()),
                ("childrenOffset", window.offset.to_string()),
            ]);
        }
        let envelope: DataEnvelope = Self::ok_json(request.send().await?).await?;

        let children = envelope
            .data
            .children
            .as_ref()
            .map(|refs| refs.iter().map(RecordRef::from_api).collect());
        Ok((TreeRecordRow::from_api(&envelope.data), children))
    }

    // ---------------------------------------------------------------------
    // Writes
    //
    // Every successful write should be followed by a controller `refresh()`
    // so the current page resyncs with the server.
    // ---------------------------------------------------------------------

    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<ProductRow> {
        draft.validate()?;
        let response = self
            .http
            .post(self.url("/products"))
            .json(draft)
            .send()
            .await?;
        let envelope: DataEnvelope = Self::ok_json(response).await?;
        Ok(ProductRow::from_api(&envelope.data))
    }

    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> ClientResult<ProductRow> {
        let response = self
            .http
            .put(self.url(&format!("/products/{id}")))
            .json(patch)
            .send()
            .await?;
        let envelope: DataEnvelope = Self::ok_json(response).await?;
        Ok(ProductRow::from_api(&envelope.data))
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        let _: serde_json::Value = Self::ok_json(response).await?;
        Ok(())
    }

    pub async fn create_category(&self, draft: &TreeRecordDraft) -> ClientResult<TreeRecordRow> {
        self.create_tree_record("categories", draft).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        patch: &TreeRecordPatch,
    ) -> ClientResult<TreeRecordRow> {
        self.update_tree_record("categories", id, patch).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.delete_tree_record("categories", id).await
    }

    pub async fn create_brand(&self, draft: &TreeRecordDraft) -> ClientResult<TreeRecordRow> {
        self.create_tree_record("brands", draft).await
    }

    pub async fn update_brand(
        &self,
        id: &str,
        patch: &TreeRecordPatch,
    ) -> ClientResult<TreeRecordRow> {
        self.update_tree_record("brands", id, patch).await
    }

    pub async fn delete_brand(&self, id: &str) -> ClientResult<()> {
        self.delete_tree_record("brands", id).await
    }

    async fn create_tree_record(
        &self,
        resource: &str,
        draft: &TreeRecordDraft,
    ) -> ClientResult<TreeRecordRow> {
        draft.validate()?;
        let response = self
            .http
            .post(self.url(&format!("/{resource}")))
            .json(draft)
            .send()
            .await?;
        let envelope: DataEnvelope = Self::ok_json(response).await?;
        Ok(TreeRecordRow::from_api(&envelope.data))
    }

    async fn update_tree_record(
        &self,
        resource: &str,
        id: &str,
        patch: &TreeRecordPatch,
    ) -> ClientResult<TreeRecordRow> {
        let response = self
            .http
            .put(self.url(&format!("/{resource}/{id}")))
            .json(patch)
            .send()
            .await?;
        let envelope: DataEnvelope = Self::ok_json(response).await?;
        Ok(TreeRecordRow::from_api(&envelope.data))
    }

    async fn delete_tree_record(&self, resource: &str, id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/{resource}/{id}")))
            .send()
            .await?;
        let _: serde_json::Value = Self::ok_json(response).await?;
        Ok(())
    }
}

// -------------------------------------------------------------------------
// Production fetchers
// -------------------------------------------------------------------------

/// [`Fetch`] for the products screen: performs the list request and
/// resolves it into the shared store under the dispatched sequence number.
pub struct ProductFetcher {
    client: ApiClient,
    store: SharedResultStore<ProductRow>,
}

impl ProductFetcher {
    pub fn new(client: ApiClient, store: SharedResultStore<ProductRow>) -> Self {
        Self { client, store }
    }
}

impl Fetch for ProductFetcher {
    fn fetch(&self, seq: u64, query: ListQuery) {
        let client = self.client.clone();
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            let action = match client.list_products(&query).await {
                Ok((items, pagination)) => LoadAction::Succeeded {
                    seq,
                    items,
                    pagination,
                },
                Err(err) => {
                    warn!(seq, error = %err, "product list fetch failed");
                    LoadAction::Failed {
                        seq,
                        message: err.to_string(),
                    }
                }
            };
            store.write().apply(action);
        });
    }
}

/// [`Fetch`] for the brands and categories screens, which both list tree
/// records.
pub struct TreeRecordFetcher {
    client: ApiClient,
    store: SharedResultStore<TreeRecordRow>,
    resource: &'static str,
}

impl TreeRecordFetcher {
    pub fn brands(client: ApiClient, store: SharedResultStore<TreeRecordRow>) -> Self {
        Self {
            client,
            store,
            resource: "brands",
        }
    }

    pub fn categories(client: ApiClient, store: SharedResultStore<TreeRecordRow>) -> Self {
        Self {
            client,
            store,
            resource: "categories",
        }
    }
}

impl Fetch for TreeRecordFetcher {
    fn fetch(&self, seq: u64, query: ListQuery) {
        let client = self.client.clone();
        let store = Arc::clone(&self.store);
        let resource = self.resource;
        tokio::spawn(async move {
            let result = client.list(resource, &query).await;
            let action = match result {
                Ok(envelope) => LoadAction::Succeeded {
                    seq,
                    items: envelope.data.iter().map(TreeRecordRow::from_api).collect(),
                    pagination: envelope.pagination,
                },
                Err(err) => {
                    warn!(seq, resource, error = %err, "list fetch failed");
                    LoadAction::Failed {
                        seq,
                        message: err.to_string(),
                    }
                }
            };
            store.write().apply(action);
        });
    }
}
