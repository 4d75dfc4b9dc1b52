//! Product API routes.
//!
//! Product lists additionally accept `brandId`, `categoryId` and `status`
//! equality filters.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::error::ApiResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::query::{ListQuery, Page};
use crate::state::AppState;

use super::{DataEnvelope, MessageEnvelope};

/// Create the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/products", get(list).post(create))
        .route(
            "/api/v1/products/{id}",
            get(fetch).put(update).delete(remove),
        )
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Page<Product>> {
    Json(state.inventory().list_products(&query))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DataEnvelope<Product>>> {
    let product = state.inventory().get_product(id)?;
    Ok(Json(DataEnvelope { data: product }))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> (StatusCode, Json<DataEnvelope<Product>>) {
    let product = state.inventory().create_product(input);
    (StatusCode::CREATED, Json(DataEnvelope { data: product }))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateProduct>,
) -> ApiResult<Json<DataEnvelope<Product>>> {
    let product = state.inventory().update_product(id, input)?;
    Ok(Json(DataEnvelope { data: product }))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MessageEnvelope>> {
    state.inventory().delete_product(id)?;
    Ok(Json(MessageEnvelope {
        message: "Product deleted successfully".to_string(),
    }))
}
