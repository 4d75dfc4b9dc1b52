//! Category API routes.
//!
//! REST endpoints for listing, fetching, and mutating categories.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::error::ApiResult;
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::query::{ListQuery, Page};
use crate::state::AppState;
use crate::store::Detail;

use super::{DataEnvelope, DetailQuery, MessageEnvelope};

/// Create the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/categories", get(list).post(create))
        .route(
            "/api/v1/categories/{id}",
            get(fetch).put(update).delete(remove),
        )
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Page<Category>> {
    Json(state.inventory().list_categories(&query))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(detail): Query<DetailQuery>,
) -> ApiResult<Json<DataEnvelope<Detail<Category>>>> {
    let category = state.inventory().get_category(id, detail.window())?;
    Ok(Json(DataEnvelope { data: category }))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> (StatusCode, Json<DataEnvelope<Category>>) {
    let category = state.inventory().create_category(input);
    (StatusCode::CREATED, Json(DataEnvelope { data: category }))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateCategory>,
) -> ApiResult<Json<DataEnvelope<Category>>> {
    let category = state.inventory().update_category(id, input)?;
    Ok(Json(DataEnvelope { data: category }))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MessageEnvelope>> {
    state.inventory().delete_category(id)?;
    Ok(Json(MessageEnvelope {
        message: "Category deleted successfully".to_string(),
    }))
}
