//! Brand API routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::error::ApiResult;
use crate::models::{Brand, CreateBrand, UpdateBrand};
use crate::query::{ListQuery, Page};
use crate::state::AppState;
use crate::store::Detail;

use super::{DataEnvelope, DetailQuery, MessageEnvelope};

/// Create the brand router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/brands", get(list).post(create))
        .route(
            "/api/v1/brands/{id}",
            get(fetch).put(update).delete(remove),
        )
}

async fn list(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Json<Page<Brand>> {
    Json(state.inventory().list_brands(&query))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(detail): Query<DetailQuery>,
) -> ApiResult<Json<DataEnvelope<Detail<Brand>>>> {
    let brand = state.inventory().get_brand(id, detail.window())?;
    Ok(Json(DataEnvelope { data: brand }))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> (StatusCode, Json<DataEnvelope<Brand>>) {
    let brand = state.inventory().create_brand(input);
    (StatusCode::CREATED, Json(DataEnvelope { data: brand }))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateBrand>,
) -> ApiResult<Json<DataEnvelope<Brand>>> {
    let brand = state.inventory().update_brand(id, input)?;
    Ok(Json(DataEnvelope { data: brand }))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MessageEnvelope>> {
    state.inventory().delete_brand(id)?;
    Ok(Json(MessageEnvelope {
        message: "Brand deleted successfully".to_string(),
    }))
}
