#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Product endpoint integration tests: product-only filters and snapshot
//! resolution against the brand and category collections.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{TestApp, data_ids};

#[tokio::test]
async fn brand_and_category_filters_compose() {
    let app = TestApp::new();

    let (_, body) = app.get("/api/v1/products?brandId=20440701").await;
    assert_eq!(data_ids(&body), vec![30_118_201]);

    let (_, body) = app.get("/api/v1/products?categoryId=10173903").await;
    assert_eq!(data_ids(&body), vec![30_118_202]);

    // Mismatched pair filters everything out.
    let (_, body) = app
        .get("/api/v1/products?brandId=20440701&categoryId=10173903")
        .await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn status_filter_maps_to_returnable_flag() {
    let app = TestApp::new();

    let (_, body) = app.get("/api/v1/products?status=returnable").await;
    assert_eq!(data_ids(&body), vec![30_118_201, 30_118_203]);

    let (_, body) = app.get("/api/v1/products?status=Standard").await;
    assert_eq!(data_ids(&body), vec![30_118_202]);
}

#[tokio::test]
async fn search_matches_sku() {
    let app = TestApp::new();
    let (_, body) = app.get("/api/v1/products?q=sku-0002").await;
    assert_eq!(data_ids(&body), vec![30_118_202]);
}

#[tokio::test]
async fn create_resolves_brand_and_category_snapshots() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/products",
            json!({
                "name": "Aurora Book 16",
                "brandId": 20440701,
                "categoryId": 10173902,
                "isReturnable": true
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 30_118_204);
    assert_eq!(body["data"]["sku"], "aurora-book-16");
    assert_eq!(body["data"]["brand"]["name"], "Aurora");
    assert_eq!(body["data"]["category"]["code"], "laptops");

    // Unknown references leave the snapshot empty.
    let (_, body) = app
        .post(
            "/api/v1/products",
            json!({"name": "Orphan", "brandId": 1, "categoryId": 2}),
        )
        .await;
    assert_eq!(body["data"]["brand"], Value::Null);
    assert_eq!(body["data"]["category"], Value::Null);
}

#[tokio::test]
async fn update_reresolves_and_detaches_snapshots() {
    let app = TestApp::new();

    let (_, body) = app
        .put(
            "/api/v1/products/30118201",
            json!({"brandId": 20440702, "isReturnable": false}),
        )
        .await;
    assert_eq!(body["data"]["brand"]["name"], "Keystone");
    assert_eq!(body["data"]["isReturnable"], false);
    // Untouched fields survive the merge.
    assert_eq!(body["data"]["category"]["code"], "laptops");

    let (_, body) = app
        .put("/api/v1/products/30118201", json!({"categoryId": null}))
        .await;
    assert_eq!(body["data"]["category"], Value::Null);
}

#[tokio::test]
async fn delete_product_never_conflicts() {
    let app = TestApp::new();

    let (status, body) = app.delete("/api/v1/products/30118203").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");

    let (status, body) = app.get("/api/v1/products/30118203").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}
