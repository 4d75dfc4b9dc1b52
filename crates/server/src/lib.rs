//! Stockroom mock inventory API.
//!
//! This library exposes server internals for integration testing and for
//! embedding the router in other binaries. The main entry point for running
//! the server is the `stockroom` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::state::AppState;

/// Assemble the full resource router (no middleware layers attached).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(routes::categories::router())
        .merge(routes::brands::router())
        .merge(routes::products::router())
        .merge(routes::health::router())
}

/// Build the CORS layer. A single `*` entry allows any origin; otherwise
/// the listed origins are allowed with credentials. OPTIONS preflights are
/// answered by the layer itself.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if allowed_origins.len() == 1 && allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
            .allow_credentials(true)
    }
}
