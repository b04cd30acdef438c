//! # dstore-api — Axum service for archiving digest sets on Walrus
//!
//! Accepts digest sets over HTTP, stores their JSON encoding on the Walrus
//! blob network through [`dstore_walrus::BlobStore`], and answers with the
//! resulting blob identifier.
//!
//! ## API Surface
//!
//! | Route                 | Module                | Variant        |
//! |-----------------------|-----------------------|----------------|
//! | `POST /store`         | [`routes::store`]     | all            |
//! | `GET /get`            | [`routes::input`]     | `with-input`   |
//! | `GET /health/*`       | this module           | all            |
//! | `GET /openapi.json`   | [`openapi`]           | all            |
//!
//! `/get` is mounted only when the state carries a startup input, i.e.
//! when [`bootstrap::bootstrap`] ran in the `with-input` variant.

pub mod archive;
pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod input;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let mut api = Router::new().merge(routes::store::router());
    if state.input.is_some() {
        api = api.merge(routes::input::router());
    }

    let api = api
        .merge(openapi::router())
        .layer(middleware::tracing_layer::layer())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. Startup work finishes before the listener binds, so a
/// responding process is ready.
async fn readiness() -> &'static str {
    "ready"
}
