//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dstore API",
        version = "0.1.0",
        description = "Archives digest sets on the Walrus blob network and serves the startup input blob.",
        license(name = "BUSL-1.1")
    ),
    paths(
        crate::routes::store::store_digests,
        crate::routes::input::get_input,
    ),
    components(schemas(
        crate::routes::store::DigestSet,
        crate::routes::store::StatusEnvelope,
        crate::routes::store::StoreStatus,
        crate::input::CachedInput,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "store", description = "Digest set archival"),
        (name = "input", description = "Startup input blob"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/store"));
        assert!(doc.paths.paths.contains_key("/get"));
    }

    #[test]
    fn document_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("StatusEnvelope"));
        assert!(json.contains("DigestSet"));
    }
}
