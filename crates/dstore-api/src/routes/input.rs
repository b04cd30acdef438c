//! `GET /get` — the startup input and the blob it was stored as.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::{method_not_allowed, AppError};
use crate::input::CachedInput;
use crate::state::AppState;

/// Build the `/get` router.
pub fn router() -> Router<AppState> {
    Router::new().route("/get", get(get_input).fallback(method_not_allowed))
}

/// GET /get — Return the cached startup input.
#[utoipa::path(
    get,
    path = "/get",
    responses(
        (status = 200, description = "Startup input and its blob id", body = CachedInput),
        (status = 405, description = "Method not allowed"),
    ),
    tag = "input"
)]
pub(crate) async fn get_input(State(state): State<AppState>) -> Result<Json<CachedInput>, AppError> {
    let input = state
        .input
        .as_deref()
        .ok_or_else(|| AppError::NotFound("no startup input in this variant".into()))?;
    Ok(Json(input.clone()))
}
