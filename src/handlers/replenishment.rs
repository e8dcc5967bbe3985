use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tracing::info;

use super::common::{map_service_error, success_response};
use crate::{auth::AuthenticatedUser, errors::ApiError, handlers::AppState};

/// Run the replenishment engine once and replace the pending suggestion set
#[utoipa::path(
    post,
    path = "/api/v1/replenishment/generate",
    responses(
        (status = 200, description = "Run summary", body = crate::services::replenishment::RunSummary),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse),
        (status = 403, description = "Missing permission", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "replenishment"
)]
pub async fn generate_suggestions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let summary = state
        .services
        .replenishment
        .generate()
        .await
        .map_err(map_service_error)?;

    info!(
        user = %user.user_id,
        total = summary.total,
        "replenishment suggestions generated"
    );

    Ok(success_response(summary))
}

/// Pending suggestion counts by urgency tier and type
#[utoipa::path(
    get,
    path = "/api/v1/replenishment/stats",
    responses(
        (status = 200, description = "Pending suggestion stats", body = crate::services::replenishment::RunSummary),
        (status = 401, description = "Unauthenticated", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "replenishment"
)]
pub async fn suggestion_stats(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let stats = state
        .services
        .replenishment
        .stats()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(stats))
}

/// Creates the router for replenishment endpoints. Permission gating is
/// applied by the caller.
pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate_suggestions))
}

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/stats", get(suggestion_stats))
}
