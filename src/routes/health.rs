use axum::extract::State;

use crate::{response::HttpResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/health/status",
    responses(
        (status = 200, description = "Database connectivity and pool usage"),
        (status = 500, description = "Database unreachable")
    )
)]
#[axum::debug_handler]
pub async fn health_status(State(state): State<AppState>) -> HttpResponse {
    state.get_health_status.execute().await
}
