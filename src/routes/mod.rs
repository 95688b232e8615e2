pub mod extract;
pub mod health;
pub mod vacancy;

use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        vacancy::create_vacancy,
        vacancy::list_vacancies,
        vacancy::get_vacancy,
        vacancy::update_vacancy,
        vacancy::delete_vacancy,
        vacancy::edit_vacancy_status,
        vacancy::simulate_vacancy_costs,
        vacancy::download_vacancy_summary,
        health::health_status,
    ),
    tags((name = "vacancy", description = "Recruitment vacancy management"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vacancy",
            post(vacancy::create_vacancy).get(vacancy::list_vacancies),
        )
        .route(
            "/vacancy/simulate-costs",
            post(vacancy::simulate_vacancy_costs),
        )
        .route(
            "/vacancy/summary/:sector",
            get(vacancy::download_vacancy_summary),
        )
        .route(
            "/vacancy/:id",
            get(vacancy::get_vacancy)
                .put(vacancy::update_vacancy)
                .delete(vacancy::delete_vacancy),
        )
        .route("/vacancy/:id/status", patch(vacancy::edit_vacancy_status))
        .route("/health/status", get(health::health_status))
        .route("/openapi.json", get(openapi))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
