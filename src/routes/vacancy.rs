use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::extract::{ApiJson, ApiQuery, OptionalJson};
use crate::{
    dto::{
        simulation_dto::CostSimulationInput,
        vacancy_dto::{EditStatusQuery, NotesInput, VacancyInput, VacancyListQuery},
    },
    response::HttpResponse,
    usecases::DownloadResponse,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/vacancy",
    tag = "vacancy",
    responses(
        (status = 201, description = "Vacancy created successfully"),
        (status = 422, description = "Invalid payload, dates or suspicious text")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<VacancyInput>,
) -> HttpResponse {
    state.create_vacancy.execute(input).await
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancy",
    tag = "vacancy",
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1"),
        ("page_size" = Option<i64>, Query, description = "Items per page, at most 100"),
        ("search" = Option<String>, Query, description = "Case-insensitive text search")
    ),
    responses(
        (status = 200, description = "Page of vacancies and the total match count")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<VacancyListQuery>,
) -> HttpResponse {
    state.list_vacancies.execute(query).await
}

#[utoipa::path(
    get,
    path = "/api/v1/vacancy/{id}",
    tag = "vacancy",
    params(
        ("id" = String, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(State(state): State<AppState>, Path(id): Path<String>) -> HttpResponse {
    state.get_vacancy.execute(&id).await
}

#[utoipa::path(
    put,
    path = "/api/v1/vacancy/{id}",
    tag = "vacancy",
    params(
        ("id" = String, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy updated successfully"),
        (status = 400, description = "Malformed ID or update failed"),
        (status = 404, description = "Vacancy not found"),
        (status = 422, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<VacancyInput>,
) -> HttpResponse {
    state.update_vacancy.execute(&id, input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/vacancy/{id}",
    tag = "vacancy",
    params(
        ("id" = String, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy deleted successfully"),
        (status = 400, description = "Malformed ID or delete failed"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(State(state): State<AppState>, Path(id): Path<String>) -> HttpResponse {
    state.delete_vacancy.execute(&id).await
}

#[utoipa::path(
    patch,
    path = "/api/v1/vacancy/{id}/status",
    tag = "vacancy",
    params(
        ("id" = String, Path, description = "Vacancy ID"),
        ("vacancy_status" = String, Query, description = "FINISHED or CANCELED")
    ),
    responses(
        (status = 200, description = "Vacancy closed"),
        (status = 400, description = "Malformed ID, unknown status or update failed"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn edit_vacancy_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<EditStatusQuery>,
    OptionalJson(notes): OptionalJson<NotesInput>,
) -> HttpResponse {
    state
        .edit_vacancy_status
        .execute(&id, query.vacancy_status, notes)
        .await
}

#[utoipa::path(
    post,
    path = "/api/v1/vacancy/simulate-costs",
    tag = "vacancy",
    responses(
        (status = 200, description = "Estimated cost of the in-progress vacancies")
    )
)]
#[axum::debug_handler]
pub async fn simulate_vacancy_costs(
    State(state): State<AppState>,
    OptionalJson(input): OptionalJson<CostSimulationInput>,
) -> HttpResponse {
    state
        .simulate_vacancy_costs
        .execute(input.unwrap_or_default())
        .await
}

/// Sends the sector report as an attachment. The rendered file is removed
/// once it has been read.
#[utoipa::path(
    get,
    path = "/api/v1/vacancy/summary/{sector}",
    tag = "vacancy",
    params(
        ("sector" = String, Path, description = "Sector name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Spreadsheet report",
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 404, description = "No vacancies for the sector")
    )
)]
#[axum::debug_handler]
pub async fn download_vacancy_summary(
    State(state): State<AppState>,
    Path(sector): Path<String>,
) -> Response {
    let media = match state.download_vacancy_summary.execute(&sector).await {
        DownloadResponse::File(media) => media,
        DownloadResponse::Envelope(resp) => return resp.into_response(),
    };

    let buffer = tokio::fs::read(&media.path).await;
    if let Err(e) = tokio::fs::remove_file(&media.path).await {
        tracing::warn!(error = ?e, path = %media.path.display(), "Failed to remove report file");
    }
    let buffer = match buffer {
        Ok(buffer) => buffer,
        Err(err) => return HttpResponse::from_error(err.into()).into_response(),
    };
    let disposition = format!("attachment; filename=\"{}\"", media.file_name);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, media.media_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    )
        .into_response()
}
