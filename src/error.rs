use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::HttpResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{field} has invalid datetime format: {value}. Expected format: YYYY-MM-DDTHH:MM:SS[.fff]Z")]
    DateFormat { field: &'static str, value: String },

    #[error("{field} must be a datetime or ISO 8601 string, not {found}")]
    DateType { field: &'static str, found: String },

    #[error("Suspicious SQL statement detected in field '{field}'")]
    InjectionDetected { field: &'static str },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid UUID structure for id: {0}.")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NoReportData(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn vacancy_not_found(id: impl std::fmt::Display) -> Self {
        Error::NotFound(format!("Vacancy not found for id: {}.", id))
    }

    /// HTTP status used when this error reaches the response envelope.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::DateFormat { .. }
            | Error::DateType { .. }
            | Error::InjectionDetected { .. }
            | Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidIdentifier(_) | Error::OperationFailed(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) | Error::NoReportData(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the message is safe to hand back to the caller verbatim.
    pub fn is_expected(&self) -> bool {
        self.status_code() != StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        HttpResponse::from_error(self).into_response()
    }
}
