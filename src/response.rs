use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::error::{Error, Result};

const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Uniform `{status_code, payload}` envelope returned by every workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,
    pub payload: JsonValue,
}

impl HttpResponse {
    pub fn new(status: StatusCode, payload: JsonValue) -> Self {
        Self {
            status_code: status.as_u16(),
            payload,
        }
    }

    pub fn ok<T: Serialize>(payload: &T) -> Result<Self> {
        Ok(Self::new(StatusCode::OK, serde_json::to_value(payload)?))
    }

    pub fn created<T: Serialize>(payload: &T) -> Result<Self> {
        Ok(Self::new(StatusCode::CREATED, serde_json::to_value(payload)?))
    }

    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "message": message.into() }))
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// Converts a workflow failure into its envelope. Unexpected failures are
    /// logged with full detail and reported to the caller generically.
    pub fn from_error(err: Error) -> Self {
        let status = err.status_code();
        if err.is_expected() {
            tracing::debug!(status = status.as_u16(), "request rejected: {}", err);
            Self::error(status, err.to_string())
        } else {
            tracing::error!(error = ?err, "unexpected failure while handling request");
            Self::error(status, GENERIC_ERROR_MESSAGE)
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let resp = HttpResponse::from_error(Error::InjectionDetected {
            field: "description",
        });
        assert_eq!(resp.status_code, 422);
        assert_eq!(
            resp.payload["error"],
            "Suspicious SQL statement detected in field 'description'"
        );
    }

    #[test]
    fn unexpected_errors_are_not_leaked() {
        let resp = HttpResponse::from_error(Error::Internal("pool exhausted on host db-1".into()));
        assert_eq!(resp.status_code, 500);
        assert_eq!(resp.payload["error"], GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn status_mapping_covers_known_codes() {
        assert_eq!(
            HttpResponse::from_error(Error::InvalidIdentifier("x".into())).status_code,
            400
        );
        assert_eq!(
            HttpResponse::from_error(Error::vacancy_not_found("abc")).status_code,
            404
        );
        assert_eq!(
            HttpResponse::from_error(Error::NoReportData("empty".into())).status_code,
            404
        );
        assert_eq!(
            HttpResponse::from_error(Error::OperationFailed("nope".into())).status_code,
            400
        );
    }
}
