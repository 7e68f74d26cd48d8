//! JSON error responses.
//!
//! Every failure is rendered as `{ "error": CODE, "message": text }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use scholar_core::finance::{BalanceError, FinanceError};
use scholar_core::reports::ReportError;
use scholar_db::WriteError;
use scholar_shared::AppError;

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn new(status: u16, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code,
            message: message.into(),
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::new(err.status_code(), err.error_code(), err.to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self::new(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<BalanceError> for ApiError {
    fn from(err: BalanceError) -> Self {
        Self::new(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<FinanceError> for ApiError {
    fn from(err: FinanceError) -> Self {
        Self::new(err.http_status_code(), err.error_code(), err.to_string())
    }
}

impl From<WriteError> for ApiError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Finance(e) => e.into(),
            WriteError::Academic(e) => Self::new(400, e.error_code(), e.to_string()),
            WriteError::StudentNotFound(_) => Self::new(404, "STUDENT_NOT_FOUND", err.to_string()),
            WriteError::TermNotFound(_) => Self::new(404, "TERM_NOT_FOUND", err.to_string()),
            WriteError::ExamNotFound(_) => Self::new(404, "EXAM_NOT_FOUND", err.to_string()),
            WriteError::SubjectNotFound(_) => Self::new(404, "SUBJECT_NOT_FOUND", err.to_string()),
            WriteError::Database(e) => AppError::Database(e.to_string()).into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            error!(code = self.code, error = %self.message, "Request failed");
            "An error occurred".to_string()
        } else {
            self.message
        };

        (
            self.status,
            Json(json!({
                "error": self.code,
                "message": message,
            })),
        )
            .into_response()
    }
}
