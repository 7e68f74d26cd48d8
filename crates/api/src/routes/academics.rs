//! Exam result and attendance submission routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::put,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use scholar_core::AdmissionNumber;
use scholar_core::academics::SubmitResultInput;
use scholar_core::attendance::{AttendanceStatus, RecordAttendanceInput};
use scholar_shared::AppError;
use scholar_shared::types::ExamId;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::StaffContext;

/// Creates the academic submission routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exam-results", put(submit_result))
        .route("/attendance", put(record_attendance))
}

/// Request body for submitting a mark.
#[derive(Debug, Deserialize)]
pub struct SubmitResultRequest {
    /// Student.
    pub admission_no: String,
    /// Exam sitting.
    pub exam_id: Uuid,
    /// Subject code.
    pub subject_code: String,
    /// Mark (0-100).
    pub marks: Decimal,
    /// Teacher's comment.
    #[serde(default)]
    pub comments: String,
}

/// Response for a stored mark.
#[derive(Debug, Serialize)]
pub struct SubmitResultResponse {
    /// Row ID of the stored result.
    pub id: Uuid,
}

/// Request body for recording attendance.
#[derive(Debug, Deserialize)]
pub struct RecordAttendanceRequest {
    /// Student.
    pub admission_no: String,
    /// School day.
    pub date: NaiveDate,
    /// Status (present, absent, late, excused, ...).
    pub status: String,
}

fn parse_admission_no(raw: &str) -> Result<AdmissionNumber, ApiError> {
    AdmissionNumber::parse(raw).map_err(|e| AppError::InvalidArgument(e.to_string()).into())
}

/// PUT /exam-results
async fn submit_result(
    State(state): State<AppState>,
    staff: StaffContext,
    Json(request): Json<SubmitResultRequest>,
) -> Result<Json<SubmitResultResponse>, ApiError> {
    let admission_no = parse_admission_no(&request.admission_no)?;
    debug!(staff_id = staff.staff_id(), %admission_no, "Submitting exam result");

    let id = state
        .exam_results()
        .upsert_result(SubmitResultInput {
            admission_no,
            exam_id: ExamId::from_uuid(request.exam_id),
            subject_code: request.subject_code,
            marks: request.marks,
            comments: request.comments,
        })
        .await?;

    Ok(Json(SubmitResultResponse {
        id: id.into_inner(),
    }))
}

/// PUT /attendance
async fn record_attendance(
    State(state): State<AppState>,
    staff: StaffContext,
    Json(request): Json<RecordAttendanceRequest>,
) -> Result<StatusCode, ApiError> {
    let admission_no = parse_admission_no(&request.admission_no)?;
    debug!(staff_id = staff.staff_id(), %admission_no, "Recording attendance");

    state
        .attendance()
        .record(RecordAttendanceInput {
            admission_no,
            date: request.date,
            status: AttendanceStatus::from(request.status.trim()),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
