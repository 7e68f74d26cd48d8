//! Ledger routes: payments, expenses, and the financial summary.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use scholar_core::finance::{
    Expense, FinancialSummary, Payment, RecordExpenseInput, RecordPaymentInput,
};
use scholar_core::{AdmissionNumber, TermKey};
use scholar_shared::AppError;

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::StaffContext;

/// Creates the finance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students/{admission_no}/payments", get(list_student_payments))
        .route("/payments", post(record_payment))
        .route("/expenses", post(record_expense))
        .route("/finance/summary", get(get_summary))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for recording a payment.
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    /// Paying student.
    pub admission_no: String,
    /// Term credited.
    pub term: i32,
    /// School year.
    pub year: i32,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of payment (defaults to today).
    pub payment_date: Option<NaiveDate>,
    /// Payment method.
    pub payment_method: String,
    /// External reference.
    pub reference: Option<String>,
    /// Description.
    pub description: Option<String>,
}

/// Request body for recording an expense.
#[derive(Debug, Deserialize)]
pub struct RecordExpenseRequest {
    /// Expense category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense (defaults to today).
    pub expense_date: Option<NaiveDate>,
    /// Payment method.
    pub payment_method: String,
    /// External reference.
    pub reference: Option<String>,
    /// Description.
    pub description: Option<String>,
}

/// Query parameters for the financial summary.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// First day of the range.
    pub from: NaiveDate,
    /// Last day of the range (defaults to today).
    pub to: Option<NaiveDate>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /students/{admission_no}/payments
async fn list_student_payments(
    State(state): State<AppState>,
    Path(admission_no): Path<String>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let admission_no = AdmissionNumber::parse(&admission_no)
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    Ok(Json(state.finance.student_payments(&admission_no).await?))
}

/// POST /payments
async fn record_payment(
    State(state): State<AppState>,
    staff: StaffContext,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    let admission_no = AdmissionNumber::parse(&request.admission_no)
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
    let term = TermKey::new(request.term, request.year)
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    let payment = state
        .payments()
        .record_payment(RecordPaymentInput {
            admission_no,
            term,
            amount: request.amount,
            payment_date: request
                .payment_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            payment_method: request.payment_method,
            reference: request.reference,
            description: request.description,
            received_by: staff.staff_id().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// POST /expenses
async fn record_expense(
    State(state): State<AppState>,
    staff: StaffContext,
    Json(request): Json<RecordExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state
        .expenses()
        .record_expense(RecordExpenseInput {
            category: request.category,
            amount: request.amount,
            expense_date: request
                .expense_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            payment_method: request.payment_method,
            reference: request.reference,
            description: request.description,
            authorized_by: staff.staff_id().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /finance/summary?from=&to=
async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let to = query.to.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(state.finance.summarize(query.from, to).await?))
}
