//! Report card and balance routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use scholar_core::reports::ReportCard;
use scholar_shared::AppError;

use crate::AppState;
use crate::error::ApiError;

/// Creates the report card routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students/{admission_no}/report-card",
            get(get_report_card),
        )
        .route("/students/{admission_no}/balance", get(get_balance))
}

/// Query parameters selecting a term.
#[derive(Debug, Deserialize)]
pub struct TermQuery {
    /// Term number (1-3).
    pub term: i32,
    /// School year.
    pub year: i32,
}

/// Response for the balance endpoint.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Student admission number.
    pub admission_no: String,
    /// Term number.
    pub term: i32,
    /// School year.
    pub year: i32,
    /// Fees still owed.
    pub outstanding_balance: Decimal,
}

/// GET /students/{admission_no}/report-card?term=&year=
async fn get_report_card(
    State(state): State<AppState>,
    Path(admission_no): Path<String>,
    Query(query): Query<TermQuery>,
) -> Result<Json<ReportCard>, ApiError> {
    state
        .reports
        .generate(&admission_no, query.term, query.year)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No report card for student {admission_no} in term {} of {}",
                query.term, query.year
            ))
            .into()
        })
}

/// GET /students/{admission_no}/balance?term=&year=
async fn get_balance(
    State(state): State<AppState>,
    Path(admission_no): Path<String>,
    Query(query): Query<TermQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let outstanding_balance = state
        .balances
        .balance_for(&admission_no, query.term, query.year)
        .await?;

    Ok(Json(BalanceResponse {
        admission_no,
        term: query.term,
        year: query.year,
        outstanding_balance,
    }))
}
