//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Request extractors
//! - Error responses

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use scholar_core::finance::{BalanceCalculator, FinanceService};
use scholar_core::reports::{ReportCardService, SchoolInfo};
use scholar_db::{AttendanceRepository, ExamResultRepository, ExpenseRepository, PaymentRepository};
use scholar_shared::LearningAreaPolicy;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Report card aggregation.
    pub reports: ReportCardService,
    /// Fee balances.
    pub balances: BalanceCalculator,
    /// Financial summaries and payment history.
    pub finance: FinanceService,
}

impl AppState {
    /// Wires the read-side services to the database-backed stores.
    #[must_use]
    pub fn new(db: DatabaseConnection, school: SchoolInfo, policy: LearningAreaPolicy) -> Self {
        let stores = scholar_db::stores(&db);
        Self {
            reports: ReportCardService::new(stores.clone(), policy, school),
            balances: BalanceCalculator::new(&stores),
            finance: FinanceService::new(&stores),
            db: Arc::new(db),
        }
    }

    /// Payment write path.
    #[must_use]
    pub fn payments(&self) -> PaymentRepository {
        PaymentRepository::new((*self.db).clone())
    }

    /// Expense write path.
    #[must_use]
    pub fn expenses(&self) -> ExpenseRepository {
        ExpenseRepository::new((*self.db).clone())
    }

    /// Exam result write path.
    #[must_use]
    pub fn exam_results(&self) -> ExamResultRepository {
        ExamResultRepository::new((*self.db).clone())
    }

    /// Attendance write path.
    #[must_use]
    pub fn attendance(&self) -> AttendanceRepository {
        AttendanceRepository::new((*self.db).clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
