//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repositories implementing the `scholar-core` store ports
//! - The transactional write paths (payments, expenses, results, attendance)
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

use std::sync::Arc;
use std::time::Duration;

pub use repositories::{
    AttendanceRepository, ExamResultRepository, ExpenseRepository, FeeStructureRepository,
    GradeBandRepository, PaymentRepository, StudentRepository, SubjectRepository,
    TermRepository, WriteError,
};

use scholar_core::SchoolStores;
use scholar_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Builds the store bundle backed by the given connection.
#[must_use]
pub fn stores(db: &DatabaseConnection) -> SchoolStores {
    SchoolStores {
        students: Arc::new(StudentRepository::new(db.clone())),
        terms: Arc::new(TermRepository::new(db.clone())),
        subjects: Arc::new(SubjectRepository::new(db.clone())),
        results: Arc::new(ExamResultRepository::new(db.clone())),
        attendance: Arc::new(AttendanceRepository::new(db.clone())),
        fees: Arc::new(FeeStructureRepository::new(db.clone())),
        payments: Arc::new(PaymentRepository::new(db.clone())),
        expenses: Arc::new(ExpenseRepository::new(db.clone())),
        grade_bands: Arc::new(GradeBandRepository::new(db.clone())),
    }
}
