//! Errors from the write paths.

use sea_orm::DbErr;

use scholar_core::academics::AcademicError;
use scholar_core::finance::FinanceError;
use scholar_core::{AdmissionNumber, TermKey};
use scholar_shared::types::ExamId;

/// Error types for record submissions.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Payment or expense failed validation.
    #[error(transparent)]
    Finance(#[from] FinanceError),

    /// Exam result failed validation.
    #[error(transparent)]
    Academic(#[from] AcademicError),

    /// Referenced student does not exist.
    #[error("Student not found: {0}")]
    StudentNotFound(AdmissionNumber),

    /// Referenced term is not configured.
    #[error("Term not found: {0}")]
    TermNotFound(TermKey),

    /// Referenced exam does not exist.
    #[error("Exam not found: {0}")]
    ExamNotFound(ExamId),

    /// Referenced subject does not exist.
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
