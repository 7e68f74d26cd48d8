//! Exam result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scholar_shared::types::ExamId;

use crate::keys::AdmissionNumber;

/// Errors raised when submitting academic records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcademicError {
    /// Mark outside 0..=100.
    #[error("Marks must be between 0 and 100, got {0}")]
    MarksOutOfRange(Decimal),

    /// Subject code was empty.
    #[error("Subject code must not be empty")]
    EmptySubjectCode,
}

impl AcademicError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MarksOutOfRange(_) => "MARKS_OUT_OF_RANGE",
            Self::EmptySubjectCode => "EMPTY_SUBJECT_CODE",
        }
    }
}

/// One mark for a (student, exam, subject) triple, joined with its exam and
/// subject names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    /// Student.
    pub admission_no: AdmissionNumber,
    /// Exam sitting.
    pub exam_id: ExamId,
    /// Exam name.
    pub exam_name: String,
    /// Subject code.
    pub subject_code: String,
    /// Subject name.
    pub subject_name: String,
    /// Mark, expected in 0..=100.
    pub marks: Decimal,
    /// Teacher's comment.
    pub comments: String,
}

/// Submission of a mark. A second submission for the same triple replaces
/// the stored mark and comment.
#[derive(Debug, Clone)]
pub struct SubmitResultInput {
    /// Student.
    pub admission_no: AdmissionNumber,
    /// Exam sitting.
    pub exam_id: ExamId,
    /// Subject code.
    pub subject_code: String,
    /// Mark.
    pub marks: Decimal,
    /// Comment.
    pub comments: String,
}

impl SubmitResultInput {
    /// Validates the submission.
    pub fn validate(&self) -> Result<(), AcademicError> {
        if self.subject_code.trim().is_empty() {
            return Err(AcademicError::EmptySubjectCode);
        }
        if self.marks < Decimal::ZERO || self.marks > Decimal::ONE_HUNDRED {
            return Err(AcademicError::MarksOutOfRange(self.marks));
        }
        Ok(())
    }
}
