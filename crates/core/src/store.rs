//! Read-side store ports.
//!
//! The aggregation core never touches a database directly. Each port is a
//! narrow, typed query surface; `scholar-db` provides the SeaORM-backed
//! implementations. A failing call is a [`StoreError`], never an empty result.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::academics::{ExamResult, GradeBand};
use crate::attendance::AttendanceRecord;
use crate::finance::{Expense, FeeStructure, Payment};
use crate::keys::{AdmissionNumber, TermKey};
use crate::student::Student;
use crate::term::Term;

/// A store call itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Store failure: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Wraps a backend error.
    pub fn new(source: impl fmt::Display) -> Self {
        Self {
            message: source.to_string(),
        }
    }

    /// Backend error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Student lookups.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Returns the student, or `None` if no student has this admission number.
    async fn get_by_id(&self, admission_no: &AdmissionNumber)
    -> Result<Option<Student>, StoreError>;
}

/// Term lookups.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Returns the term for (term, year), if configured.
    async fn get_term(&self, key: TermKey) -> Result<Option<Term>, StoreError>;
}

/// Subject lookups.
#[async_trait]
pub trait SubjectStore: Send + Sync {
    /// Returns the subject's learning-area tag as stored. `None` when the
    /// subject is untagged or unknown.
    async fn get_learning_area(&self, subject_code: &str) -> Result<Option<String>, StoreError>;
}

/// Exam result lookups.
#[async_trait]
pub trait ExamResultStore: Send + Sync {
    /// All results of the student across every exam held in the term.
    async fn get_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Vec<ExamResult>, StoreError>;
}

/// Attendance lookups.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Records for the student with `start <= date <= end`, ordered by date.
    async fn get_range(
        &self,
        admission_no: &AdmissionNumber,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;
}

/// Fee structure lookups.
#[async_trait]
pub trait FeeStructureStore: Send + Sync {
    /// Every fee row (tuition, levies, ...) for the class in the term.
    async fn get_for_class_term(
        &self,
        class_name: &str,
        term: TermKey,
    ) -> Result<Vec<FeeStructure>, StoreError>;
}

/// Payment lookups.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Sum of the student's payments for the term. Zero when none.
    async fn sum_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Decimal, StoreError>;

    /// The student's payments, newest first.
    async fn list_for_student(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Vec<Payment>, StoreError>;

    /// Payments dated within `[start, end]`, newest first.
    async fn list_between(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<Payment>, StoreError>;
}

/// Expense lookups.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Expenses dated within `[start, end]`, newest first.
    async fn list_between(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<Expense>, StoreError>;
}

/// Grade band configuration.
#[async_trait]
pub trait GradeBandStore: Send + Sync {
    /// All configured bands.
    async fn all_bands(&self) -> Result<Vec<GradeBand>, StoreError>;
}

/// Handles to every store the report and ledger services read from.
#[derive(Clone)]
pub struct SchoolStores {
    /// Students.
    pub students: Arc<dyn StudentStore>,
    /// Terms.
    pub terms: Arc<dyn TermStore>,
    /// Subjects.
    pub subjects: Arc<dyn SubjectStore>,
    /// Exam results.
    pub results: Arc<dyn ExamResultStore>,
    /// Attendance.
    pub attendance: Arc<dyn AttendanceStore>,
    /// Fee structures.
    pub fees: Arc<dyn FeeStructureStore>,
    /// Payments.
    pub payments: Arc<dyn PaymentStore>,
    /// Expenses.
    pub expenses: Arc<dyn ExpenseStore>,
    /// Grade bands.
    pub grade_bands: Arc<dyn GradeBandStore>,
}
