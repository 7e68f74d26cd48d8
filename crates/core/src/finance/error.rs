//! Finance error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::keys::{AdmissionNumber, KeyError};
use crate::store::StoreError;

/// Errors from the balance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// No student with this admission number.
    #[error("Student not found: {0}")]
    StudentNotFound(AdmissionNumber),

    /// Student exists but is not placed in a class.
    #[error("Student {0} has no class assigned")]
    NoClassAssigned(AdmissionNumber),

    /// Malformed admission number or term key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] KeyError),

    /// Store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BalanceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            Self::NoClassAssigned(_) => "NO_CLASS_ASSIGNED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Store(_) => "STORE_FAILURE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::StudentNotFound(_) | Self::NoClassAssigned(_) => 404,
            Self::InvalidArgument(_) => 400,
            Self::Store(_) => 500,
        }
    }

    /// Returns true for the "not found" family.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::StudentNotFound(_) | Self::NoClassAssigned(_))
    }
}

/// Errors from ledger submissions and summaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// Amount must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Required text field was empty.
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FinanceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::EmptyField(_) => "EMPTY_FIELD",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::Store(_) => "STORE_FAILURE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NonPositiveAmount(_) | Self::EmptyField(_) | Self::InvalidDateRange { .. } => {
                400
            }
            Self::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_error_codes() {
        let no = AdmissionNumber::parse("ADM-9").unwrap();
        assert_eq!(
            BalanceError::StudentNotFound(no.clone()).http_status_code(),
            404
        );
        assert_eq!(
            BalanceError::NoClassAssigned(no).error_code(),
            "NO_CLASS_ASSIGNED"
        );
        assert_eq!(
            BalanceError::from(KeyError::TermOutOfRange(5)).http_status_code(),
            400
        );
        assert_eq!(
            BalanceError::from(StoreError::new("boom")).http_status_code(),
            500
        );
    }

    #[test]
    fn test_store_failure_is_not_not_found() {
        assert!(!BalanceError::from(StoreError::new("timeout")).is_not_found());
    }

    #[test]
    fn test_finance_error_display() {
        let err = FinanceError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 2025-03-01 is after end 2025-01-01"
        );
    }
}
