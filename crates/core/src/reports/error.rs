//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::academics::UnrecognizedLearningArea;
use crate::keys::KeyError;
use crate::store::StoreError;

/// Errors that can occur during report generation.
///
/// A missing student or term is not an error: `generate` returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed admission number or term key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] KeyError),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Subject could not be placed in a learning area under the strict policy.
    #[error(transparent)]
    UnrecognizedLearningArea(#[from] UnrecognizedLearningArea),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Store(_) => "STORE_FAILURE",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::UnrecognizedLearningArea(_) => "UNRECOGNIZED_LEARNING_AREA",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) | Self::InvalidDateRange { .. } => 400,
            Self::UnrecognizedLearningArea(_) => 422,
            Self::Store(_) => 500,
        }
    }
}
