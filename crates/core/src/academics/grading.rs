//! Grade resolution: mark -> grade band.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder rendered for grade and remark when no band matches.
pub const NO_GRADE: &str = "-";

/// Rejected grade band configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeBandError {
    /// Lower bound above upper bound.
    #[error("Grade band {grade}: min_marks {min} is above max_marks {max}")]
    InvertedRange {
        /// Grade letter.
        grade: String,
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// Grade letter was empty.
    #[error("Grade band letter must not be empty")]
    EmptyGrade,
}

/// A closed mark range `[min_marks, max_marks]` mapped to a letter and remark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Inclusive lower bound.
    pub min_marks: Decimal,
    /// Inclusive upper bound.
    pub max_marks: Decimal,
    /// Grade letter (e.g. "A").
    pub grade: String,
    /// Remark printed next to the grade.
    pub remarks: String,
}

impl GradeBand {
    /// Builds a validated band.
    pub fn new(
        min_marks: Decimal,
        max_marks: Decimal,
        grade: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Result<Self, GradeBandError> {
        let grade = grade.into();
        if grade.trim().is_empty() {
            return Err(GradeBandError::EmptyGrade);
        }
        if min_marks > max_marks {
            return Err(GradeBandError::InvertedRange {
                grade,
                min: min_marks,
                max: max_marks,
            });
        }
        Ok(Self {
            min_marks,
            max_marks,
            grade,
            remarks: remarks.into(),
        })
    }

    /// Returns true if the mark falls inside this band.
    #[must_use]
    pub fn contains(&self, mark: Decimal) -> bool {
        self.min_marks <= mark && mark <= self.max_marks
    }
}

/// Maps marks to grade bands.
///
/// Marks are not range-checked here: an out-of-range mark simply matches no
/// band. When bands overlap, the band with the greatest `min_marks` wins, and
/// equal lower bounds keep the earlier band.
#[derive(Debug, Clone, Default)]
pub struct GradeResolver {
    bands: Vec<GradeBand>,
}

impl GradeResolver {
    /// Creates a resolver over the given band configuration.
    #[must_use]
    pub fn new(bands: Vec<GradeBand>) -> Self {
        Self { bands }
    }

    /// Resolves a mark to its band, if any.
    #[must_use]
    pub fn resolve(&self, mark: Decimal) -> Option<&GradeBand> {
        self.bands
            .iter()
            .filter(|band| band.contains(mark))
            .fold(None, |best: Option<&GradeBand>, band| match best {
                Some(current) if current.min_marks >= band.min_marks => Some(current),
                _ => Some(band),
            })
    }

    /// Resolves a mark to `(grade, remarks)`, using [`NO_GRADE`] for both when
    /// no band matches.
    #[must_use]
    pub fn grade_and_remarks(&self, mark: Decimal) -> (String, String) {
        self.resolve(mark).map_or_else(
            || (NO_GRADE.to_string(), NO_GRADE.to_string()),
            |band| (band.grade.clone(), band.remarks.clone()),
        )
    }
}
