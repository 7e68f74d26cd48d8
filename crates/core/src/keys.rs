//! Natural keys: admission numbers and (term, year) pairs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Admission number was empty or whitespace.
    #[error("Admission number must not be empty")]
    EmptyAdmissionNumber,

    /// Term number outside 1..=3.
    #[error("Term number must be between 1 and 3, got {0}")]
    TermOutOfRange(i32),

    /// Year not positive.
    #[error("Year must be positive, got {0}")]
    InvalidYear(i32),
}

/// A student's admission number. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AdmissionNumber(String);

impl AdmissionNumber {
    /// Parses an admission number, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KeyError::EmptyAdmissionNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the admission number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AdmissionNumber {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AdmissionNumber> for String {
    fn from(value: AdmissionNumber) -> Self {
        value.0
    }
}

impl fmt::Display for AdmissionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies an academic term: term number 1-3 within a school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTermKey")]
pub struct TermKey {
    year: i32,
    term: u8,
}

impl TermKey {
    /// Last term of a school year.
    pub const LAST_TERM: u8 = 3;

    /// Builds a validated term key.
    pub fn new(term: i32, year: i32) -> Result<Self, KeyError> {
        if year <= 0 {
            return Err(KeyError::InvalidYear(year));
        }
        let term = u8::try_from(term)
            .ok()
            .filter(|t| (1..=Self::LAST_TERM).contains(t))
            .ok_or(KeyError::TermOutOfRange(term))?;
        Ok(Self { year, term })
    }

    /// Term number (1-3).
    #[must_use]
    pub const fn term(self) -> u8 {
        self.term
    }

    /// School year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The term that follows this one. Term 3 rolls over to term 1 of the next year.
    ///
    /// Returns `None` when the following year is not representable.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.term < Self::LAST_TERM {
            return Some(Self {
                year: self.year,
                term: self.term + 1,
            });
        }
        match self.year.checked_add(1) {
            Some(year) => Some(Self { year, term: 1 }),
            None => None,
        }
    }
}

#[derive(Deserialize)]
struct RawTermKey {
    term: i32,
    year: i32,
}

impl TryFrom<RawTermKey> for TermKey {
    type Error = KeyError;

    fn try_from(raw: RawTermKey) -> Result<Self, Self::Error> {
        Self::new(raw.term, raw.year)
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term {} {}", self.term, self.year)
    }
}
