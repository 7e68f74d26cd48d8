//! Academic terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::keys::TermKey;

/// An academic term with its date window.
///
/// Terms of a school year are contiguous and non-overlapping; term 3 of year
/// Y is followed by term 1 of year Y+1 (see [`TermKey::next`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// (term, year) key.
    pub key: TermKey,
    /// First day of the term.
    pub start_date: NaiveDate,
    /// Last day of the term, inclusive.
    pub end_date: NaiveDate,
}
