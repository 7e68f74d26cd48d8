//! Report card aggregation.
//!
//! This module composes a student's term report card from the read-side
//! stores:
//! - Graded exam results, grouped into learning areas
//! - Marks summary with an overall grade
//! - Attendance over the term window
//! - Outstanding fee balance
//! - Next term's opening date
//!
//! A report card is derived at request time and never persisted.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportCardService;
pub use types::*;
