//! Core business logic for Scholar.
//!
//! This crate contains pure report and ledger logic with ZERO web or database
//! dependencies. Persistence is reached only through the store ports in
//! [`store`].
//!
//! # Modules
//!
//! - `keys` - Admission numbers and (term, year) keys
//! - `student` - Student records
//! - `term` - Academic terms and term rollover
//! - `academics` - Grade bands, learning areas, exam results
//! - `attendance` - Attendance records and summaries
//! - `finance` - Fee balances, payments, expenses, financial summaries
//! - `reports` - Report card aggregation
//! - `store` - Read-side store ports

pub mod academics;
pub mod attendance;
pub mod finance;
pub mod keys;
pub mod reports;
pub mod store;
pub mod student;
pub mod term;

#[cfg(test)]
pub(crate) mod testing;

pub use keys::{AdmissionNumber, KeyError, TermKey};
pub use store::{SchoolStores, StoreError};
