//! Fee balances, payments, expenses, and financial summaries.
//!
//! This module implements the read side of the school ledger:
//! - Outstanding fee balance per student and term
//! - Financial summary over a date range
//! - Validation of payment and expense submissions

pub mod balance;
pub mod error;
pub mod summary;
pub mod types;

pub use balance::{BalanceCalculator, outstanding_balance};
pub use error::{BalanceError, FinanceError};
pub use summary::FinanceService;
pub use types::{
    Expense, FeeStructure, FinancialSummary, Payment, RecordExpenseInput, RecordPaymentInput,
};
