//! Ledger record types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use scholar_shared::types::{ExpenseId, FeeStructureId, PaymentId};

use super::error::FinanceError;
use crate::keys::{AdmissionNumber, TermKey};

/// A fee row for a class in a term. A class/term pair may carry several rows
/// (tuition, levies, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructure {
    /// Row ID.
    pub id: FeeStructureId,
    /// Class the fee applies to.
    pub class_name: String,
    /// Term the fee applies to.
    pub term: TermKey,
    /// Amount due.
    pub amount: Decimal,
    /// Description (e.g. "Tuition").
    pub description: String,
}

/// A recorded payment. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Paying student.
    pub admission_no: AdmissionNumber,
    /// Term the payment is credited to.
    pub term: TermKey,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of payment.
    pub payment_date: NaiveDate,
    /// Payment method (cash, bank, mobile money, ...).
    pub payment_method: String,
    /// External reference (receipt or transaction number).
    pub reference: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Staff member who recorded the payment.
    pub received_by: String,
    /// When the payment was recorded.
    pub created_at: DateTime<Utc>,
}

/// A recorded school expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Expense category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub expense_date: NaiveDate,
    /// Payment method.
    pub payment_method: String,
    /// External reference.
    pub reference: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Staff member who authorized the expense.
    pub authorized_by: String,
    /// When the expense was recorded.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentInput {
    /// Paying student.
    pub admission_no: AdmissionNumber,
    /// Term credited.
    pub term: TermKey,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of payment.
    pub payment_date: NaiveDate,
    /// Payment method.
    pub payment_method: String,
    /// External reference.
    pub reference: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Recording staff member.
    pub received_by: String,
}

impl RecordPaymentInput {
    /// Validates the submission before it reaches the ledger.
    pub fn validate(&self) -> Result<(), FinanceError> {
        validate_amount(self.amount)?;
        require("payment_method", &self.payment_method)?;
        require("received_by", &self.received_by)
    }
}

/// Input for recording an expense.
#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    /// Expense category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub expense_date: NaiveDate,
    /// Payment method.
    pub payment_method: String,
    /// External reference.
    pub reference: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Authorizing staff member.
    pub authorized_by: String,
}

impl RecordExpenseInput {
    /// Validates the submission before it reaches the ledger.
    pub fn validate(&self) -> Result<(), FinanceError> {
        validate_amount(self.amount)?;
        require("category", &self.category)?;
        require("payment_method", &self.payment_method)?;
        require("authorized_by", &self.authorized_by)
    }
}

fn validate_amount(amount: Decimal) -> Result<(), FinanceError> {
    if amount <= Decimal::ZERO {
        return Err(FinanceError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), FinanceError> {
    if value.trim().is_empty() {
        return Err(FinanceError::EmptyField(field));
    }
    Ok(())
}

/// Income and expenditure over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// First day of the range.
    pub period_start: NaiveDate,
    /// Last day of the range, inclusive.
    pub period_end: NaiveDate,
    /// Sum of payments received.
    pub total_income: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses. May be negative.
    pub net_balance: Decimal,
    /// Payments in the range, newest first.
    pub payments: Vec<Payment>,
    /// Expenses in the range, newest first.
    pub expenses: Vec<Expense>,
}
