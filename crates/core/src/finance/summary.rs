//! Financial summaries and payment history.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use super::error::FinanceError;
use super::types::{FinancialSummary, Payment};
use crate::keys::AdmissionNumber;
use crate::store::{ExpenseStore, PaymentStore, SchoolStores};

/// Read-side ledger queries.
#[derive(Clone)]
pub struct FinanceService {
    payments: Arc<dyn PaymentStore>,
    expenses: Arc<dyn ExpenseStore>,
}

impl FinanceService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(stores: &SchoolStores) -> Self {
        Self {
            payments: Arc::clone(&stores.payments),
            expenses: Arc::clone(&stores.expenses),
        }
    }

    /// Income, expenditure, and net balance for payments and expenses dated
    /// within `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::InvalidDateRange` if `start > end`.
    pub async fn summarize(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FinancialSummary, FinanceError> {
        if start > end {
            return Err(FinanceError::InvalidDateRange { start, end });
        }

        let payments = self.payments.list_between(start, end).await?;
        let expenses = self.expenses.list_between(start, end).await?;

        let total_income: Decimal = payments.iter().map(|p| p.amount).sum();
        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();

        info!(
            %start,
            %end,
            %total_income,
            %total_expenses,
            "Financial summary generated"
        );

        Ok(FinancialSummary {
            period_start: start,
            period_end: end,
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            payments,
            expenses,
        })
    }

    /// The student's payments, newest first.
    pub async fn student_payments(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Vec<Payment>, FinanceError> {
        Ok(self.payments.list_for_student(admission_no).await?)
    }
}
