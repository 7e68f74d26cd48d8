//! Outstanding fee balance per student and term.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::error::BalanceError;
use super::types::FeeStructure;
use crate::keys::{AdmissionNumber, TermKey};
use crate::store::{FeeStructureStore, PaymentStore, SchoolStores, StudentStore};
use crate::student::Student;

/// Amount still owed: total fees due minus total paid, floored at zero.
///
/// Overpayment never produces a negative balance or a credit.
#[must_use]
pub fn outstanding_balance(fees: &[FeeStructure], total_paid: Decimal) -> Decimal {
    let total_fees: Decimal = fees.iter().map(|f| f.amount).sum();
    (total_fees - total_paid).max(Decimal::ZERO)
}

/// Computes fee balances from the student, fee, and payment stores.
#[derive(Clone)]
pub struct BalanceCalculator {
    students: Arc<dyn StudentStore>,
    fees: Arc<dyn FeeStructureStore>,
    payments: Arc<dyn PaymentStore>,
}

impl BalanceCalculator {
    /// Creates a calculator over the given stores.
    #[must_use]
    pub fn new(stores: &SchoolStores) -> Self {
        Self {
            students: Arc::clone(&stores.students),
            fees: Arc::clone(&stores.fees),
            payments: Arc::clone(&stores.payments),
        }
    }

    /// Outstanding balance for raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::InvalidArgument` for a blank admission number or
    /// an out-of-range term, otherwise as [`Self::balance`].
    pub async fn balance_for(
        &self,
        admission_no: &str,
        term: i32,
        year: i32,
    ) -> Result<Decimal, BalanceError> {
        let admission_no = AdmissionNumber::parse(admission_no)?;
        let key = TermKey::new(term, year)?;
        self.balance(&admission_no, key).await
    }

    /// Outstanding balance of the student for the term.
    ///
    /// A class with no fee rows for the term owes nothing.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::StudentNotFound` or `BalanceError::NoClassAssigned`
    /// when the student cannot be placed, and `BalanceError::Store` when a
    /// store call fails.
    pub async fn balance(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Decimal, BalanceError> {
        let student = self
            .students
            .get_by_id(admission_no)
            .await?
            .ok_or_else(|| BalanceError::StudentNotFound(admission_no.clone()))?;

        self.balance_of(&student, term).await
    }

    /// Outstanding balance of an already loaded student.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::NoClassAssigned` when the student has no class,
    /// and `BalanceError::Store` when a store call fails.
    pub async fn balance_of(
        &self,
        student: &Student,
        term: TermKey,
    ) -> Result<Decimal, BalanceError> {
        let admission_no = &student.admission_no;
        let class_name = student
            .current_class()
            .ok_or_else(|| BalanceError::NoClassAssigned(admission_no.clone()))?;

        let fees = self.fees.get_for_class_term(class_name, term).await?;
        if fees.is_empty() {
            debug!(%admission_no, %term, class_name, "No fee structure for class");
            return Ok(Decimal::ZERO);
        }

        let total_paid = self
            .payments
            .sum_for_student_term(admission_no, term)
            .await?;

        Ok(outstanding_balance(&fees, total_paid))
    }
}
