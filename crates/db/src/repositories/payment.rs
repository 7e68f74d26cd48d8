//! Payment repository: fee payment reads and the payment write path.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use scholar_core::finance::{Payment, RecordPaymentInput};
use scholar_core::store::PaymentStore;
use scholar_core::{AdmissionNumber, StoreError, TermKey};
use scholar_shared::types::PaymentId;

use super::error::WriteError;
use super::term::term_key;
use crate::entities::{payments, students, terms};

/// Payment reads and recording.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

fn to_payment(row: payments::Model) -> Result<Payment, StoreError> {
    Ok(Payment {
        id: PaymentId::from_uuid(row.id),
        admission_no: AdmissionNumber::parse(&row.student_admission_no).map_err(StoreError::new)?,
        term: term_key(row.term, row.year)?,
        amount: row.amount,
        payment_date: row.payment_date,
        payment_method: row.payment_method,
        reference: row.reference,
        description: row.description,
        received_by: row.received_by,
        created_at: row.created_at.with_timezone(&Utc),
    })
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment inside a database transaction.
    ///
    /// Nothing is committed unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input fails validation
    /// - The student or the term does not exist
    /// - The database write fails
    pub async fn record_payment(&self, input: RecordPaymentInput) -> Result<Payment, WriteError> {
        input.validate()?;

        let txn = self.db.begin().await?;

        if students::Entity::find_by_id(input.admission_no.as_str())
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(WriteError::StudentNotFound(input.admission_no));
        }
        if terms::Entity::find()
            .filter(terms::Column::Term.eq(i16::from(input.term.term())))
            .filter(terms::Column::Year.eq(input.term.year()))
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(WriteError::TermNotFound(input.term));
        }

        let row = payments::ActiveModel {
            id: Set(PaymentId::new().into_inner()),
            student_admission_no: Set(input.admission_no.to_string()),
            term: Set(i16::from(input.term.term())),
            year: Set(input.term.year()),
            amount: Set(input.amount),
            payment_date: Set(input.payment_date),
            payment_method: Set(input.payment_method.trim().to_string()),
            reference: Set(input.reference),
            description: Set(input.description),
            received_by: Set(input.received_by.trim().to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            admission_no = %input.admission_no,
            term = %input.term,
            amount = %input.amount,
            received_by = %row.received_by,
            "Payment recorded"
        );

        Ok(Payment {
            id: PaymentId::from_uuid(row.id),
            admission_no: input.admission_no,
            term: input.term,
            amount: row.amount,
            payment_date: row.payment_date,
            payment_method: row.payment_method,
            reference: row.reference,
            description: row.description,
            received_by: row.received_by,
            created_at: row.created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PaymentStore for PaymentRepository {
    async fn sum_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Decimal, StoreError> {
        let amounts: Vec<Decimal> = payments::Entity::find()
            .filter(payments::Column::StudentAdmissionNo.eq(admission_no.as_str()))
            .filter(payments::Column::Term.eq(i16::from(term.term())))
            .filter(payments::Column::Year.eq(term.year()))
            .select_only()
            .column(payments::Column::Amount)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(amounts.into_iter().sum())
    }

    async fn list_for_student(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Vec<Payment>, StoreError> {
        payments::Entity::find()
            .filter(payments::Column::StudentAdmissionNo.eq(admission_no.as_str()))
            .order_by_desc(payments::Column::PaymentDate)
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?
            .into_iter()
            .map(to_payment)
            .collect()
    }

    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Payment>, StoreError> {
        payments::Entity::find()
            .filter(payments::Column::PaymentDate.gte(start))
            .filter(payments::Column::PaymentDate.lte(end))
            .order_by_desc(payments::Column::PaymentDate)
            .order_by_desc(payments::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?
            .into_iter()
            .map(to_payment)
            .collect()
    }
}
