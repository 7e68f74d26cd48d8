//! Expense repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use scholar_core::StoreError;
use scholar_core::finance::{Expense, RecordExpenseInput};
use scholar_core::store::ExpenseStore;
use scholar_shared::types::ExpenseId;

use super::error::WriteError;
use crate::entities::expenses;

/// Expense reads and recording.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

fn to_expense(row: expenses::Model) -> Expense {
    Expense {
        id: ExpenseId::from_uuid(row.id),
        category: row.category,
        amount: row.amount,
        expense_date: row.expense_date,
        payment_method: row.payment_method,
        reference: row.reference,
        description: row.description,
        authorized_by: row.authorized_by,
        created_at: row.created_at.with_timezone(&Utc),
    }
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails validation or the insert fails.
    pub async fn record_expense(&self, input: RecordExpenseInput) -> Result<Expense, WriteError> {
        input.validate()?;

        let row = expenses::ActiveModel {
            id: Set(ExpenseId::new().into_inner()),
            category: Set(input.category.trim().to_string()),
            amount: Set(input.amount),
            expense_date: Set(input.expense_date),
            payment_method: Set(input.payment_method.trim().to_string()),
            reference: Set(input.reference),
            description: Set(input.description),
            authorized_by: Set(input.authorized_by.trim().to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        info!(
            category = %row.category,
            amount = %row.amount,
            authorized_by = %row.authorized_by,
            "Expense recorded"
        );

        Ok(to_expense(row))
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepository {
    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, StoreError> {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::ExpenseDate.gte(start))
            .filter(expenses::Column::ExpenseDate.lte(end))
            .order_by_desc(expenses::Column::ExpenseDate)
            .order_by_desc(expenses::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(rows.into_iter().map(to_expense).collect())
    }
}
