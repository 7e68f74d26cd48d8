//! Fee structure repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use scholar_core::finance::FeeStructure;
use scholar_core::store::FeeStructureStore;
use scholar_core::{StoreError, TermKey};
use scholar_shared::types::FeeStructureId;

use super::term::term_key;
use crate::entities::fee_structures;

/// Fee structure lookups.
#[derive(Debug, Clone)]
pub struct FeeStructureRepository {
    db: DatabaseConnection,
}

impl FeeStructureRepository {
    /// Creates a new fee structure repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeeStructureStore for FeeStructureRepository {
    async fn get_for_class_term(
        &self,
        class_name: &str,
        term: TermKey,
    ) -> Result<Vec<FeeStructure>, StoreError> {
        let rows = fee_structures::Entity::find()
            .filter(fee_structures::Column::ClassName.eq(class_name))
            .filter(fee_structures::Column::Term.eq(i16::from(term.term())))
            .filter(fee_structures::Column::Year.eq(term.year()))
            .order_by_asc(fee_structures::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        rows.into_iter()
            .map(|row| {
                Ok(FeeStructure {
                    id: FeeStructureId::from_uuid(row.id),
                    class_name: row.class_name,
                    term: term_key(row.term, row.year)?,
                    amount: row.amount,
                    description: row.description,
                })
            })
            .collect()
    }
}
