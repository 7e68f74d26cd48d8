//! Term repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use scholar_core::store::TermStore;
use scholar_core::term::Term;
use scholar_core::{StoreError, TermKey};

use crate::entities::terms;

/// Term lookups.
#[derive(Debug, Clone)]
pub struct TermRepository {
    db: DatabaseConnection,
}

impl TermRepository {
    /// Creates a new term repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Rebuilds a term key from its stored columns.
pub(crate) fn term_key(term: i16, year: i32) -> Result<TermKey, StoreError> {
    TermKey::new(i32::from(term), year).map_err(StoreError::new)
}

#[async_trait]
impl TermStore for TermRepository {
    async fn get_term(&self, key: TermKey) -> Result<Option<Term>, StoreError> {
        let Some(model) = terms::Entity::find()
            .filter(terms::Column::Term.eq(i16::from(key.term())))
            .filter(terms::Column::Year.eq(key.year()))
            .one(&self.db)
            .await
            .map_err(StoreError::new)?
        else {
            return Ok(None);
        };

        Ok(Some(Term {
            key: term_key(model.term, model.year)?,
            start_date: model.start_date,
            end_date: model.end_date,
        }))
    }
}
