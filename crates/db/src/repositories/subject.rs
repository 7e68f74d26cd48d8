//! Subject repository.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use scholar_core::StoreError;
use scholar_core::store::SubjectStore;

use crate::entities::subjects;

/// Subject lookups.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    db: DatabaseConnection,
}

impl SubjectRepository {
    /// Creates a new subject repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectStore for SubjectRepository {
    async fn get_learning_area(&self, subject_code: &str) -> Result<Option<String>, StoreError> {
        let subject = subjects::Entity::find_by_id(subject_code)
            .one(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(subject.and_then(|s| s.learning_area))
    }
}
