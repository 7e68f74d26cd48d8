//! Grade band repository.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use scholar_core::StoreError;
use scholar_core::academics::GradeBand;
use scholar_core::store::GradeBandStore;

use crate::entities::grade_bands;

/// Grade band configuration.
#[derive(Debug, Clone)]
pub struct GradeBandRepository {
    db: DatabaseConnection,
}

impl GradeBandRepository {
    /// Creates a new grade band repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GradeBandStore for GradeBandRepository {
    async fn all_bands(&self) -> Result<Vec<GradeBand>, StoreError> {
        let rows = grade_bands::Entity::find()
            .order_by_desc(grade_bands::Column::MinMarks)
            .order_by_asc(grade_bands::Column::Id)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        rows.into_iter()
            .map(|row| {
                GradeBand::new(row.min_marks, row.max_marks, row.grade, row.remarks)
                    .map_err(StoreError::new)
            })
            .collect()
    }
}
