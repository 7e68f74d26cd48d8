//! Attendance repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use scholar_core::attendance::{AttendanceRecord, AttendanceStatus, RecordAttendanceInput};
use scholar_core::store::AttendanceStore;
use scholar_core::{AdmissionNumber, StoreError};

use super::error::WriteError;
use crate::entities::{attendance, students};

/// Attendance reads and recording.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    db: DatabaseConnection,
}

impl AttendanceRepository {
    /// Creates a new attendance repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a day's attendance, replacing any status already stored for
    /// the same (student, date).
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the write fails.
    pub async fn record(&self, input: RecordAttendanceInput) -> Result<(), WriteError> {
        if students::Entity::find_by_id(input.admission_no.as_str())
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(WriteError::StudentNotFound(input.admission_no));
        }

        let now = Utc::now().into();
        let row = attendance::ActiveModel {
            id: Set(Uuid::now_v7()),
            student_admission_no: Set(input.admission_no.to_string()),
            attendance_date: Set(input.date),
            status: Set(input.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        attendance::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    attendance::Column::StudentAdmissionNo,
                    attendance::Column::AttendanceDate,
                ])
                .update_columns([attendance::Column::Status, attendance::Column::UpdatedAt])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        info!(
            admission_no = %input.admission_no,
            date = %input.date,
            status = %input.status,
            "Attendance recorded"
        );

        Ok(())
    }
}

#[async_trait]
impl AttendanceStore for AttendanceRepository {
    async fn get_range(
        &self,
        admission_no: &AdmissionNumber,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        let rows = attendance::Entity::find()
            .filter(attendance::Column::StudentAdmissionNo.eq(admission_no.as_str()))
            .filter(attendance::Column::AttendanceDate.gte(start))
            .filter(attendance::Column::AttendanceDate.lte(end))
            .order_by_asc(attendance::Column::AttendanceDate)
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        Ok(rows
            .into_iter()
            .map(|row| AttendanceRecord {
                admission_no: admission_no.clone(),
                date: row.attendance_date,
                status: AttendanceStatus::from(row.status),
            })
            .collect())
    }
}
