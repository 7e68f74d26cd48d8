//! Exam result repository.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::info;
use uuid::Uuid;

use scholar_core::academics::{ExamResult, SubmitResultInput};
use scholar_core::store::ExamResultStore;
use scholar_core::{AdmissionNumber, StoreError, TermKey};
use scholar_shared::types::{ExamId, ExamResultId};

use super::error::WriteError;
use crate::entities::{exam_results, exams, students, subjects};

/// Exam result reads and submissions.
#[derive(Debug, Clone)]
pub struct ExamResultRepository {
    db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct ResultRow {
    student_admission_no: String,
    exam_id: Uuid,
    exam_name: String,
    subject_code: String,
    subject_name: String,
    marks: Decimal,
    comments: String,
}

impl ExamResultRepository {
    /// Creates a new exam result repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a mark. A second submission for the same (student, exam,
    /// subject) replaces the mark and comment of the existing row.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, a referenced record does not
    /// exist, or the database write fails.
    pub async fn upsert_result(
        &self,
        input: SubmitResultInput,
    ) -> Result<ExamResultId, WriteError> {
        input.validate()?;

        if students::Entity::find_by_id(input.admission_no.as_str())
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(WriteError::StudentNotFound(input.admission_no));
        }
        if exams::Entity::find_by_id(input.exam_id.into_inner())
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(WriteError::ExamNotFound(input.exam_id));
        }
        if subjects::Entity::find_by_id(input.subject_code.as_str())
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(WriteError::SubjectNotFound(input.subject_code));
        }

        let now = Utc::now().into();
        let row = exam_results::ActiveModel {
            id: Set(ExamResultId::new().into_inner()),
            student_admission_no: Set(input.admission_no.to_string()),
            exam_id: Set(input.exam_id.into_inner()),
            subject_code: Set(input.subject_code.clone()),
            marks: Set(input.marks),
            comments: Set(input.comments),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = exam_results::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    exam_results::Column::StudentAdmissionNo,
                    exam_results::Column::ExamId,
                    exam_results::Column::SubjectCode,
                ])
                .update_columns([
                    exam_results::Column::Marks,
                    exam_results::Column::Comments,
                    exam_results::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        info!(
            admission_no = %input.admission_no,
            exam_id = %input.exam_id,
            subject_code = %input.subject_code,
            "Exam result recorded"
        );

        Ok(ExamResultId::from_uuid(result.last_insert_id))
    }
}

#[async_trait]
impl ExamResultStore for ExamResultRepository {
    async fn get_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Vec<ExamResult>, StoreError> {
        let rows: Vec<ResultRow> = exam_results::Entity::find()
            .select_only()
            .column(exam_results::Column::StudentAdmissionNo)
            .column(exam_results::Column::ExamId)
            .column(exam_results::Column::SubjectCode)
            .column(exam_results::Column::Marks)
            .column(exam_results::Column::Comments)
            .column_as(exams::Column::Name, "exam_name")
            .column_as(subjects::Column::Name, "subject_name")
            .join(JoinType::InnerJoin, exam_results::Relation::Exams.def())
            .join(JoinType::InnerJoin, exam_results::Relation::Subjects.def())
            .filter(exam_results::Column::StudentAdmissionNo.eq(admission_no.as_str()))
            .filter(exams::Column::Term.eq(i16::from(term.term())))
            .filter(exams::Column::Year.eq(term.year()))
            .order_by_asc(subjects::Column::Name)
            .order_by_asc(exam_results::Column::SubjectCode)
            .into_model::<ResultRow>()
            .all(&self.db)
            .await
            .map_err(StoreError::new)?;

        rows.into_iter()
            .map(|row| {
                Ok(ExamResult {
                    admission_no: AdmissionNumber::parse(&row.student_admission_no)
                        .map_err(StoreError::new)?,
                    exam_id: ExamId::from_uuid(row.exam_id),
                    exam_name: row.exam_name,
                    subject_code: row.subject_code,
                    subject_name: row.subject_name,
                    marks: row.marks,
                    comments: row.comments,
                })
            })
            .collect()
    }
}
