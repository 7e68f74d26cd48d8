//! Student repository.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use scholar_core::store::StudentStore;
use scholar_core::student::{Gender, Guardian, Student};
use scholar_core::{AdmissionNumber, StoreError};

use crate::entities::students;

/// Student lookups.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    /// Creates a new student repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn to_student(model: students::Model) -> Result<Student, StoreError> {
    let gender = match model.gender.as_deref() {
        Some("male") => Some(Gender::Male),
        Some("female") => Some(Gender::Female),
        _ => None,
    };

    Ok(Student {
        admission_no: AdmissionNumber::parse(&model.admission_no).map_err(StoreError::new)?,
        first_name: model.first_name,
        last_name: model.last_name,
        gender,
        date_of_birth: model.date_of_birth,
        guardian: Guardian {
            name: model.guardian_name,
            phone: model.guardian_phone,
            email: model.guardian_email,
        },
        class_name: model.class_name,
    })
}

#[async_trait]
impl StudentStore for StudentRepository {
    async fn get_by_id(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Option<Student>, StoreError> {
        students::Entity::find_by_id(admission_no.as_str())
            .one(&self.db)
            .await
            .map_err(StoreError::new)?
            .map(to_student)
            .transpose()
    }
}
