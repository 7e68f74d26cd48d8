//! Shared fixtures for repository integration tests.
//!
//! Tests run against the database named by `DATABASE_URL` after
//! `scholar-migrator up`. When the variable is unset the tests return early.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use scholar_core::{AdmissionNumber, TermKey};
use scholar_db::entities::{exams, fee_structures, grade_bands, students, subjects, terms};

/// Connects to the test database, or `None` when `DATABASE_URL` is unset.
pub async fn connect() -> Option<DatabaseConnection> {
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(
        Database::connect(&url)
            .await
            .expect("Failed to connect to database"),
    )
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A year no other test is likely to use, so (term, year) stays unique.
pub fn unique_year() -> i32 {
    let offset = i32::try_from(Uuid::new_v4().as_u128() % 7000).unwrap();
    2100 + offset
}

pub async fn create_student(db: &DatabaseConnection, class_name: Option<&str>) -> AdmissionNumber {
    let admission_no = format!("T-{}", &Uuid::new_v4().simple().to_string()[..12]);
    let now = Utc::now().into();
    students::ActiveModel {
        admission_no: Set(admission_no.clone()),
        first_name: Set("Test".to_string()),
        last_name: Set("Student".to_string()),
        gender: Set(Some("female".to_string())),
        date_of_birth: Set(None),
        guardian_name: Set("Test Guardian".to_string()),
        guardian_phone: Set(None),
        guardian_email: Set(None),
        class_name: Set(class_name.map(String::from)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to create test student");

    AdmissionNumber::parse(&admission_no).unwrap()
}

pub async fn create_term(db: &DatabaseConnection, key: TermKey, start: NaiveDate, end: NaiveDate) {
    terms::ActiveModel {
        id: Set(Uuid::now_v7()),
        term: Set(i16::from(key.term())),
        year: Set(key.year()),
        start_date: Set(start),
        end_date: Set(end),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to create test term");
}

pub async fn create_subject(db: &DatabaseConnection, name: &str, area: Option<&str>) -> String {
    let code = format!("S{}", &Uuid::new_v4().simple().to_string()[..8]);
    subjects::ActiveModel {
        code: Set(code.clone()),
        name: Set(name.to_string()),
        learning_area: Set(area.map(String::from)),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to create test subject");
    code
}

pub async fn create_exam(db: &DatabaseConnection, key: TermKey, name: &str) -> Uuid {
    let id = Uuid::now_v7();
    exams::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        term: Set(i16::from(key.term())),
        year: Set(key.year()),
        exam_date: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to create test exam");
    id
}

pub async fn create_fee(db: &DatabaseConnection, class_name: &str, key: TermKey, amount: Decimal) {
    fee_structures::ActiveModel {
        id: Set(Uuid::now_v7()),
        class_name: Set(class_name.to_string()),
        term: Set(i16::from(key.term())),
        year: Set(key.year()),
        amount: Set(amount),
        description: Set("Tuition".to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to create test fee structure");
}

/// Seeds the standard A/B/C/F bands when no bands are configured.
pub async fn ensure_grade_bands(db: &DatabaseConnection) {
    let existing = grade_bands::Entity::find()
        .count(db)
        .await
        .expect("Failed to count grade bands");
    if existing > 0 {
        return;
    }

    for (min, max, grade, remarks) in [
        (80, 100, "A", "Excellent"),
        (60, 79, "B", "Good"),
        (40, 59, "C", "Fair"),
        (0, 39, "F", "Fail"),
    ] {
        grade_bands::ActiveModel {
            id: Set(Uuid::now_v7()),
            min_marks: Set(Decimal::from(min)),
            max_marks: Set(Decimal::from(max)),
            grade: Set(grade.to_string()),
            remarks: Set(remarks.to_string()),
        }
        .insert(db)
        .await
        .expect("Failed to create grade band");
    }
}

/// A unique class name so fee rows never collide across tests.
pub fn unique_class() -> String {
    format!("C-{}", &Uuid::new_v4().simple().to_string()[..8])
}
