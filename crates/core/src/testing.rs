//! In-memory store fakes for unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use scholar_shared::types::{ExamId, ExpenseId, FeeStructureId, PaymentId};

use crate::academics::{ExamResult, GradeBand};
use crate::attendance::{AttendanceRecord, AttendanceStatus};
use crate::finance::{Expense, FeeStructure, Payment};
use crate::keys::{AdmissionNumber, TermKey};
use crate::store::{
    AttendanceStore, ExamResultStore, ExpenseStore, FeeStructureStore, GradeBandStore,
    PaymentStore, SchoolStores, StoreError, StudentStore, SubjectStore, TermStore,
};
use crate::student::{Gender, Guardian, Student};
use crate::term::Term;

/// Which port should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Students,
    Terms,
    Subjects,
    Results,
    Attendance,
    Fees,
    Payments,
    Expenses,
    GradeBands,
}

/// A whole school held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySchool {
    pub students: Vec<Student>,
    pub terms: Vec<Term>,
    pub subject_areas: HashMap<String, String>,
    pub results: Vec<(TermKey, ExamResult)>,
    pub attendance: Vec<AttendanceRecord>,
    pub fees: Vec<FeeStructure>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub bands: Vec<GradeBand>,
    pub failing: Vec<Port>,
}

pub fn adm(raw: &str) -> AdmissionNumber {
    AdmissionNumber::parse(raw).unwrap()
}

pub fn key(term: i32, year: i32) -> TermKey {
    TermKey::new(term, year).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn student(no: &str, class_name: Option<&str>) -> Student {
    Student {
        admission_no: adm(no),
        first_name: "Amina".to_string(),
        last_name: "Nakato".to_string(),
        gender: Some(Gender::Female),
        date_of_birth: Some(date(2012, 4, 9)),
        guardian: Guardian {
            name: "Grace Nakato".to_string(),
            phone: Some("+256700000001".to_string()),
            email: None,
        },
        class_name: class_name.map(String::from),
    }
}

pub fn standard_bands() -> Vec<GradeBand> {
    vec![
        GradeBand::new(Decimal::from(80), Decimal::from(100), "A", "Excellent").unwrap(),
        GradeBand::new(Decimal::from(60), Decimal::from(79), "B", "Good").unwrap(),
        GradeBand::new(Decimal::from(40), Decimal::from(59), "C", "Fair").unwrap(),
        GradeBand::new(Decimal::from(0), Decimal::from(39), "F", "Fail").unwrap(),
    ]
}

pub fn fee(class_name: &str, term: TermKey, amount: Decimal, description: &str) -> FeeStructure {
    FeeStructure {
        id: FeeStructureId::new(),
        class_name: class_name.to_string(),
        term,
        amount,
        description: description.to_string(),
    }
}

pub fn payment(no: &str, term: TermKey, amount: Decimal, on: NaiveDate) -> Payment {
    Payment {
        id: PaymentId::new(),
        admission_no: adm(no),
        term,
        amount,
        payment_date: on,
        payment_method: "cash".to_string(),
        reference: None,
        description: None,
        received_by: "bursar".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn expense(category: &str, amount: Decimal, on: NaiveDate) -> Expense {
    Expense {
        id: ExpenseId::new(),
        category: category.to_string(),
        amount,
        expense_date: on,
        payment_method: "bank".to_string(),
        reference: None,
        description: None,
        authorized_by: "head teacher".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn result(no: &str, subject_code: &str, subject_name: &str, marks: Decimal) -> ExamResult {
    ExamResult {
        admission_no: adm(no),
        exam_id: ExamId::new(),
        exam_name: "End of Term".to_string(),
        subject_code: subject_code.to_string(),
        subject_name: subject_name.to_string(),
        marks,
        comments: String::new(),
    }
}

pub fn attendance_record(no: &str, on: NaiveDate, status: &str) -> AttendanceRecord {
    AttendanceRecord {
        admission_no: adm(no),
        date: on,
        status: AttendanceStatus::from(status),
    }
}

impl MemorySchool {
    pub fn stores(self) -> SchoolStores {
        let school = Arc::new(self);
        SchoolStores {
            students: school.clone(),
            terms: school.clone(),
            subjects: school.clone(),
            results: school.clone(),
            attendance: school.clone(),
            fees: school.clone(),
            payments: school.clone(),
            expenses: school.clone(),
            grade_bands: school,
        }
    }

    fn check(&self, port: Port) -> Result<(), StoreError> {
        if self.failing.contains(&port) {
            return Err(StoreError::new(format!("{port:?} store unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentStore for MemorySchool {
    async fn get_by_id(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Option<Student>, StoreError> {
        self.check(Port::Students)?;
        Ok(self
            .students
            .iter()
            .find(|s| &s.admission_no == admission_no)
            .cloned())
    }
}

#[async_trait]
impl TermStore for MemorySchool {
    async fn get_term(&self, key: TermKey) -> Result<Option<Term>, StoreError> {
        self.check(Port::Terms)?;
        Ok(self.terms.iter().find(|t| t.key == key).cloned())
    }
}

#[async_trait]
impl SubjectStore for MemorySchool {
    async fn get_learning_area(&self, subject_code: &str) -> Result<Option<String>, StoreError> {
        self.check(Port::Subjects)?;
        Ok(self.subject_areas.get(subject_code).cloned())
    }
}

#[async_trait]
impl ExamResultStore for MemorySchool {
    async fn get_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Vec<ExamResult>, StoreError> {
        self.check(Port::Results)?;
        Ok(self
            .results
            .iter()
            .filter(|(k, r)| *k == term && &r.admission_no == admission_no)
            .map(|(_, r)| r.clone())
            .collect())
    }
}

#[async_trait]
impl AttendanceStore for MemorySchool {
    async fn get_range(
        &self,
        admission_no: &AdmissionNumber,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.check(Port::Attendance)?;
        let mut records: Vec<_> = self
            .attendance
            .iter()
            .filter(|r| &r.admission_no == admission_no && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

#[async_trait]
impl FeeStructureStore for MemorySchool {
    async fn get_for_class_term(
        &self,
        class_name: &str,
        term: TermKey,
    ) -> Result<Vec<FeeStructure>, StoreError> {
        self.check(Port::Fees)?;
        Ok(self
            .fees
            .iter()
            .filter(|f| f.class_name == class_name && f.term == term)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentStore for MemorySchool {
    async fn sum_for_student_term(
        &self,
        admission_no: &AdmissionNumber,
        term: TermKey,
    ) -> Result<Decimal, StoreError> {
        self.check(Port::Payments)?;
        Ok(self
            .payments
            .iter()
            .filter(|p| &p.admission_no == admission_no && p.term == term)
            .map(|p| p.amount)
            .sum())
    }

    async fn list_for_student(
        &self,
        admission_no: &AdmissionNumber,
    ) -> Result<Vec<Payment>, StoreError> {
        self.check(Port::Payments)?;
        let mut payments: Vec<_> = self
            .payments
            .iter()
            .filter(|p| &p.admission_no == admission_no)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(payments)
    }

    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Payment>, StoreError> {
        self.check(Port::Payments)?;
        let mut payments: Vec<_> = self
            .payments
            .iter()
            .filter(|p| p.payment_date >= start && p.payment_date <= end)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
        Ok(payments)
    }
}

#[async_trait]
impl ExpenseStore for MemorySchool {
    async fn list_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, StoreError> {
        self.check(Port::Expenses)?;
        let mut expenses: Vec<_> = self
            .expenses
            .iter()
            .filter(|e| e.expense_date >= start && e.expense_date <= end)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
        Ok(expenses)
    }
}

#[async_trait]
impl GradeBandStore for MemorySchool {
    async fn all_bands(&self) -> Result<Vec<GradeBand>, StoreError> {
        self.check(Port::GradeBands)?;
        Ok(self.bands.clone())
    }
}
