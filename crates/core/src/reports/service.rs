//! Report card composition.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use scholar_shared::LearningAreaPolicy;

use super::error::ReportError;
use super::types::{
    GradedResult, LearningAreaGroup, ReportCard, ReportSummary, SchoolInfo, TermDates,
};
use crate::academics::{ExamResult, GradeResolver, LearningArea, categorize};
use crate::attendance::AttendanceSummary;
use crate::finance::{BalanceCalculator, BalanceError};
use crate::keys::{AdmissionNumber, TermKey};
use crate::store::SchoolStores;
use crate::student::Student;
use crate::term::Term;

/// Composes report cards from the read-side stores.
///
/// Holds no mutable state; concurrent generations are independent.
#[derive(Clone)]
pub struct ReportCardService {
    stores: SchoolStores,
    balances: BalanceCalculator,
    policy: LearningAreaPolicy,
    school: SchoolInfo,
}

impl ReportCardService {
    /// Creates a report service.
    #[must_use]
    pub fn new(stores: SchoolStores, policy: LearningAreaPolicy, school: SchoolInfo) -> Self {
        Self {
            balances: BalanceCalculator::new(&stores),
            stores,
            policy,
            school,
        }
    }

    /// Generates a report card stamped with the current time.
    ///
    /// Returns `Ok(None)` when the student or the term does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidArgument` for a blank admission number or
    /// an out-of-range term, and see [`Self::generate_at`].
    pub async fn generate(
        &self,
        admission_no: &str,
        term: i32,
        year: i32,
    ) -> Result<Option<ReportCard>, ReportError> {
        let admission_no = AdmissionNumber::parse(admission_no)?;
        let key = TermKey::new(term, year)?;
        self.generate_at(&admission_no, key, Utc::now()).await
    }

    /// Generates a report card with an explicit timestamp.
    ///
    /// Missing fee structures, attendance, or results degrade to zero or
    /// empty values.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Store` when any store call fails,
    /// `ReportError::InvalidDateRange` when the term's dates are inverted, and
    /// `ReportError::UnrecognizedLearningArea` under the strict policy.
    pub async fn generate_at(
        &self,
        admission_no: &AdmissionNumber,
        key: TermKey,
        generated_at: DateTime<Utc>,
    ) -> Result<Option<ReportCard>, ReportError> {
        let Some(student) = self.stores.students.get_by_id(admission_no).await? else {
            debug!(%admission_no, "Student not found");
            return Ok(None);
        };

        let Some(term) = self.stores.terms.get_term(key).await? else {
            debug!(%admission_no, %key, "Term not found");
            return Ok(None);
        };

        if term.start_date > term.end_date {
            return Err(ReportError::InvalidDateRange {
                start: term.start_date,
                end: term.end_date,
            });
        }

        let resolver = GradeResolver::new(self.stores.grade_bands.all_bands().await?);
        let results = self.graded_results(admission_no, key, &resolver).await?;
        let summary = ReportSummary::from_results(&results, &resolver);

        let records = self
            .stores
            .attendance
            .get_range(admission_no, term.start_date, term.end_date)
            .await?;
        let attendance = AttendanceSummary::from_records(&records);

        let outstanding_balance = self.outstanding_balance(&student, key).await?;
        let term_dates = self.term_dates(&term).await?;

        info!(
            %admission_no,
            term = key.term(),
            year = key.year(),
            subject_count = summary.subject_count,
            average_marks = %summary.average_marks,
            "Report card generated"
        );

        Ok(Some(ReportCard {
            school: self.school.clone(),
            student,
            term: key,
            term_dates,
            learning_areas: LearningAreaGroup::group(&results),
            results,
            summary,
            attendance,
            outstanding_balance,
            generated_at,
        }))
    }

    async fn graded_results(
        &self,
        admission_no: &AdmissionNumber,
        key: TermKey,
        resolver: &GradeResolver,
    ) -> Result<Vec<GradedResult>, ReportError> {
        let mut results = self
            .stores
            .results
            .get_for_student_term(admission_no, key)
            .await?;
        results.sort_by(|a, b| {
            (&a.subject_name, &a.subject_code, &a.exam_name).cmp(&(
                &b.subject_name,
                &b.subject_code,
                &b.exam_name,
            ))
        });

        let mut areas: HashMap<String, LearningArea> = HashMap::new();
        let mut graded = Vec::with_capacity(results.len());
        for result in results {
            let area = self.learning_area(&result, &mut areas).await?;
            graded.push(GradedResult::new(result, area, resolver));
        }
        Ok(graded)
    }

    async fn learning_area(
        &self,
        result: &ExamResult,
        seen: &mut HashMap<String, LearningArea>,
    ) -> Result<LearningArea, ReportError> {
        if let Some(area) = seen.get(&result.subject_code) {
            return Ok(*area);
        }
        let tag = self
            .stores
            .subjects
            .get_learning_area(&result.subject_code)
            .await?;
        let area = categorize(&result.subject_code, tag.as_deref(), self.policy)?;
        seen.insert(result.subject_code.clone(), area);
        Ok(area)
    }

    async fn outstanding_balance(
        &self,
        student: &Student,
        key: TermKey,
    ) -> Result<Option<Decimal>, ReportError> {
        match self.balances.balance_of(student, key).await {
            Ok(balance) => Ok(Some(balance)),
            Err(BalanceError::Store(err)) => Err(err.into()),
            Err(BalanceError::InvalidArgument(err)) => Err(err.into()),
            Err(err @ (BalanceError::StudentNotFound(_) | BalanceError::NoClassAssigned(_))) => {
                warn!(admission_no = %student.admission_no, %key, %err, "Balance unavailable");
                Ok(None)
            }
        }
    }

    async fn term_dates(&self, term: &Term) -> Result<TermDates, ReportError> {
        let next_term_start = match term.key.next() {
            Some(next) => self
                .stores
                .terms
                .get_term(next)
                .await?
                .map(|next| next.start_date),
            None => None,
        };

        Ok(TermDates {
            start_date: term.start_date,
            end_date: term.end_date,
            next_term_start,
        })
    }
}
