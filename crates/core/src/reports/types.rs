//! Report card data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use scholar_shared::SchoolConfig;

use crate::academics::{ExamResult, GradeResolver, LearningArea};
use crate::attendance::AttendanceSummary;
use crate::keys::TermKey;
use crate::student::Student;

/// School letterhead printed on every report card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    /// School name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Website.
    pub website: String,
    /// Motto.
    pub motto: String,
}

impl From<&SchoolConfig> for SchoolInfo {
    fn from(config: &SchoolConfig) -> Self {
        Self {
            name: config.name.clone(),
            address: config.address.clone(),
            phone: config.phone.clone(),
            email: config.email.clone(),
            website: config.website.clone(),
            motto: config.motto.clone(),
        }
    }
}

/// Term window and the next term's opening date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDates {
    /// First day of the term.
    pub start_date: NaiveDate,
    /// Last day of the term.
    pub end_date: NaiveDate,
    /// First day of the following term, if it has been configured.
    pub next_term_start: Option<NaiveDate>,
}

/// An exam result with its resolved grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedResult {
    /// Exam name.
    pub exam_name: String,
    /// Subject code.
    pub subject_code: String,
    /// Subject name.
    pub subject_name: String,
    /// Learning area the subject belongs to.
    pub learning_area: LearningArea,
    /// Mark.
    pub marks: Decimal,
    /// Grade letter, `-` when no band matches.
    pub grade: String,
    /// Grade remark, `-` when no band matches.
    pub remarks: String,
    /// Teacher's comment.
    pub comments: String,
}

impl GradedResult {
    /// Grades a result.
    #[must_use]
    pub fn new(result: ExamResult, learning_area: LearningArea, resolver: &GradeResolver) -> Self {
        let (grade, remarks) = resolver.grade_and_remarks(result.marks);
        Self {
            exam_name: result.exam_name,
            subject_code: result.subject_code,
            subject_name: result.subject_name,
            learning_area,
            marks: result.marks,
            grade,
            remarks,
            comments: result.comments,
        }
    }
}

/// Results of one learning area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningAreaGroup {
    /// The bucket.
    pub area: LearningArea,
    /// Display name of the bucket.
    pub name: String,
    /// Results in the bucket, in report order.
    pub results: Vec<GradedResult>,
}

impl LearningAreaGroup {
    /// Splits results into every learning-area bucket, in fixed order.
    /// Empty buckets are kept.
    #[must_use]
    pub fn group(results: &[GradedResult]) -> Vec<Self> {
        LearningArea::ALL
            .iter()
            .map(|&area| Self {
                area,
                name: area.name().to_string(),
                results: results
                    .iter()
                    .filter(|r| r.learning_area == area)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

/// Marks summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of all marks.
    pub total_marks: Decimal,
    /// Number of results.
    pub subject_count: usize,
    /// Average mark rounded to 2 places, zero when there are no results.
    pub average_marks: Decimal,
    /// Grade of the average mark.
    pub overall_grade: String,
    /// Remark of the overall grade.
    pub overall_remarks: String,
}

impl ReportSummary {
    /// Summarizes graded results.
    ///
    /// The overall grade is resolved even when there are no results, in which
    /// case it is the grade of a zero average.
    #[must_use]
    pub fn from_results(results: &[GradedResult], resolver: &GradeResolver) -> Self {
        let total_marks: Decimal = results.iter().map(|r| r.marks).sum();
        let subject_count = results.len();
        let average_marks = average(total_marks, subject_count);
        let (overall_grade, overall_remarks) = resolver.grade_and_remarks(average_marks);

        Self {
            total_marks,
            subject_count,
            average_marks,
            overall_grade,
            overall_remarks,
        }
    }
}

/// `round(total / count, 2)`, or zero for an empty set.
#[must_use]
pub fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A student's report card for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCard {
    /// School letterhead.
    pub school: SchoolInfo,
    /// The student.
    pub student: Student,
    /// Term reported on.
    pub term: TermKey,
    /// Term window and next opening date.
    pub term_dates: TermDates,
    /// Every graded result, ordered by subject name, subject code, exam name.
    pub results: Vec<GradedResult>,
    /// Results grouped by learning area.
    pub learning_areas: Vec<LearningAreaGroup>,
    /// Marks summary.
    pub summary: ReportSummary,
    /// Attendance over the term window.
    pub attendance: AttendanceSummary,
    /// Fees still owed for the term. `None` when the student has no class
    /// and no balance can be computed.
    pub outstanding_balance: Option<Decimal>,
    /// When the card was composed.
    pub generated_at: DateTime<Utc>,
}
