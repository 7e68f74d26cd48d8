//! Attendance records and term summaries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::keys::AdmissionNumber;

/// Attendance status as recorded.
///
/// Parsing is exact: only the lowercase words are recognized, anything else
/// is kept verbatim as [`AttendanceStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    /// "present"
    Present,
    /// "absent"
    Absent,
    /// "late"
    Late,
    /// "excused"
    Excused,
    /// Any other recorded value.
    Other(String),
}

impl AttendanceStatus {
    /// Stored representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for AttendanceStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "present" => Self::Present,
            "absent" => Self::Absent,
            "late" => Self::Late,
            "excused" => Self::Excused,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's attendance for a student. At most one record per (student, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Student.
    pub admission_no: AdmissionNumber,
    /// School day.
    pub date: NaiveDate,
    /// Recorded status.
    pub status: AttendanceStatus,
}

/// Attendance counts over a date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of records in the window.
    pub total_days: usize,
    /// Records with status "present".
    pub present_count: usize,
    /// Records with status "absent".
    pub absent_count: usize,
    /// Records counted in neither bucket (late, excused, anything else).
    pub unclassified_count: usize,
}

impl AttendanceSummary {
    /// Counts records by status.
    #[must_use]
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let present_count = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count();
        let absent_count = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Absent)
            .count();

        Self {
            total_days: records.len(),
            present_count,
            absent_count,
            unclassified_count: records.len() - present_count - absent_count,
        }
    }
}

/// Input for recording a day's attendance. Re-recording the same day
/// replaces the stored status.
#[derive(Debug, Clone)]
pub struct RecordAttendanceInput {
    /// Student.
    pub admission_no: AdmissionNumber,
    /// School day.
    pub date: NaiveDate,
    /// Status to store.
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            admission_no: AdmissionNumber::parse("ADM-001").unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            status: AttendanceStatus::from(status),
        }
    }

    #[test]
    fn test_summary_counts_by_exact_status() {
        let records = vec![
            record(3, "present"),
            record(4, "present"),
            record(5, "absent"),
            record(6, "late"),
            record(7, "excused"),
            record(10, "Present"),
        ];

        let summary = AttendanceSummary::from_records(&records);

        assert_eq!(summary.total_days, 6);
        assert_eq!(summary.present_count, 2);
        assert_eq!(summary.absent_count, 1);
        assert_eq!(summary.unclassified_count, 3);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        assert_eq!(
            AttendanceSummary::from_records(&[]),
            AttendanceSummary::default()
        );
    }

    #[test]
    fn test_status_round_trips_unknown_values() {
        let status = AttendanceStatus::from("sick-bay");
        assert_eq!(status, AttendanceStatus::Other("sick-bay".to_string()));
        assert_eq!(status.as_str(), "sick-bay");
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"absent\""
        );
    }
}
