//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each repository implements the matching store port of `scholar-core`.

pub mod attendance;
pub mod error;
pub mod exam_result;
pub mod expense;
pub mod fee_structure;
pub mod grade_band;
pub mod payment;
pub mod student;
pub mod subject;
pub mod term;

pub use attendance::AttendanceRepository;
pub use error::WriteError;
pub use exam_result::ExamResultRepository;
pub use expense::ExpenseRepository;
pub use fee_structure::FeeStructureRepository;
pub use grade_band::GradeBandRepository;
pub use payment::PaymentRepository;
pub use student::StudentRepository;
pub use subject::SubjectRepository;
pub use term::TermRepository;
