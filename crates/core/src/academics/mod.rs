//! Academic records: grade bands, learning areas, and exam results.

pub mod grading;
pub mod learning_area;
pub mod types;

pub use grading::{GradeBand, GradeBandError, GradeResolver, NO_GRADE};
pub use learning_area::{LearningArea, UnrecognizedLearningArea, categorize};
pub use types::{AcademicError, ExamResult, SubmitResultInput};
