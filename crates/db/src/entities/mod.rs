//! `SeaORM` entity definitions.

pub mod attendance;
pub mod exam_results;
pub mod exams;
pub mod expenses;
pub mod fee_structures;
pub mod grade_bands;
pub mod payments;
pub mod students;
pub mod subjects;
pub mod terms;
