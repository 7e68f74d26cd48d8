//! Initial database migration.
//!
//! Creates the school registry, academic, attendance, and ledger tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: REGISTRY
        // ============================================================
        db.execute_unprepared(STUDENTS_SQL).await?;
        db.execute_unprepared(TERMS_SQL).await?;
        db.execute_unprepared(SUBJECTS_SQL).await?;

        // ============================================================
        // PART 2: ACADEMICS
        // ============================================================
        db.execute_unprepared(EXAMS_SQL).await?;
        db.execute_unprepared(EXAM_RESULTS_SQL).await?;
        db.execute_unprepared(GRADE_BANDS_SQL).await?;
        db.execute_unprepared(ATTENDANCE_SQL).await?;

        // ============================================================
        // PART 3: LEDGER
        // ============================================================
        db.execute_unprepared(FEE_STRUCTURES_SQL).await?;
        db.execute_unprepared(PAYMENTS_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;

        // ============================================================
        // PART 4: TRIGGERS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const STUDENTS_SQL: &str = r"
CREATE TABLE students (
    admission_no VARCHAR(32) PRIMARY KEY,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    gender VARCHAR(10),
    date_of_birth DATE,
    guardian_name VARCHAR(200) NOT NULL DEFAULT '',
    guardian_phone VARCHAR(32),
    guardian_email VARCHAR(255),
    class_name VARCHAR(50),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_admission_no_not_blank CHECK (btrim(admission_no) <> ''),
    CONSTRAINT chk_gender CHECK (gender IS NULL OR gender IN ('male', 'female'))
);

CREATE INDEX idx_students_class ON students(class_name);
";

const TERMS_SQL: &str = r"
CREATE TABLE terms (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    term SMALLINT NOT NULL,
    year INTEGER NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_terms_term_year UNIQUE (term, year),
    CONSTRAINT chk_term_number CHECK (term BETWEEN 1 AND 3),
    CONSTRAINT chk_term_year CHECK (year > 0),
    CONSTRAINT chk_term_dates CHECK (start_date <= end_date)
);
";

const SUBJECTS_SQL: &str = r"
CREATE TABLE subjects (
    code VARCHAR(20) PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    learning_area VARCHAR(100),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const EXAMS_SQL: &str = r"
CREATE TABLE exams (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL,
    term SMALLINT NOT NULL,
    year INTEGER NOT NULL,
    exam_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT fk_exams_term FOREIGN KEY (term, year) REFERENCES terms(term, year)
);

CREATE INDEX idx_exams_term ON exams(year, term);
";

const EXAM_RESULTS_SQL: &str = r"
CREATE TABLE exam_results (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    student_admission_no VARCHAR(32) NOT NULL REFERENCES students(admission_no),
    exam_id UUID NOT NULL REFERENCES exams(id),
    subject_code VARCHAR(20) NOT NULL REFERENCES subjects(code),
    marks NUMERIC(5, 2) NOT NULL,
    comments TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_exam_results_triple UNIQUE (student_admission_no, exam_id, subject_code),
    CONSTRAINT chk_marks_range CHECK (marks >= 0 AND marks <= 100)
);

CREATE INDEX idx_exam_results_student ON exam_results(student_admission_no);
";

const GRADE_BANDS_SQL: &str = r"
CREATE TABLE grade_bands (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    min_marks NUMERIC(5, 2) NOT NULL,
    max_marks NUMERIC(5, 2) NOT NULL,
    grade VARCHAR(5) NOT NULL,
    remarks VARCHAR(100) NOT NULL DEFAULT '',
    CONSTRAINT chk_band_range CHECK (min_marks <= max_marks)
);
";

const ATTENDANCE_SQL: &str = r"
CREATE TABLE attendance (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    student_admission_no VARCHAR(32) NOT NULL REFERENCES students(admission_no),
    attendance_date DATE NOT NULL,
    status VARCHAR(20) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_attendance_student_date UNIQUE (student_admission_no, attendance_date)
);
";

const FEE_STRUCTURES_SQL: &str = r"
CREATE TABLE fee_structures (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    class_name VARCHAR(50) NOT NULL,
    term SMALLINT NOT NULL,
    year INTEGER NOT NULL,
    amount NUMERIC(12, 2) NOT NULL,
    description VARCHAR(200) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_fee_amount CHECK (amount >= 0)
);

CREATE INDEX idx_fee_structures_class_term ON fee_structures(class_name, year, term);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    student_admission_no VARCHAR(32) NOT NULL REFERENCES students(admission_no),
    term SMALLINT NOT NULL,
    year INTEGER NOT NULL,
    amount NUMERIC(12, 2) NOT NULL,
    payment_date DATE NOT NULL,
    payment_method VARCHAR(50) NOT NULL,
    reference VARCHAR(100),
    description TEXT,
    received_by VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_payment_amount CHECK (amount > 0)
);

CREATE INDEX idx_payments_student_term ON payments(student_admission_no, year, term);
CREATE INDEX idx_payments_date ON payments(payment_date DESC);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    category VARCHAR(100) NOT NULL,
    amount NUMERIC(12, 2) NOT NULL,
    expense_date DATE NOT NULL,
    payment_method VARCHAR(50) NOT NULL,
    reference VARCHAR(100),
    description TEXT,
    authorized_by VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expense_amount CHECK (amount > 0)
);

CREATE INDEX idx_expenses_date ON expenses(expense_date DESC);
";

const TRIGGERS_SQL: &str = r"
-- ============================================================
-- FUNCTION: prevent_payment_modification
-- Payments are append-only
-- ============================================================
CREATE OR REPLACE FUNCTION prevent_payment_modification()
RETURNS TRIGGER AS $$
BEGIN
    RAISE EXCEPTION 'Payments are append-only. Record a correcting entry instead.';
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_prevent_payment_mod
BEFORE UPDATE OR DELETE ON payments
FOR EACH ROW
EXECUTE FUNCTION prevent_payment_modification();
";

const DROP_ALL_SQL: &str = r"
-- Order matters due to foreign key constraints
DROP TRIGGER IF EXISTS trg_prevent_payment_mod ON payments;
DROP FUNCTION IF EXISTS prevent_payment_modification();

DROP TABLE IF EXISTS expenses CASCADE;
DROP TABLE IF EXISTS payments CASCADE;
DROP TABLE IF EXISTS fee_structures CASCADE;
DROP TABLE IF EXISTS attendance CASCADE;
DROP TABLE IF EXISTS grade_bands CASCADE;
DROP TABLE IF EXISTS exam_results CASCADE;
DROP TABLE IF EXISTS exams CASCADE;
DROP TABLE IF EXISTS subjects CASCADE;
DROP TABLE IF EXISTS terms CASCADE;
DROP TABLE IF EXISTS students CASCADE;
";
