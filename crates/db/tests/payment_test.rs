//! Integration tests for the payment and expense write paths.

mod common;

use rust_decimal_macros::dec;

use scholar_core::finance::{
    BalanceCalculator, FinanceError, FinanceService, RecordExpenseInput, RecordPaymentInput,
};
use scholar_core::store::PaymentStore;
use scholar_core::{AdmissionNumber, TermKey};
use scholar_db::{ExpenseRepository, PaymentRepository, WriteError};

use common::{connect, create_fee, create_student, create_term, date, unique_class, unique_year};

fn payment_input(
    admission_no: &AdmissionNumber,
    term: TermKey,
    amount: rust_decimal::Decimal,
) -> RecordPaymentInput {
    RecordPaymentInput {
        admission_no: admission_no.clone(),
        term,
        amount,
        payment_date: date(term.year(), 2, 10),
        payment_method: "cash".to_string(),
        reference: Some("RCPT-1".to_string()),
        description: None,
        received_by: "bursar".to_string(),
    }
}

#[tokio::test]
async fn test_record_payment_and_sum() {
    let Some(db) = connect().await else { return };
    let year = unique_year();
    let term = TermKey::new(1, year).unwrap();
    create_term(&db, term, date(year, 2, 1), date(year, 4, 30)).await;
    let student = create_student(&db, Some("P5")).await;
    let repo = PaymentRepository::new(db.clone());

    let payment = repo
        .record_payment(payment_input(&student, term, dec!(700)))
        .await
        .expect("Failed to record payment");
    repo.record_payment(payment_input(&student, term, dec!(500)))
        .await
        .expect("Failed to record payment");

    assert_eq!(payment.amount, dec!(700));
    assert_eq!(payment.received_by, "bursar");
    let total = repo.sum_for_student_term(&student, term).await.unwrap();
    assert_eq!(total, dec!(1200));
    assert_eq!(repo.list_for_student(&student).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_invalid_payment_is_rejected() {
    let Some(db) = connect().await else { return };
    let year = unique_year();
    let term = TermKey::new(1, year).unwrap();
    let student = create_student(&db, Some("P5")).await;
    let repo = PaymentRepository::new(db.clone());

    let err = repo
        .record_payment(payment_input(&student, term, dec!(0)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WriteError::Finance(FinanceError::NonPositiveAmount(_))
    ));
}

#[tokio::test]
async fn test_payment_for_unknown_term_commits_nothing() {
    let Some(db) = connect().await else { return };
    let term = TermKey::new(2, unique_year()).unwrap();
    let student = create_student(&db, Some("P5")).await;
    let repo = PaymentRepository::new(db.clone());

    let err = repo
        .record_payment(payment_input(&student, term, dec!(100)))
        .await
        .unwrap_err();

    assert!(matches!(err, WriteError::TermNotFound(_)));
    assert!(repo.list_for_student(&student).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_balance_from_database() {
    let Some(db) = connect().await else { return };
    let year = unique_year();
    let term = TermKey::new(1, year).unwrap();
    let class_name = unique_class();
    create_term(&db, term, date(year, 2, 1), date(year, 4, 30)).await;
    create_fee(&db, &class_name, term, dec!(1500)).await;
    create_fee(&db, &class_name, term, dec!(300)).await;
    let student = create_student(&db, Some(&class_name)).await;
    PaymentRepository::new(db.clone())
        .record_payment(payment_input(&student, term, dec!(1200)))
        .await
        .unwrap();

    let calculator = BalanceCalculator::new(&scholar_db::stores(&db));

    assert_eq!(calculator.balance(&student, term).await.unwrap(), dec!(600));
}

#[tokio::test]
async fn test_expense_shows_in_summary() {
    let Some(db) = connect().await else { return };
    let year = unique_year();
    let expense = ExpenseRepository::new(db.clone())
        .record_expense(RecordExpenseInput {
            category: "Utilities".to_string(),
            amount: dec!(450.50),
            expense_date: date(year, 3, 3),
            payment_method: "bank".to_string(),
            reference: None,
            description: Some("Electricity".to_string()),
            authorized_by: "head teacher".to_string(),
        })
        .await
        .expect("Failed to record expense");

    let summary = FinanceService::new(&scholar_db::stores(&db))
        .summarize(date(year, 3, 1), date(year, 3, 31))
        .await
        .unwrap();

    assert!(summary.expenses.iter().any(|e| e.id == expense.id));
    assert!(summary.total_expenses >= dec!(450.50));
}
