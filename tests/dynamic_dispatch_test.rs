use chrono::NaiveDate;
use rust_decimal_macros::dec;
use school_fees::application::command::{Command, Outcome};
use school_fees::application::ledger::Ledger;
use school_fees::application::office::FeeOffice;
use school_fees::domain::ports::ClockBox;
use school_fees::domain::student::StudentId;
use school_fees::infrastructure::clock::FixedClock;

#[tokio::test]
async fn test_office_with_boxed_clock() {
    let instant = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(10, 5, 0)
        .unwrap();
    let clock: ClockBox = Box::new(FixedClock::new(instant));
    let office = FeeOffice::new(Ledger::with_clock(clock));

    // Verify Send + Sync by driving the office from a spawned task
    let worker = office.clone();
    let handle = tokio::spawn(async move {
        worker
            .execute(Command::AddStudent {
                name: "Asha".to_string(),
                class: "5B".to_string(),
                fee: dec!(1000),
            })
            .await
            .unwrap();
        worker
            .execute(Command::RecordPayment {
                student_id: StudentId::FIRST,
                amount: dec!(400),
            })
            .await
            .unwrap()
    });

    let Outcome::PaymentRecorded(receipt) = handle.await.unwrap() else {
        panic!("expected a receipt");
    };
    assert_eq!(receipt.receipt_no, "RC0001");
    assert_eq!(receipt.issued_at, instant);

    let outcome = office.execute(Command::ListReceipts).await.unwrap();
    assert_eq!(outcome, Outcome::Receipts(vec![receipt]));
}
