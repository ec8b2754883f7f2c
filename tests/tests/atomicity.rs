use inherit::{driver::operation::Transaction, Count, Id, Strategy};
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tests::{
    hierarchy::{car, seed_vehicles, vehicles},
    table_names, tests, DbTest,
};

async fn single_write_statements_skip_transactions(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    test.log().clear();

    db.insert(car("VW", 28_000, 5, "Hybrid")).await.unwrap();

    let expected: &[Transaction] = match test.strategy() {
        Strategy::JoinedTable => &[Transaction::Start, Transaction::Commit],
        _ => &[],
    };
    assert_eq!(test.log().transactions(), expected);
}

async fn failed_first_write_changes_nothing(test: &mut DbTest) {
    let (db, faults) = test.setup_faulty_db(vehicles()).await;
    seed_vehicles(&db).await;

    faults.fail_write(1);
    let err = assert_err!(db.insert(car("Fiat", 14_500, 3, "Petrol")).await);
    faults.disarm();

    // Nothing was applied, so there is nothing partial to report.
    assert!(!err.is_partial_write(), "{err}");
    assert!(err.to_string().contains("injected failure"), "{err}");
    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 2);
}

tests!(
    single_write_statements_skip_transactions,
    failed_first_write_changes_nothing,
);

#[tokio::test]
async fn joined_insert_rolls_back_root_row() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let (db, faults) = test.setup_faulty_db(vehicles()).await;
    seed_vehicles(&db).await;
    test.log().clear();

    faults.fail_write(2);
    let err = assert_err!(db.insert(car("Fiat", 14_500, 3, "Petrol").with_id(Id(7))).await);
    faults.disarm();

    assert!(err.is_partial_write(), "{err}");
    assert!(!err.is_inconsistent_state(), "{err}");
    assert_eq!(
        test.log().transactions(),
        [Transaction::Start, Transaction::Rollback]
    );

    // No orphan root row
    assert_none!(test.get_raw_row(&db, "vehicles", Id(7)).await);
    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 2);
}

#[tokio::test]
async fn joined_update_rolls_back_root_row() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let (db, faults) = test.setup_faulty_db(vehicles()).await;
    seed_vehicles(&db).await;

    let before = db.get("Car", Id(1)).await.unwrap();
    let changed = before
        .clone()
        .with("brand", "Skoda")
        .with("number_of_doors", 3);

    faults.fail_write(2);
    let err = assert_err!(db.update(changed, ["brand", "number_of_doors"]).await);
    faults.disarm();

    assert!(err.is_partial_write(), "{err}");
    assert_eq!(db.get("Car", Id(1)).await.unwrap(), before);
}

#[tokio::test]
async fn joined_delete_restores_leaf_row() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let (db, faults) = test.setup_faulty_db(vehicles()).await;
    seed_vehicles(&db).await;
    test.log().clear();

    faults.fail_write(2);
    let err = assert_err!(db.delete("Car", Id(1)).await);
    faults.disarm();

    assert!(err.is_partial_write(), "{err}");
    assert_eq!(table_names(&db, test.log().writes()), ["cars", "vehicles"]);

    db.get("Car", Id(1)).await.unwrap();
    assert_some!(test.get_raw_row(&db, "cars", Id(1)).await);
}

#[tokio::test]
async fn failed_rollback_is_inconsistent_state() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let (db, faults) = test.setup_faulty_db(vehicles()).await;
    seed_vehicles(&db).await;

    faults.fail_write(2);
    faults.fail_rollback();
    let err = assert_err!(db.insert(car("Fiat", 14_500, 3, "Petrol")).await);
    faults.disarm();

    assert!(err.is_inconsistent_state(), "{err}");
    assert!(!err.is_partial_write(), "{err}");

    // Both the write failure and the rollback failure are reported.
    let message = err.to_string();
    assert!(message.contains("injected failure; rollback"), "{message}");
    assert!(message.contains("injected failure; write #2"), "{message}");
}
