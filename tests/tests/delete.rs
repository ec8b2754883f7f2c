use inherit::{Count, Id, Query};
use std_util::prelude::*;
use tests::{
    hierarchy::{car, seed_vehicles, vehicles},
    tests, DbTest,
};

async fn delete_then_not_found(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    db.insert(car("Audi", 61_000, 5, "Diesel")).await.unwrap();

    let before = db.count(Count::all("Vehicle")).await.unwrap();

    db.delete("Car", Id(1)).await.unwrap();

    let err = assert_err!(db.get("Car", Id(1)).await);
    assert!(err.is_record_not_found(), "{err}");
    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), before - 1);

    // Other entities are untouched
    db.get("Truck", Id(2)).await.unwrap();
    db.get("Car", Id(3)).await.unwrap();
}

async fn delete_missing_is_a_no_op(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    db.delete("Car", Id(99)).await.unwrap();

    // Truck #2 exists, but not as a car
    db.delete("Car", Id(2)).await.unwrap();
    db.get("Truck", Id(2)).await.unwrap();

    // Deleting twice
    db.delete("Car", Id(1)).await.unwrap();
    db.delete("Car", Id(1)).await.unwrap();

    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 1);
}

async fn delete_all_of_a_type(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    for entity in db.all(Query::all("Truck")).await.unwrap() {
        db.delete(entity.ty(), entity.id().unwrap()).await.unwrap();
    }

    assert_eq!(db.count(Count::all("Truck")).await.unwrap(), 0);
    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 1);
    assert_empty!(db.all(Query::all("Truck")).await.unwrap());
}

tests!(
    delete_then_not_found,
    delete_missing_is_a_no_op,
    delete_all_of_a_type,
);
