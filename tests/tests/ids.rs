use inherit::{Count, Id, IdGenerator, Strategy};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std_util::prelude::*;
use tests::{
    hierarchy::{car, seed_vehicles, truck, vehicles},
    tests, DbTest,
};

async fn auto_assigned_ids_are_distinct(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    let car = db.insert(car("VW", 28_000, 5, "Hybrid")).await.unwrap();
    let truck = db.insert(truck("MB", 95_000, 12, 2)).await.unwrap();

    assert_ne!(car.id(), truck.id());
    assert_some!(car.id());
    assert_some!(truck.id());
}

async fn auto_ids_continue_past_seeded_ids(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let car = db.insert(car("Fiat", 14_500, 3, "Petrol")).await.unwrap();
    assert_eq!(car.id(), Some(Id(3)));
}

async fn concurrent_inserts_get_distinct_ids(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    let mut tasks = vec![];
    for i in 0..16 {
        let db = db.clone();
        tasks.push(tokio::spawn(async move {
            let entity = if i % 2 == 0 {
                car("VW", 20_000 + i, 5, "Petrol")
            } else {
                truck("MB", 90_000 + i, 10, 2)
            };
            db.insert(entity).await.unwrap().id().unwrap()
        }));
    }

    let mut ids = vec![];
    for task in tasks {
        ids.push(task.await.unwrap());
    }

    assert_unique!(ids);
    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 16);
}

tests!(
    auto_assigned_ids_are_distinct,
    auto_ids_continue_past_seeded_ids,
    concurrent_inserts_get_distinct_ids,
);

/// Hands out every value twice, as separate per-table sequences would for
/// one car and one truck.
#[derive(Debug, Default)]
struct PerTypeIds {
    next: AtomicU64,
}

impl IdGenerator for PerTypeIds {
    fn next_id(&self) -> Id {
        Id(self.next.fetch_add(1, Ordering::SeqCst) / 2 + 1)
    }
}

#[tokio::test]
async fn concrete_table_rejects_colliding_ids() {
    let mut test = DbTest::new(Strategy::ConcreteTable);
    let mut builder = test.builder();
    builder.id_generator(Arc::new(PerTypeIds::default()));

    let db = test
        .try_setup_db_with(&mut builder, vehicles(), inherit::driver::Memory::new())
        .await
        .unwrap();

    db.insert(car("VW", 28_000, 5, "Hybrid")).await.unwrap();

    let err = assert_err!(db.insert(truck("MB", 95_000, 12, 2)).await);
    assert!(err.is_identifier_collision(), "{err}");
    assert_eq!(db.count(Count::all("Truck")).await.unwrap(), 0);
}

#[tokio::test]
async fn concrete_table_rejects_explicit_id_used_by_sibling() {
    let mut test = DbTest::new(Strategy::ConcreteTable);
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let volvo = truck("Volvo", 99_000, 20, 3).with_id(Id(1));
    let err = assert_err!(db.insert(volvo).await);
    assert!(err.is_identifier_collision(), "{err}");
}

#[tokio::test]
async fn duplicate_explicit_id_is_rejected() {
    for strategy in [Strategy::SingleTable, Strategy::JoinedTable] {
        let mut test = DbTest::new(strategy);
        let db = test.setup_db(vehicles()).await;
        seed_vehicles(&db).await;

        let volvo = truck("Volvo", 99_000, 20, 3).with_id(Id(1));
        let err = assert_err!(db.insert(volvo).await);
        assert!(err.is_driver_operation_failed(), "{err}");

        // The car is untouched
        let car = db.get("Car", Id(1)).await.unwrap();
        assert_eq!(car.get("brand"), Some(&"VW".into()));
        assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 2);
    }
}
