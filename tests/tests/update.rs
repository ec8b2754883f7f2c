use inherit::{Entity, Id, Strategy};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std_util::prelude::*;
use tests::{
    hierarchy::{seed_vehicles, vehicles},
    table_names, tests, DbTest,
};

async fn update_changed_properties(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let car = db
        .get("Car", Id(1))
        .await
        .unwrap()
        .with("price", Decimal::from(26_500))
        .with("fuel_type", "Electric")
        // Not in the changed set
        .with("brand", "Skoda");

    db.update(car, ["price", "fuel_type"]).await.unwrap();

    let car = db.get("Car", Id(1)).await.unwrap();
    assert_eq!(car.get("price"), Some(&Decimal::from(26_500).into()));
    assert_eq!(car.get("fuel_type"), Some(&"Electric".into()));
    assert_eq!(car.get("brand"), Some(&"VW".into()));
    assert_eq!(car.get("number_of_doors"), Some(&5.into()));
}

async fn update_nothing_changed(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    test.log().clear();

    let car = db.get("Car", Id(1)).await.unwrap();
    test.log().clear();

    db.update(car, Vec::<String>::new()).await.unwrap();
    assert!(test.log().is_empty());
}

async fn update_missing_entity(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let ghost = Entity::new("Car")
        .with_id(Id(42))
        .with("price", Decimal::from(1));
    let err = assert_err!(db.update(ghost, ["price"]).await);
    assert!(err.is_record_not_found(), "{err}");

    // Truck #2 is not a car; its row must not change.
    let wrong_type = Entity::new("Car")
        .with_id(Id(2))
        .with("brand", "Opel");
    let err = assert_err!(db.update(wrong_type, ["brand"]).await);
    assert!(err.is_record_not_found(), "{err}");
    assert_eq!(
        db.get("Truck", Id(2)).await.unwrap().get("brand"),
        Some(&"MB".into())
    );
}

async fn update_rejects_id_change(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let car = db.get("Car", Id(1)).await.unwrap();
    assert_err!(db.update(car, ["id"]).await);
}

tests!(
    update_changed_properties,
    update_nothing_changed,
    update_missing_entity,
    update_rejects_id_change,
);

#[tokio::test]
async fn joined_table_leaf_update_leaves_root_row_alone() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let root_before = test.get_raw_row(&db, "vehicles", Id(1)).await.unwrap();
    test.log().clear();

    let car = db
        .get("Car", Id(1))
        .await
        .unwrap()
        .with("number_of_doors", 3);
    test.log().clear();

    db.update(car, ["number_of_doors"]).await.unwrap();

    assert_eq!(table_names(&db, test.log().writes()), ["cars"]);
    assert_eq!(
        test.get_raw_row(&db, "vehicles", Id(1)).await.unwrap(),
        root_before
    );

    let leaf = test.get_raw_row(&db, "cars", Id(1)).await.unwrap();
    assert!(leaf.contains(&3.into()), "{leaf:?}");
}

#[tokio::test]
async fn joined_table_update_spanning_both_tables() {
    let mut test = DbTest::new(Strategy::JoinedTable);
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let truck = db
        .get("Truck", Id(2))
        .await
        .unwrap()
        .with("number_of_axles", 4)
        .with("brand", "Mercedes");
    test.log().clear();

    db.update(truck, ["number_of_axles", "brand"]).await.unwrap();

    assert_eq!(table_names(&db, test.log().writes()), ["vehicles", "trucks"]);

    let truck = db.get("Truck", Id(2)).await.unwrap();
    assert_eq!(truck.get("brand"), Some(&"Mercedes".into()));
    assert_eq!(truck.get("number_of_axles"), Some(&4.into()));
}
