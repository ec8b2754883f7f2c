use inherit::{Count, Entity, Expr, Id, OrderBy, Query};
use rust_decimal::Decimal;
use std_util::prelude::*;
use tests::{
    hierarchy::{car, seed_vehicles, vehicles},
    tests, DbTest,
};

async fn unknown_type_before_any_table_action(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    test.log().clear();

    let err = assert_err!(db.all(Query::all("Boat")).await);
    assert!(err.is_unknown_type(), "{err}");

    let err = assert_err!(db.count(Count::all("Boat")).await);
    assert!(err.is_unknown_type(), "{err}");

    let err = assert_err!(db.insert(Entity::new("Boat").with("brand", "Riva")).await);
    assert!(err.is_unknown_type(), "{err}");

    let err = assert_err!(db.delete("Boat", Id(1)).await);
    assert!(err.is_unknown_type(), "{err}");

    // The root is abstract
    let vehicle = Entity::new("Vehicle")
        .with("brand", "VW")
        .with("price", Decimal::from(1));
    let err = assert_err!(db.insert(vehicle).await);
    assert!(err.is_unknown_type(), "{err}");

    assert!(test.log().is_empty());
}

async fn unknown_property_before_any_table_action(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    test.log().clear();

    let err = assert_err!(
        db.all(Query::all("Car").filter(Expr::property("load_capacity").gt(1)))
            .await
    );
    assert!(err.is_unknown_property(), "{err}");

    let err = assert_err!(
        db.all(Query::all("Vehicle").order_by(OrderBy::asc("fuel_type")))
            .await
    );
    assert!(err.is_unknown_property(), "{err}");

    let err = assert_err!(db.insert(car("VW", 1, 5, "Petrol").with("wings", 2)).await);
    assert!(err.is_unknown_property(), "{err}");

    assert!(test.log().is_empty());
}

async fn invalid_values_rejected(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    test.log().clear();

    let mut missing = car("VW", 28_000, 5, "Hybrid");
    missing.set("fuel_type", inherit::Value::Null);
    let err = assert_err!(db.insert(missing).await);
    assert!(err.is_validation(), "{err}");

    let err = assert_err!(db.insert(car("VW", 28_000, 5, "Hybrid").with("price", "cheap")).await);
    assert!(err.is_type_conversion(), "{err}");

    let err = assert_err!(
        db.all(Query::all("Car").filter(Expr::property("number_of_doors").eq("five")))
            .await
    );
    assert!(err.is_type_conversion(), "{err}");

    assert!(test.log().is_empty());
}

async fn get_missing(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let err = assert_err!(db.get("Truck", Id(1)).await);
    assert!(err.is_record_not_found(), "{err}");
    assert_eq!(err.to_string(), "record not found: Truck #1");
}

tests!(
    unknown_type_before_any_table_action,
    unknown_property_before_any_table_action,
    invalid_values_rejected,
    get_missing,
);
