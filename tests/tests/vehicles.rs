use inherit::{Count, Entity, Expr, Id, Query};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tests::{
    hierarchy::{car, seed_vehicles, truck, vehicles},
    tests, DbTest,
};

async fn expensive_vehicles(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let expensive = db
        .all(Query::all("Vehicle").filter(Expr::property("price").gt(40_000)))
        .await
        .unwrap();

    assert_eq!(expensive.len(), 1);
    assert_eq!(expensive[0].ty(), "Truck");
    assert_eq!(expensive[0].id(), Some(Id(2)));
    assert_eq!(expensive[0].get("brand"), Some(&"MB".into()));

    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 2);
}

async fn read_back_equals_original(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    let inserted = [
        car("VW", 28_000, 5, "Hybrid"),
        car("Fiat", 14_500, 3, "Petrol"),
        truck("MB", 95_000, 12, 2),
        truck("Volvo", 120_000, 24, 4).with("load_capacity", Decimal::new(245, 1)),
    ];

    for entity in inserted {
        let entity = db.insert(entity).await.unwrap();
        let id = entity.id().unwrap();

        let read = db.get(entity.ty(), id).await.unwrap();
        assert_eq!(read, entity);
    }
}

async fn inserted_entity_carries_widened_values(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    // Integer literals for decimal properties are widened on write.
    let inserted = db
        .insert(
            Entity::new("Truck")
                .with("brand", "Scania")
                .with("price", 28_000)
                .with("load_capacity", 18)
                .with("number_of_axles", 3),
        )
        .await
        .unwrap();

    assert_eq!(inserted.get("price"), Some(&Decimal::from(28_000).into()));
    assert_eq!(inserted.get("load_capacity"), Some(&Decimal::from(18).into()));

    let read = db.get("Truck", inserted.id().unwrap()).await.unwrap();
    assert_eq!(read, inserted);
}

async fn filter_subtype_by_root_property(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    db.insert(car("Audi", 61_000, 5, "Diesel")).await.unwrap();

    let cars: Vec<_> = db
        .all(Query::all("Car").filter(Expr::property("price").ge(Decimal::from(28_000))))
        .await
        .unwrap()
        .into_iter()
        .map(|car| car.get("brand").unwrap().to_string())
        .collect();
    assert_eq!(cars, ["VW", "Audi"]);

    let four_doors = db
        .first(Query::all("Car").filter(Expr::property("number_of_doors").eq(4)))
        .await
        .unwrap();
    assert!(four_doors.is_none());
}

async fn filter_by_id_and_disjunction(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    let vehicles = db
        .all(Query::all("Vehicle").filter(Expr::key().eq(Id(1)).or(Expr::property("brand").eq("MB"))))
        .await
        .unwrap();
    let ids: Vec<_> = vehicles.iter().map(Entity::id).collect();
    assert_eq!(ids, [Some(Id(1)), Some(Id(2))]);

    let not_vw = db
        .all(Query::all("Vehicle").filter(Expr::property("brand").eq("VW").not()))
        .await
        .unwrap();
    assert_eq!(not_vw.len(), 1);
    assert_eq!(not_vw[0].ty(), "Truck");
}

tests!(
    expensive_vehicles,
    read_back_equals_original,
    inserted_entity_carries_widened_values,
    filter_subtype_by_root_property,
    filter_by_id_and_disjunction,
);
