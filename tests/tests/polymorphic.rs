use inherit::{Entity, OrderBy, Query};
use pretty_assertions::assert_eq;
use tests::{
    hierarchy::{car, truck, vehicles},
    tests, DbTest,
};

async fn seed(db: &inherit::Db) {
    // Interleave types so ids are not grouped by type.
    db.insert(truck("MAN", 70_000, 10, 2)).await.unwrap();
    db.insert(car("VW", 28_000, 5, "Hybrid")).await.unwrap();
    db.insert(truck("MB", 95_000, 12, 2)).await.unwrap();
    db.insert(car("Fiat", 14_500, 3, "Petrol")).await.unwrap();
    db.insert(car("Audi", 61_000, 5, "Diesel")).await.unwrap();
}

async fn root_read_matches_direct_reads(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed(&db).await;

    let all = db.all(Query::all("Vehicle")).await.unwrap();

    let mut grouped: Vec<Vec<Entity>> = vec![vec![], vec![]];
    for entity in all {
        let index = match entity.ty() {
            "Car" => 0,
            "Truck" => 1,
            ty => panic!("unexpected type {ty}"),
        };
        grouped[index].push(entity);
    }

    assert_eq!(grouped[0], db.all(Query::all("Car")).await.unwrap());
    assert_eq!(grouped[1], db.all(Query::all("Truck")).await.unwrap());
}

async fn default_order_groups_by_type_then_id(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed(&db).await;

    let order: Vec<_> = db
        .all(Query::all("Vehicle"))
        .await
        .unwrap()
        .iter()
        .map(|entity| (entity.ty().to_string(), entity.id().unwrap().get()))
        .collect();

    assert_eq!(
        order,
        [
            ("Car".to_string(), 2),
            ("Car".to_string(), 4),
            ("Car".to_string(), 5),
            ("Truck".to_string(), 1),
            ("Truck".to_string(), 3),
        ]
    );
}

async fn explicit_order_sorts_globally(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed(&db).await;

    let brands = |entities: Vec<Entity>| -> Vec<String> {
        entities
            .iter()
            .map(|entity| entity.get("brand").unwrap().to_string())
            .collect()
    };

    let by_price = db
        .all(Query::all("Vehicle").order_by(OrderBy::asc("price")))
        .await
        .unwrap();
    assert_eq!(brands(by_price), ["Fiat", "VW", "Audi", "MAN", "MB"]);

    let by_brand_desc = db
        .all(Query::all("Vehicle").order_by(OrderBy::desc("brand")))
        .await
        .unwrap();
    assert_eq!(brands(by_brand_desc), ["VW", "MB", "MAN", "Fiat", "Audi"]);
}

async fn equal_sort_keys_keep_type_then_id_order(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    db.insert(truck("MAN", 50_000, 10, 2)).await.unwrap();
    db.insert(car("VW", 50_000, 5, "Hybrid")).await.unwrap();
    db.insert(car("Audi", 50_000, 5, "Diesel")).await.unwrap();
    db.insert(car("Fiat", 14_500, 3, "Petrol")).await.unwrap();

    let order = |entities: Vec<Entity>| -> Vec<(String, u64)> {
        entities
            .iter()
            .map(|entity| (entity.ty().to_string(), entity.id().unwrap().get()))
            .collect()
    };

    let asc = db
        .all(Query::all("Vehicle").order_by(OrderBy::asc("price")))
        .await
        .unwrap();
    assert_eq!(
        order(asc),
        [
            ("Car".to_string(), 4),
            ("Car".to_string(), 2),
            ("Car".to_string(), 3),
            ("Truck".to_string(), 1),
        ]
    );

    let desc = db
        .all(Query::all("Vehicle").order_by(OrderBy::desc("price")))
        .await
        .unwrap();
    assert_eq!(
        order(desc),
        [
            ("Car".to_string(), 2),
            ("Car".to_string(), 3),
            ("Truck".to_string(), 1),
            ("Car".to_string(), 4),
        ]
    );
}

tests!(
    root_read_matches_direct_reads,
    default_order_groups_by_type_then_id,
    explicit_order_sorts_globally,
    equal_sort_keys_keep_type_then_id_order,
);
