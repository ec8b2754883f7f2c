use inherit::{Count, Expr};
use tests::{
    hierarchy::{car, seed_vehicles, truck, vehicles},
    tests, DbTest,
};

async fn total_is_sum_of_types(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;

    for (brand, price) in [("Fiat", 9_000), ("Kia", 21_000), ("Seat", 17_500)] {
        db.insert(car(brand, price, 5, "Petrol")).await.unwrap();
    }
    db.insert(truck("Scania", 140_000, 30, 4)).await.unwrap();

    let total = db.count(Count::all("Vehicle")).await.unwrap();
    let cars = db.count(Count::all("Car")).await.unwrap();
    let trucks = db.count(Count::all("Truck")).await.unwrap();

    assert_eq!(cars, 4);
    assert_eq!(trucks, 2);
    assert_eq!(total, cars + trucks);
}

async fn count_with_filter(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;
    seed_vehicles(&db).await;
    db.insert(car("Audi", 61_000, 5, "Diesel")).await.unwrap();

    let expensive = Expr::property("price").gt(40_000);

    let total = db
        .count(Count::all("Vehicle").filter(expensive.clone()))
        .await
        .unwrap();
    let cars = db
        .count(Count::all("Car").filter(expensive.clone()))
        .await
        .unwrap();
    let trucks = db
        .count(Count::all("Truck").filter(expensive))
        .await
        .unwrap();

    assert_eq!((total, cars, trucks), (2, 1, 1));

    let diesel = db
        .count(Count::all("Car").filter(Expr::property("fuel_type").eq("Diesel")))
        .await
        .unwrap();
    assert_eq!(diesel, 1);
}

async fn count_empty_store(test: &mut DbTest) {
    let db = test.setup_db(vehicles()).await;

    assert_eq!(db.count(Count::all("Vehicle")).await.unwrap(), 0);
    assert_eq!(db.count(Count::all("Truck")).await.unwrap(), 0);
}

tests!(total_is_sum_of_types, count_with_filter, count_empty_store);
