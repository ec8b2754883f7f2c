use inherit::{Describe, Entity, Hierarchy, Id, Result, Type};
use rust_decimal::Decimal;

pub fn hierarchy() -> Result<Hierarchy> {
    Hierarchy::builder("Vehicle")
        .property("brand", Type::String)
        .property("price", Type::Decimal)
        .child("Car", |car| {
            car.property("number_of_doors", Type::I64)
                .property("fuel_type", Type::String)
        })
        .child("Motorcycle", |motorcycle| {
            motorcycle
                .property("engine_displacement", Type::I64)
                .property("has_sidecar", Type::Bool)
        })
        .child("Truck", |truck| {
            truck
                .property("load_capacity", Type::Decimal)
                .property("number_of_axles", Type::I64)
        })
        .build()
}

pub fn car(brand: &str, price: i64, doors: i64, fuel: &str) -> Entity {
    Entity::new("Car")
        .with("brand", brand)
        .with("price", Decimal::from(price))
        .with("number_of_doors", doors)
        .with("fuel_type", fuel)
}

pub fn motorcycle(brand: &str, price: i64, displacement: i64, sidecar: bool) -> Entity {
    Entity::new("Motorcycle")
        .with("brand", brand)
        .with("price", Decimal::from(price))
        .with("engine_displacement", displacement)
        .with("has_sidecar", sidecar)
}

pub fn truck(brand: &str, price: i64, load: Decimal, axles: i64) -> Entity {
    Entity::new("Truck")
        .with("brand", brand)
        .with("price", Decimal::from(price))
        .with("load_capacity", load)
        .with("number_of_axles", axles)
}

/// Two of each type, with ids 1 to 6 shared across the hierarchy.
pub fn seed() -> Vec<Entity> {
    vec![
        car("VW", 28_000, 5, "Hybrid").with_id(Id(1)),
        car("Toyota", 32_500, 4, "Petrol").with_id(Id(2)),
        motorcycle("Ducati", 21_000, 937, false).with_id(Id(3)),
        motorcycle("Ural", 17_900, 749, true).with_id(Id(4)),
        truck("MB", 95_000, Decimal::new(120, 1), 2).with_id(Id(5)),
        truck("Scania", 142_000, Decimal::new(265, 1), 4).with_id(Id(6)),
    ]
}

pub fn describe() -> Describe {
    let mut describe = Describe::new();

    describe
        .register("Car", |car| {
            format!(
                "Car #{}: {} with {} doors, {}, {} EUR",
                field(car, "id"),
                field(car, "brand"),
                field(car, "number_of_doors"),
                field(car, "fuel_type"),
                field(car, "price"),
            )
        })
        .register("Motorcycle", |motorcycle| {
            let sidecar = match motorcycle.get("has_sidecar") {
                Some(inherit::Value::Bool(true)) => " with sidecar",
                _ => "",
            };
            format!(
                "Motorcycle #{}: {} {}cc{sidecar}, {} EUR",
                field(motorcycle, "id"),
                field(motorcycle, "brand"),
                field(motorcycle, "engine_displacement"),
                field(motorcycle, "price"),
            )
        })
        .register("Truck", |truck| {
            format!(
                "Truck #{}: {} carrying {} t on {} axles, {} EUR",
                field(truck, "id"),
                field(truck, "brand"),
                field(truck, "load_capacity"),
                field(truck, "number_of_axles"),
                field(truck, "price"),
            )
        });

    describe
}

fn field(entity: &Entity, name: &str) -> String {
    if name == "id" {
        return entity.id().map(|id| id.to_string()).unwrap_or_default();
    }

    entity
        .get(name)
        .map(ToString::to_string)
        .unwrap_or_default()
}
