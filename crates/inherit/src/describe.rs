use indexmap::IndexMap;
use inherit_core::{schema::Name, stmt::Entity};
use std::fmt::Write;

/// Per-type formatting, selected by the entity's concrete type.
///
/// ```
/// use inherit::{Describe, Entity, Id};
///
/// let mut describe = Describe::new();
/// describe.register("Car", |car| {
///     format!("{} car with {} doors", car.get("brand").unwrap(), car.get("number_of_doors").unwrap())
/// });
///
/// let car = Entity::new("Car").with_id(Id(1)).with("brand", "VW").with("number_of_doors", 5);
/// assert_eq!(describe.describe(&car), "VW car with 5 doors");
///
/// let truck = Entity::new("Truck").with_id(Id(2)).with("brand", "MB");
/// assert_eq!(describe.describe(&truck), "Truck #2 { brand: MB }");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Describe {
    formatters: IndexMap<Name, fn(&Entity) -> String>,
}

impl Describe {
    pub fn new() -> Describe {
        Describe::default()
    }

    /// Registers the formatter for `ty`, replacing any earlier one.
    pub fn register(&mut self, ty: &str, f: fn(&Entity) -> String) -> &mut Self {
        self.formatters.insert(Name::new(ty), f);
        self
    }

    pub fn describe(&self, entity: &Entity) -> String {
        match self.formatters.get(&Name::new(entity.ty())) {
            Some(f) => f(entity),
            None => describe_default(entity),
        }
    }
}

/// `Type #id { prop: value, ... }`
pub fn describe_default(entity: &Entity) -> String {
    let mut out = entity.ty().to_string();

    if let Some(id) = entity.id() {
        let _ = write!(out, " #{id}");
    }

    out.push_str(" {");
    for (i, (name, value)) in entity.values().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        let _ = write!(out, "{sep}{name}: {value}");
    }
    out.push_str(if entity.values().len() == 0 { "}" } else { " }" });

    out
}
