use super::{EntityId, EntityType, Hierarchy, Name, Property, KEY};
use crate::{stmt::Type, Error, Result};
use std::collections::HashSet;

/// Declares a hierarchy: root properties first, then one closure per child.
///
/// ```
/// use inherit_core::schema::app::Hierarchy;
/// use inherit_core::stmt::Type;
///
/// let hierarchy = Hierarchy::builder("Vehicle")
///     .property("brand", Type::String)
///     .child("Car", |car| car.property("number_of_doors", Type::I64))
///     .build()
///     .unwrap();
///
/// assert_eq!(hierarchy.children().len(), 1);
/// ```
#[derive(Debug)]
pub struct Builder {
    root: TypeDef,
    children: Vec<TypeDef>,
}

#[derive(Debug)]
pub struct ChildBuilder {
    def: TypeDef,
}

#[derive(Debug)]
struct TypeDef {
    name: String,
    properties: Vec<(String, Type)>,
}

impl Builder {
    pub(super) fn new(root: impl Into<String>) -> Builder {
        Builder {
            root: TypeDef::new(root.into()),
            children: vec![],
        }
    }

    pub fn property(mut self, name: impl Into<String>, ty: Type) -> Builder {
        self.root.properties.push((name.into(), ty));
        self
    }

    pub fn child(
        mut self,
        name: impl Into<String>,
        f: impl FnOnce(ChildBuilder) -> ChildBuilder,
    ) -> Builder {
        let child = f(ChildBuilder {
            def: TypeDef::new(name.into()),
        });
        self.children.push(child.def);
        self
    }

    pub fn build(self) -> Result<Hierarchy> {
        if self.children.is_empty() {
            return Err(Error::schema_derivation(format!(
                "`{}` has no derived types",
                self.root.name
            )));
        }

        let mut names = HashSet::new();
        let mut types = vec![];

        for (index, def) in std::iter::once(self.root).chain(self.children).enumerate() {
            let id = EntityId(index);
            let name = Name::new(&def.name);

            if name.is_empty() {
                return Err(Error::schema_derivation("entity type names must not be empty"));
            }

            if !names.insert(name.clone()) {
                return Err(Error::schema_derivation(format!(
                    "entity type `{name}` is declared twice"
                )));
            }

            let properties = def.build_properties(id, &name)?;

            types.push(EntityType {
                id,
                name,
                properties,
                parent: (index > 0).then_some(EntityId::ROOT),
            });
        }

        let (root, children) = (&types[0], &types[1..]);

        for child in children {
            for property in &child.properties {
                let name = Name::new(&property.name);
                if root.properties.iter().any(|p| Name::new(&p.name) == name) {
                    return Err(Error::schema_derivation(format!(
                        "`{}.{}` redeclares a property of `{}`",
                        child.name, property.name, root.name
                    )));
                }
            }
        }

        Ok(Hierarchy::from_types(types))
    }
}

impl ChildBuilder {
    pub fn property(mut self, name: impl Into<String>, ty: Type) -> ChildBuilder {
        self.def.properties.push((name.into(), ty));
        self
    }
}

impl TypeDef {
    fn new(name: String) -> TypeDef {
        TypeDef {
            name,
            properties: vec![],
        }
    }

    fn build_properties(self, id: EntityId, owner: &Name) -> Result<Vec<Property>> {
        let mut seen = HashSet::new();
        let mut properties = vec![];

        for (index, (name, ty)) in self.properties.into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::schema_derivation(format!(
                    "`{owner}` declares a property with an empty name"
                )));
            }

            if Name::new(&name) == Name::new(KEY) {
                return Err(Error::schema_derivation(format!(
                    "`{owner}.{name}` is reserved for the identifier"
                )));
            }

            if ty == Type::Id {
                return Err(Error::schema_derivation(format!(
                    "`{owner}.{name}` cannot use the identifier type"
                )));
            }

            // Compare by column name so `fuelType` and `fuel_type` clash too.
            if !seen.insert(Name::new(&name)) {
                return Err(Error::schema_derivation(format!(
                    "`{owner}.{name}` is declared twice"
                )));
            }

            properties.push(Property {
                id: id.property(index),
                name,
                ty,
            });
        }

        Ok(properties)
    }
}
