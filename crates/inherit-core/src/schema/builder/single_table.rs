use super::BuildSchema;
use crate::{
    schema::{db::Discriminator, mapping::DiscriminatorValue},
    stmt::Type,
    Result,
};
use std::collections::HashMap;

impl BuildSchema<'_> {
    /// One table for the whole hierarchy. Root properties are required;
    /// properties of the children are nullable since any row carries only
    /// one child's. A discriminator column names each row's concrete type.
    pub(super) fn build_single_table(&mut self) -> Result<()> {
        let app = self.app;
        let root = app.root();
        let table = self.create_table(&root.name);

        for entity in app.entities() {
            self.map_table(entity.id, table);
        }

        for property in &root.properties {
            let column = self.push_property_column(table, property, false);

            for entity in app.entities() {
                self.map_field(entity.id, property, column);
            }
        }

        // Sibling properties with the same column name and kind share a column.
        let mut shared = HashMap::new();

        for child in app.children() {
            for property in &child.properties {
                let storage_name = property.storage_name();

                let column = match shared.get(&storage_name) {
                    Some(&(column, ty, ref owner)) => {
                        if ty != property.ty {
                            return Err(self.schema_error(format!(
                                "`{child}.{name}` is {ty_new} but `{owner}` stores column `{storage_name}` as {ty}",
                                child = child.name,
                                name = property.name,
                                ty_new = property.ty,
                            )));
                        }
                        column
                    }
                    None => {
                        let column = self.push_property_column(table, property, true);
                        shared.insert(storage_name, (column, property.ty, child.name.to_string()));
                        column
                    }
                };

                self.map_field(child.id, property, column);
            }
        }

        let name = self.builder.discriminator_column.clone();

        if self.tables[table.0].column_by_name(&name).is_some() {
            return Err(self.schema_error(format!(
                "discriminator column `{name}` collides with a property column"
            )));
        }

        let column = self.table_mut(table).push_column(name, Type::String, false);
        let mut values = vec![];

        for child in app.children() {
            let value = child.name.upper_camel_case();
            values.push(value.clone());
            self.entities[child.id.0].discriminator = Some(DiscriminatorValue { column, value });
        }

        self.table_mut(table).discriminator = Some(Discriminator { column, values });

        Ok(())
    }
}
