use super::BuildSchema;
use crate::{schema::db::ForeignKey, Result};

impl BuildSchema<'_> {
    /// A root table with the identifier and root properties, plus one table
    /// per child holding only its own properties. A child row's key is also
    /// a reference to the root row with the same identifier.
    pub(super) fn build_joined_table(&mut self) -> Result<()> {
        let app = self.app;
        let root = app.root();
        let root_table = self.create_table(&root.name);
        let root_key = self.tables[root_table.0].primary_key().id;

        for entity in app.entities() {
            self.map_table(entity.id, root_table);
        }

        for property in &root.properties {
            let column = self.push_property_column(root_table, property, false);

            for entity in app.entities() {
                self.map_field(entity.id, property, column);
            }
        }

        for child in app.children() {
            let table = self.create_table(&child.name);
            let key = self.tables[table.0].primary_key().id;

            self.table_mut(table).foreign_key = Some(ForeignKey {
                column: key,
                references: root_key,
            });

            self.map_table(child.id, table);

            for property in &child.properties {
                let column = self.push_property_column(table, property, false);
                self.map_field(child.id, property, column);
            }
        }

        Ok(())
    }
}
