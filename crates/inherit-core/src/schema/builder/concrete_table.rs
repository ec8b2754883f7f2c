use super::BuildSchema;
use crate::Result;

impl BuildSchema<'_> {
    /// One self-contained table per child: identifier, root properties, own
    /// properties. The root gets no table.
    pub(super) fn build_concrete_table(&mut self) -> Result<()> {
        let app = self.app;
        let root = app.root();

        for child in app.children() {
            let table = self.create_table(&child.name);
            self.map_table(child.id, table);

            for property in root.properties.iter().chain(&child.properties) {
                let column = self.push_property_column(table, property, false);
                self.map_field(child.id, property, column);
            }
        }

        Ok(())
    }
}
