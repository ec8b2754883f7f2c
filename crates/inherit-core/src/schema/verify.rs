use super::{app::KEY, Schema};
use crate::{stmt::Type, Error, Result};
use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_names_are_unique()?;
        self.verify_column_names_are_unique()?;
        self.verify_each_table_has_one_primary_key();
        self.verify_concrete_types_are_mapped();
        Ok(())
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.schema.db.tables {
            if !names.insert(&table.name) {
                return Err(Error::schema_derivation(format!(
                    "two types map to table `{}`",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        for table in &self.schema.db.tables {
            let mut names = HashSet::new();

            for column in &table.columns {
                if column.name.is_empty() {
                    return Err(Error::schema_derivation(format!(
                        "table `{}` has a column with an empty name",
                        table.name
                    )));
                }

                if !names.insert(&column.name) {
                    return Err(Error::schema_derivation(format!(
                        "table `{}` has two columns named `{}`",
                        table.name, column.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_each_table_has_one_primary_key(&self) {
        for table in &self.schema.db.tables {
            let key = table.primary_key();
            assert!(key.primary_key && !key.nullable);
            assert_eq!(key.name, KEY);
            assert_eq!(key.ty, Type::Id);
            assert_eq!(
                table.columns.iter().filter(|column| column.primary_key).count(),
                1,
                "table `{}` must have exactly one primary key column",
                table.name
            );
        }
    }

    fn verify_concrete_types_are_mapped(&self) {
        for child in self.schema.app.children() {
            let mapping = self.schema.mapping_for(child.id);
            assert!(!mapping.tables.is_empty(), "`{}` has no table", child.name);
            assert_eq!(mapping.tables.len(), mapping.keys.len());
            assert_eq!(
                mapping.fields.len(),
                self.schema.app.properties_of(child.id).count(),
                "`{}` has unmapped properties",
                child.name
            );
        }
    }
}
