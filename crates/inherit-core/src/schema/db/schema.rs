use super::{Column, ColumnId, Table, TableId};
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// Renders the layout one table per line, e.g.
/// `cars(id id primary key, number_of_doors integer, id -> vehicles.id)`.
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            write!(f, "{}(", table.name)?;

            for (i, column) in table.columns.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                write!(f, "{} {}", column.name, column.ty)?;

                if column.primary_key {
                    f.write_str(" primary key")?;
                } else if column.nullable {
                    f.write_str(" null")?;
                }
            }

            if let Some(fk) = &table.foreign_key {
                let target = self.table(fk.references.table);
                write!(
                    f,
                    ", {} -> {}.{}",
                    table.column(fk.column).name,
                    target.name,
                    target.column(fk.references).name
                )?;
            }

            writeln!(f, ")")?;
        }

        Ok(())
    }
}
