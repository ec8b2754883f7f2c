use super::{Column, ColumnId};
use crate::stmt::Type;
use std::fmt;

/// A table in the store
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns. The identifier column is always first.
    pub columns: Vec<Column>,

    /// Reference from this table's key to another table's key. Only child
    /// tables under the joined-table layout carry one.
    pub foreign_key: Option<ForeignKey>,

    /// Set when one table stores several concrete types.
    pub discriminator: Option<Discriminator>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableId(pub usize);

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKey {
    pub column: ColumnId,

    /// The referenced key column
    pub references: ColumnId,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discriminator {
    pub column: ColumnId,

    /// The values the column may hold, one per concrete type
    pub values: Vec<String>,
}

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Table {
        Table {
            id,
            name,
            columns: vec![],
            foreign_key: None,
            discriminator: None,
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column belongs to another table");
        &self.columns[id.index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key(&self) -> &Column {
        &self.columns[0]
    }

    pub(crate) fn push_column(&mut self, name: String, ty: Type, nullable: bool) -> ColumnId {
        let id = ColumnId {
            table: self.id,
            index: self.columns.len(),
        };
        self.columns.push(Column {
            id,
            name,
            ty,
            nullable,
            primary_key: id.index == 0,
        });
        id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
