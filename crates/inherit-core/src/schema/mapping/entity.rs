use crate::schema::{
    app::{EntityId, PropertyId},
    db::{ColumnId, TableId},
};

/// Where the rows of one type live.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,

    /// Tables holding a row for each instance, in write order: the root's
    /// table before the child's. Empty for the root under the concrete-table
    /// layout, which has no table of its own.
    pub tables: Vec<TableId>,

    /// Identifier column of each table in `tables`.
    pub keys: Vec<ColumnId>,

    /// Every property an instance carries, inherited ones first.
    pub fields: Vec<Field>,

    /// Set when the type shares its table with sibling types.
    pub discriminator: Option<DiscriminatorValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub property: PropertyId,

    /// Property name as declared
    pub name: String,

    pub column: ColumnId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatorValue {
    pub column: ColumnId,
    pub value: String,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Entity {
        Entity {
            id,
            tables: vec![],
            keys: vec![],
            fields: vec![],
            discriminator: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The table holding the type's own properties.
    pub fn leaf_table(&self) -> Option<TableId> {
        self.tables.last().copied()
    }

    /// The table every instance of the hierarchy has a row in, if any.
    pub fn root_table(&self) -> Option<TableId> {
        self.tables.first().copied()
    }

    /// Identifier column of `table`, when the type is stored there.
    pub fn key_for(&self, table: TableId) -> Option<ColumnId> {
        self.keys.iter().find(|key| key.table == table).copied()
    }

    /// Fields stored in `table`, in mapping order.
    pub fn fields_in(&self, table: TableId) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(move |field| field.column.table == table)
    }
}
