use inherit_core::{
    driver::{
        operation::{self, Assignment, Operation, Source},
        Response,
    },
    schema::db::{ColumnId, Schema, Table, TableId},
    stmt::{Expr, Id, Input, Value},
    Error, Result,
};
use std::{collections::BTreeMap, fmt};

/// Table contents, keyed by table name.
#[derive(Debug, Clone, Default)]
pub(crate) struct Store {
    tables: BTreeMap<String, TableData>,
}

#[derive(Debug, Clone, Default)]
struct TableData {
    rows: BTreeMap<Id, Vec<Value>>,
}

#[derive(Debug)]
pub(crate) enum StoreError {
    DuplicateKey { table: String, key: Id },
    ForeignKeyViolation { table: String, key: Id, references: String },
    MissingKey { table: String },
    MissingTable { table: String },
    NestedTransaction,
    NoTransaction,
    NullValue { table: String, column: String },
    TypeMismatch { table: String, column: String, value: Value },
}

/// One source row: a table row, or a leaf row with its root row.
struct Row<'a> {
    store: &'a Store,
    schema: &'a Schema,
    key: Id,
    parts: [Option<(TableId, &'a [Value])>; 2],
}

impl Store {
    pub(crate) fn clear(&mut self) {
        self.tables.clear();
    }

    pub(crate) fn create_tables(&mut self, schema: &Schema) {
        for table in &schema.tables {
            self.tables.entry(table.name.clone()).or_default();
        }
    }

    pub(crate) fn apply(&mut self, schema: &Schema, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.insert(schema, op),
            Operation::UpdateByKey(op) => self.update(schema, op),
            Operation::DeleteByKey(op) => self.delete(schema, op),
            Operation::Query(op) => {
                let rows = self.scan(schema, &op.source, op.filter.as_ref())?;
                Ok(Response::values(
                    rows.iter()
                        .map(|row| row.project(&op.returning))
                        .collect::<Result<_>>()?,
                ))
            }
            Operation::Count(op) => {
                let rows = self.scan(schema, &op.source, op.filter.as_ref())?;
                Ok(Response::count(rows.len() as u64))
            }
            Operation::Transaction(_) => unreachable!("handled by the connection"),
        }
    }

    fn insert(&mut self, schema: &Schema, op: operation::Insert) -> Result<Response> {
        let table = schema.table(op.table);
        let mut row = vec![Value::Null; table.columns.len()];

        for Assignment { column, value } in op.values {
            row[column.index] = value;
        }

        check_row(table, &row)?;

        let Value::Id(key) = row[0] else {
            return Err(StoreError::MissingKey {
                table: table.name.clone(),
            }
            .into());
        };

        for other in &op.unique_across {
            let other = schema.table(*other);
            if self.data(other)?.rows.contains_key(&key) {
                return Err(Error::identifier_collision(key, &other.name));
            }
        }

        if let Some(fk) = &table.foreign_key {
            let target = schema.table(fk.references.table);
            if !self.data(target)?.rows.contains_key(&key) {
                return Err(StoreError::ForeignKeyViolation {
                    table: table.name.clone(),
                    key,
                    references: target.name.clone(),
                }
                .into());
            }
        }

        let data = self.data_mut(table)?;
        if data.rows.contains_key(&key) {
            return Err(StoreError::DuplicateKey {
                table: table.name.clone(),
                key,
            }
            .into());
        }

        data.rows.insert(key, row);
        Ok(Response::count(1))
    }

    fn update(&mut self, schema: &Schema, op: operation::UpdateByKey) -> Result<Response> {
        let table = schema.table(op.table);

        if !self.matches(schema, table, op.key, op.filter.as_ref())? {
            return Ok(Response::count(0));
        }

        let mut row = self.data(table)?.rows[&op.key].clone();
        for Assignment { column, value } in op.assignments {
            row[column.index] = value;
        }

        check_row(table, &row)?;

        self.data_mut(table)?.rows.insert(op.key, row);
        Ok(Response::count(1))
    }

    fn delete(&mut self, schema: &Schema, op: operation::DeleteByKey) -> Result<Response> {
        let table = schema.table(op.table);

        if !self.matches(schema, table, op.key, op.filter.as_ref())? {
            return Ok(Response::count(0));
        }

        // Rows referencing this one must go first.
        for other in &schema.tables {
            let Some(fk) = &other.foreign_key else {
                continue;
            };

            if fk.references.table == table.id && self.data(other)?.rows.contains_key(&op.key) {
                return Err(StoreError::ForeignKeyViolation {
                    table: other.name.clone(),
                    key: op.key,
                    references: table.name.clone(),
                }
                .into());
            }
        }

        self.data_mut(table)?.rows.remove(&op.key);
        Ok(Response::count(1))
    }

    /// Whether `table` holds a row for `key` that satisfies `filter`.
    fn matches(
        &self,
        schema: &Schema,
        table: &Table,
        key: Id,
        filter: Option<&Expr>,
    ) -> Result<bool> {
        let Some(values) = self.data(table)?.rows.get(&key) else {
            return Ok(false);
        };

        let Some(filter) = filter else {
            return Ok(true);
        };

        let row = Row {
            store: self,
            schema,
            key,
            parts: [Some((table.id, values.as_slice())), None],
        };

        filter.eval_bool(&row)
    }

    fn scan<'a>(
        &'a self,
        schema: &'a Schema,
        source: &Source,
        filter: Option<&Expr>,
    ) -> Result<Vec<Row<'a>>> {
        let mut out = vec![];

        match source {
            Source::Table(id) => {
                for (key, values) in &self.data(schema.table(*id))?.rows {
                    let row = Row {
                        store: self,
                        schema,
                        key: *key,
                        parts: [Some((*id, values.as_slice())), None],
                    };

                    if row.matches(filter)? {
                        out.push(row);
                    }
                }
            }
            Source::Join(join) => {
                let roots = &self.data(schema.table(join.root))?.rows;

                for (key, leaf) in &self.data(schema.table(join.leaf))?.rows {
                    let Some(root) = roots.get(key) else {
                        continue;
                    };

                    let row = Row {
                        store: self,
                        schema,
                        key: *key,
                        parts: [
                            Some((join.root, root.as_slice())),
                            Some((join.leaf, leaf.as_slice())),
                        ],
                    };

                    if row.matches(join.root_filter.as_ref())? && row.matches(filter)? {
                        out.push(row);
                    }
                }
            }
        }

        Ok(out)
    }

    fn data(&self, table: &Table) -> Result<&TableData> {
        self.tables.get(&table.name).ok_or_else(|| {
            StoreError::MissingTable {
                table: table.name.clone(),
            }
            .into()
        })
    }

    fn data_mut(&mut self, table: &Table) -> Result<&mut TableData> {
        self.tables.get_mut(&table.name).ok_or_else(|| {
            StoreError::MissingTable {
                table: table.name.clone(),
            }
            .into()
        })
    }
}

impl Row<'_> {
    fn matches(&self, filter: Option<&Expr>) -> Result<bool> {
        match filter {
            Some(filter) => filter.eval_bool(self),
            None => Ok(true),
        }
    }

    fn project(&self, columns: &[ColumnId]) -> Result<Vec<Value>> {
        columns
            .iter()
            .map(|column| match self.column(*column) {
                Some(value) => Ok(value.clone()),
                None => Err(inherit_core::err!(
                    "column {column:?} is not part of the source"
                )),
            })
            .collect()
    }
}

impl Input for Row<'_> {
    fn column(&self, id: ColumnId) -> Option<&Value> {
        self.parts
            .iter()
            .flatten()
            .find(|(table, _)| *table == id.table)
            .and_then(|(_, values)| values.get(id.index))
    }

    fn key_in(&self, table: TableId) -> bool {
        let table = self.schema.table(table);
        self.store
            .tables
            .get(&table.name)
            .is_some_and(|data| data.rows.contains_key(&self.key))
    }
}

fn check_row(table: &Table, row: &[Value]) -> Result<()> {
    for (column, value) in table.columns.iter().zip(row) {
        match value.ty() {
            None if !column.nullable => {
                return Err(StoreError::NullValue {
                    table: table.name.clone(),
                    column: column.name.clone(),
                }
                .into())
            }
            Some(ty) if ty != column.ty => {
                return Err(StoreError::TypeMismatch {
                    table: table.name.clone(),
                    column: column.name.clone(),
                    value: value.clone(),
                }
                .into())
            }
            _ => {}
        }
    }

    Ok(())
}

impl std::error::Error for StoreError {}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateKey { table, key } => {
                write!(f, "duplicate key {key} in `{table}`")
            }
            StoreError::ForeignKeyViolation {
                table,
                key,
                references,
            } => write!(
                f,
                "foreign key violation: `{table}` row {key} references `{references}`"
            ),
            StoreError::MissingKey { table } => write!(f, "row for `{table}` has no key"),
            StoreError::MissingTable { table } => write!(f, "table `{table}` does not exist"),
            StoreError::NestedTransaction => f.write_str("a transaction is already open"),
            StoreError::NoTransaction => f.write_str("no transaction is open"),
            StoreError::NullValue { table, column } => {
                write!(f, "`{table}.{column}` must not be null")
            }
            StoreError::TypeMismatch {
                table,
                column,
                value,
            } => write!(f, "`{table}.{column}` cannot store {value:?}"),
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Error {
        Error::driver_operation_failed(err)
    }
}
