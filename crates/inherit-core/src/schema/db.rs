//! Store-level schema: the tables a hierarchy is laid out across.

mod column;
pub use column::{Column, ColumnId};

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Discriminator, ForeignKey, Table, TableId};
