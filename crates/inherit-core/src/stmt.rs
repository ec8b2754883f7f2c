mod count;
pub use count::Count;

mod delete;
pub use delete::Delete;

mod entity;
pub use entity::Entity;

mod eval;
pub use eval::Input;

mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::{BinaryOp, ExprBinaryOp};

mod id;
pub use id::Id;

mod insert;
pub use insert::Insert;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod query;
pub use query::Query;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
