use super::{Expr, Value};
use crate::schema::db::{ColumnId, TableId};
use crate::{bail, Result};

/// Supplies column values (and key membership) while evaluating a lowered
/// expression against one row.
pub trait Input {
    fn column(&self, id: ColumnId) -> Option<&Value>;

    fn key_in(&self, table: TableId) -> bool;
}

impl Expr {
    /// Evaluates a lowered filter against a row.
    ///
    /// Property and key references must have been lowered to columns first.
    pub fn eval_bool(&self, input: &impl Input) -> Result<bool> {
        Ok(match self {
            Expr::And(operands) => {
                for operand in operands {
                    if !operand.eval_bool(input)? {
                        return Ok(false);
                    }
                }
                true
            }
            Expr::Or(operands) => {
                for operand in operands {
                    if operand.eval_bool(input)? {
                        return Ok(true);
                    }
                }
                false
            }
            Expr::Not(expr) => !expr.eval_bool(input)?,
            Expr::BinaryOp(expr) => {
                let lhs = expr.lhs.eval(input)?;
                let rhs = expr.rhs.eval(input)?;
                expr.op.matches(lhs.compare(&rhs))
            }
            Expr::KeyIn(table) => input.key_in(*table),
            Expr::Value(Value::Bool(value)) => *value,
            expr => match expr.eval(input)? {
                Value::Bool(value) => value,
                Value::Null => false,
                value => bail!("filter evaluated to a non-boolean value; value={value:?}"),
            },
        })
    }

    /// Evaluates an operand to a value.
    pub fn eval(&self, input: &impl Input) -> Result<Value> {
        match self {
            Expr::Column(column) => match input.column(*column) {
                Some(value) => Ok(value.clone()),
                None => bail!("column {column:?} is not available to this expression"),
            },
            Expr::Value(value) => Ok(value.clone()),
            Expr::Property(name) => bail!("property `{name}` was not lowered to a column"),
            Expr::Key => bail!("identifier reference was not lowered to a column"),
            expr => Ok(Value::Bool(expr.eval_bool(input)?)),
        }
    }
}
