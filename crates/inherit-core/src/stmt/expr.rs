use super::{BinaryOp, ExprBinaryOp, Value};
use crate::schema::db::{ColumnId, TableId};
use crate::Result;

/// A filter expression.
///
/// Callers build expressions over property names ([`Expr::Property`],
/// [`Expr::Key`]). The planner lowers those into column references
/// ([`Expr::Column`]) for the table actions it emits.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// All sub-expressions hold
    And(Vec<Expr>),

    /// At least one sub-expression holds
    Or(Vec<Expr>),

    /// Negation
    Not(Box<Expr>),

    /// Comparison between two operands
    BinaryOp(ExprBinaryOp),

    /// A property of the entity, by name
    Property(String),

    /// The entity's identifier
    Key,

    /// A column of the row being evaluated
    Column(ColumnId),

    /// True when the evaluated row's key is present in the given table
    KeyIn(TableId),

    /// A literal
    Value(Value),
}

impl Expr {
    pub fn property(name: impl Into<String>) -> Expr {
        Expr::Property(name.into())
    }

    pub fn key() -> Expr {
        Expr::Key
    }

    pub fn column(id: impl Into<ColumnId>) -> Expr {
        Expr::Column(id.into())
    }

    pub fn key_in(table: TableId) -> Expr {
        Expr::KeyIn(table)
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn and(self, rhs: Expr) -> Expr {
        match self {
            Expr::And(mut operands) => {
                operands.push(rhs);
                Expr::And(operands)
            }
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }

    pub fn or(self, rhs: Expr) -> Expr {
        match self {
            Expr::Or(mut operands) => {
                operands.push(rhs);
                Expr::Or(operands)
            }
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }

    /// Conjunction of every expression; `None` when the input is empty.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Option<Expr> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Expr::And(operands)),
        }
    }

    pub fn eq(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Ne, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Le, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(self, BinaryOp::Ge, rhs)
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    /// Property names referenced by the expression, in order of appearance.
    pub fn properties(&self) -> Vec<&str> {
        let mut names = vec![];
        self.walk(&mut |expr| {
            if let Expr::Property(name) = expr {
                names.push(name.as_str());
            }
        });
        names
    }

    /// Columns referenced by the expression.
    pub fn columns(&self) -> Vec<ColumnId> {
        let mut columns = vec![];
        self.walk(&mut |expr| {
            if let Expr::Column(column) = expr {
                columns.push(*column);
            }
        });
        columns
    }

    /// True if any sub-expression consults another table.
    pub fn references_tables(&self) -> bool {
        let mut found = false;
        self.walk(&mut |expr| found |= matches!(expr, Expr::KeyIn(_)));
        found
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        f(self);

        match self {
            Expr::And(operands) | Expr::Or(operands) => {
                for operand in operands {
                    operand.walk(f);
                }
            }
            Expr::Not(expr) => expr.walk(f),
            Expr::BinaryOp(expr) => {
                expr.lhs.walk(f);
                expr.rhs.walk(f);
            }
            Expr::Property(_) | Expr::Key | Expr::Column(_) | Expr::KeyIn(_) | Expr::Value(_) => {}
        }
    }

    /// Rebuilds the expression, replacing each property and key reference
    /// with the expression returned by `f`.
    pub fn lower(&self, f: &mut impl FnMut(&Expr) -> Result<Expr>) -> Result<Expr> {
        Ok(match self {
            Expr::And(operands) => Expr::And(
                operands
                    .iter()
                    .map(|operand| operand.lower(f))
                    .collect::<Result<_>>()?,
            ),
            Expr::Or(operands) => Expr::Or(
                operands
                    .iter()
                    .map(|operand| operand.lower(f))
                    .collect::<Result<_>>()?,
            ),
            Expr::Not(expr) => Expr::Not(Box::new(expr.lower(f)?)),
            Expr::BinaryOp(expr) => Expr::BinaryOp(ExprBinaryOp {
                lhs: Box::new(expr.lhs.lower(f)?),
                op: expr.op,
                rhs: Box::new(expr.rhs.lower(f)?),
            }),
            Expr::Property(_) | Expr::Key => f(self)?,
            Expr::Column(_) | Expr::KeyIn(_) | Expr::Value(_) => self.clone(),
        })
    }

    /// Splits a conjunction into its top-level operands.
    pub fn into_conjuncts(self) -> Vec<Expr> {
        match self {
            Expr::And(operands) => operands
                .into_iter()
                .flat_map(Expr::into_conjuncts)
                .collect(),
            expr => vec![expr],
        }
    }
}

macro_rules! impl_from_literal {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Expr::Value(value.into())
                }
            }
        )+
    };
}

impl_from_literal!(
    bool,
    i32,
    i64,
    rust_decimal::Decimal,
    &str,
    String,
    super::Id,
    Value
);
