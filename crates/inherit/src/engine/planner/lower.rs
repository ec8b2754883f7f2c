use inherit_core::{
    schema::{db::ColumnId, db::TableId, mapping},
    stmt::Expr,
    err, Result,
};

/// Rewrites property references in a checked filter to the columns storing
/// them for `mapping`'s type. The identifier lowers to `key`.
pub(super) fn lower(filter: &Expr, mapping: &mapping::Entity, key: ColumnId) -> Result<Expr> {
    filter.lower(&mut |expr| match expr {
        Expr::Property(name) => match mapping.field(name) {
            Some(field) => Ok(Expr::column(field.column)),
            None => Err(err!("property `{name}` has no column for {:?}", mapping.id)),
        },
        Expr::Key => Ok(Expr::column(key)),
        _ => Ok(expr.clone()),
    })
}

/// Splits a lowered filter into the conjuncts that only read `root` and
/// the rest.
pub(super) fn split_root(filter: Expr, root: TableId) -> (Option<Expr>, Option<Expr>) {
    let (root_side, rest): (Vec<_>, Vec<_>) = filter.into_conjuncts().into_iter().partition(|expr| {
        let columns = expr.columns();
        !columns.is_empty() && columns.iter().all(|column| column.table == root)
    });

    (Expr::and_from_vec(root_side), Expr::and_from_vec(rest))
}
