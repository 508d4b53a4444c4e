//! Database repository layer for authors and books.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model` so the rest of the application never sees entity types. Every read
//! excludes soft-deleted rows; deletes only set `deleted_at`.

pub mod author;
pub mod book;

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::{Expr, IntoColumnRef},
    Condition,
};

/// Builds a case-insensitive substring match on `column`.
///
/// `%`, `_` and `\` in `value` are escaped so they match literally. Both sides are folded
/// with the database's `LOWER` so column and pattern always share the same case rules.
pub(crate) fn contains_ignore_case(column: impl IntoColumnRef, value: &str) -> Condition {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    Condition::all().add(Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE '\\'",
        [Expr::col(column), Expr::val(pattern)],
    ))
}
