//! Base statement builders.
//!
//! Each builder stores its state and declares the canonical order of its
//! clauses through [`Statement::clauses`](crate::statement::Statement::clauses).
//!
//! # Example
//!
//! ```rust
//! use brick_sql_core::builder::{col, select};
//!
//! let (sql, params) = select()
//!     .columns(["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(true))
//!     .to_params();
//!
//! assert_eq!(sql, "SELECT id, name FROM users WHERE active = ?");
//! assert_eq!(params.len(), 1);
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod update;
pub mod value;

pub use delete::Delete;
pub use expr::{col, Column, Expr};
pub use insert::Insert;
pub use select::Select;
pub use update::Update;
pub use value::{SqlValue, ToSqlValue};

/// Creates a SELECT builder selecting `*` until columns are set.
#[must_use]
pub fn select() -> Select {
    Select::new()
}

/// Creates an INSERT builder for `table` and its columns.
#[must_use]
pub fn insert<I, C>(table: &str, cols: I) -> Insert
where
    I: IntoIterator<Item = C>,
    C: Into<String>,
{
    Insert::into(table).columns(cols)
}

/// Creates an UPDATE builder for `table`.
#[must_use]
pub fn update(table: &str) -> Update {
    Update::table(table)
}

/// Creates a DELETE builder for `table`.
#[must_use]
pub fn delete(table: &str) -> Delete {
    Delete::from(table)
}
