//! # brick-sql-mysql
//!
//! MySQL-specific extensions for `brick-sql-core`.
//!
//! # How MySQL differs from the base grammar
//!
//! - **[LIMIT]**: `SELECT` takes `LIMIT n` and `OFFSET n` after
//!   `ORDER BY`.
//! - **Single-table [UPDATE] and [DELETE]**: both accept `ORDER BY` and
//!   `LIMIT` after `WHERE`, bounding which rows are touched.
//! - **[INSERT IGNORE]**: `INSERT IGNORE INTO ...` downgrades errors such
//!   as duplicate keys to warnings.
//! - **[ON DUPLICATE KEY UPDATE]**: MySQL's upsert. Colliding rows are
//!   updated instead, either from the attempted row (`col = VALUES(col)`)
//!   or from an expression.
//! - **Identifier quoting**: MySQL quotes identifiers with backticks.
//!
//! [LIMIT]: https://dev.mysql.com/doc/refman/8.0/en/select.html
//! [UPDATE]: https://dev.mysql.com/doc/refman/8.0/en/update.html
//! [DELETE]: https://dev.mysql.com/doc/refman/8.0/en/delete.html
//! [INSERT IGNORE]: https://dev.mysql.com/doc/refman/8.0/en/insert.html
//! [ON DUPLICATE KEY UPDATE]: https://dev.mysql.com/doc/refman/8.0/en/insert-on-duplicate.html
//!
//! ## Example
//!
//! ```rust
//! use brick_sql_mysql::prelude::*;
//!
//! let sql = brick_sql_mysql::insert("main.some_table", ["id", "grade"])?
//!     .values([123, 92])
//!     .on_duplicate_key_update(["grade"])
//!     .to_string();
//!
//! assert_eq!(
//!     sql,
//!     "INSERT INTO main.some_table (id, grade) VALUES (123, 92) \
//!      ON DUPLICATE KEY UPDATE grade = VALUES(grade)"
//! );
//! # Ok::<(), brick_sql_core::GrammarError>(())
//! ```

mod bricks;
pub mod builder;
pub mod clauses;
mod dialect;
pub mod prelude;

pub use bricks::{MySqlBricks, MySqlStatement, Registries};
pub use builder::{MySqlDelete, MySqlInsert, MySqlSelect, MySqlUpdate};
pub use dialect::MySqlDialect;

use brick_sql_core::Result;

/// Creates a SELECT builder on the [shared](MySqlBricks::shared) grammar.
///
/// # Errors
///
/// Returns an error if the shared grammar could not be built.
pub fn select() -> Result<MySqlSelect> {
    Ok(MySqlBricks::shared()?.select())
}

/// Creates an INSERT builder on the [shared](MySqlBricks::shared) grammar.
///
/// # Errors
///
/// Returns an error if the shared grammar could not be built.
pub fn insert<I, C>(table: &str, cols: I) -> Result<MySqlInsert>
where
    I: IntoIterator<Item = C>,
    C: Into<String>,
{
    Ok(MySqlBricks::shared()?.insert(table, cols))
}

/// Creates an UPDATE builder on the [shared](MySqlBricks::shared) grammar.
///
/// # Errors
///
/// Returns an error if the shared grammar could not be built.
pub fn update(table: &str) -> Result<MySqlUpdate> {
    Ok(MySqlBricks::shared()?.update(table))
}

/// Creates a DELETE builder on the [shared](MySqlBricks::shared) grammar.
///
/// # Errors
///
/// Returns an error if the shared grammar could not be built.
pub fn delete(table: &str) -> Result<MySqlDelete> {
    Ok(MySqlBricks::shared()?.delete(table))
}
