//! Glob-importable builders and clause traits.
//!
//! ```rust
//! use brick_sql_mysql::prelude::*;
//! ```

pub use crate::clauses::{
    HasIgnore, HasLimit, HasOffset, HasOnDuplicateKeyUpdate, HasOrderBy, UpdateColumn,
};
pub use crate::{MySqlBricks, MySqlDelete, MySqlDialect, MySqlInsert, MySqlSelect, MySqlUpdate};
pub use brick_sql_core::builder::col;
pub use brick_sql_core::{GrammarConfig, Placeholder, SqlValue, ToSqlValue};
