//! # brick-sql-core
//!
//! A composable SQL statement builder whose output is assembled from an
//! ordered list of named clauses.
//!
//! This crate provides:
//! - SELECT, INSERT, UPDATE and DELETE builders with fluent, chained setters
//! - Literal rendering (`to_string()`) and parameterized rendering
//!   (`to_params()`)
//! - Reserved-word aware identifier quoting
//! - A [`ClauseRegistry`] per statement kind that extensions can splice new
//!   clauses into, relative to a named anchor
//!
//! ## Building statements
//!
//! ```rust
//! use brick_sql_core::builder::{col, insert};
//! use brick_sql_core::{Select, ToSqlValue};
//!
//! let sql = Select::new()
//!     .from("users")
//!     .where_clause(col("id").eq(1))
//!     .to_string();
//! assert_eq!(sql, "SELECT * FROM users WHERE id = 1");
//!
//! let sql = insert("users", ["user", "name"])
//!     .values([1_i64.to_sql_value(), "Alice".to_sql_value()])
//!     .to_string();
//! assert_eq!(sql, r#"INSERT INTO users ("user", name) VALUES (1, 'Alice')"#);
//! ```
//!
//! ## Extending the grammar
//!
//! ```rust
//! use brick_sql_core::clause;
//! use brick_sql_core::{ClauseRegistry, GrammarConfig, RenderContext, Select, Statement};
//!
//! let mut registry: ClauseRegistry<Select> = Select::clauses();
//! registry
//!     .insert_after("lock", clause::ORDER_BY, |_: &Select, _: &mut RenderContext| {
//!         Some(String::from("FOR UPDATE"))
//!     })
//!     .unwrap();
//!
//! let sql = registry.to_sql(&Select::new().from("jobs"), GrammarConfig::default());
//! assert_eq!(sql, "SELECT * FROM jobs FOR UPDATE");
//! ```

pub mod builder;
pub mod clause;
pub mod config;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod keywords;
pub mod render;
pub mod statement;

pub use builder::{col, Delete, Expr, Insert, Select, SqlValue, ToSqlValue, Update};
pub use clause::{Clause, ClauseRegistry, RenderFn};
pub use config::{GrammarConfig, Placeholder};
pub use dialect::{Dialect, GenericDialect};
pub use error::{GrammarError, Result};
pub use render::RenderContext;
pub use statement::{Statement, StatementKind};
