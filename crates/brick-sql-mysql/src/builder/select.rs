//! MySQL SELECT: the base SELECT plus `LIMIT` and `OFFSET`.

use brick_sql_core::{Expr, Select};

use super::wrapper;
use crate::clauses::{HasLimit, HasOffset};
use crate::MySqlBricks;

/// A SELECT statement with MySQL paging.
///
/// Clause order: `select`, `from`, `join`, `where`, `group_by`, `having`,
/// `order_by`, `limit`, `offset`.
#[derive(Debug, Clone)]
pub struct MySqlSelect {
    base: Select,
    state: Paging,
    bricks: MySqlBricks,
}

#[derive(Debug, Clone, Default)]
struct Paging {
    limit: Option<u64>,
    offset: Option<u64>,
}

wrapper!(MySqlSelect wraps Select);

impl MySqlSelect {
    /// Sets the selected columns (`*` when empty).
    #[must_use]
    pub fn columns<I, C>(self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.map_base(|b| b.columns(cols))
    }

    /// Adds `DISTINCT`.
    #[must_use]
    pub fn distinct(self) -> Self {
        self.map_base(Select::distinct)
    }

    /// Adds a table to the FROM list.
    #[must_use]
    pub fn from(self, table: &str) -> Self {
        self.map_base(|b| b.from(table))
    }

    /// Adds an `INNER JOIN`.
    #[must_use]
    pub fn join(self, table: &str, on: &str) -> Self {
        self.map_base(|b| b.join(table, on))
    }

    /// Adds a `LEFT JOIN`.
    #[must_use]
    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.map_base(|b| b.left_join(table, on))
    }

    /// Adds a `RIGHT JOIN`.
    #[must_use]
    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.map_base(|b| b.right_join(table, on))
    }

    /// Adds a `CROSS JOIN`.
    #[must_use]
    pub fn cross_join(self, table: &str) -> Self {
        self.map_base(|b| b.cross_join(table))
    }

    /// Adds a WHERE condition, ANDed with any existing one.
    #[must_use]
    pub fn where_clause(self, expr: Expr) -> Self {
        self.map_base(|b| b.where_clause(expr))
    }

    /// Sets the GROUP BY columns.
    #[must_use]
    pub fn group_by<I, C>(self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.map_base(|b| b.group_by(cols))
    }

    /// Adds a HAVING condition, ANDed with any existing one.
    #[must_use]
    pub fn having(self, expr: Expr) -> Self {
        self.map_base(|b| b.having(expr))
    }

    /// Sets the ORDER BY columns.
    #[must_use]
    pub fn order_by<I, C>(self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.map_base(|b| b.order_by(cols))
    }
}

impl HasLimit for MySqlSelect {
    fn limit_value(&self) -> Option<u64> {
        self.state.limit
    }

    fn limit_slot(&mut self) -> &mut Option<u64> {
        &mut self.state.limit
    }
}

impl HasOffset for MySqlSelect {
    fn offset_value(&self) -> Option<u64> {
        self.state.offset
    }

    fn offset_slot(&mut self) -> &mut Option<u64> {
        &mut self.state.offset
    }
}
