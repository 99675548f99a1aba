//! MySQL UPDATE: the base UPDATE plus `ORDER BY` and `LIMIT`.

use brick_sql_core::{Expr, ToSqlValue, Update};

use super::wrapper;
use crate::clauses::{HasLimit, HasOrderBy};
use crate::MySqlBricks;

/// An UPDATE statement with MySQL row bounds.
///
/// Clause order: `update`, `set`, `where`, `order_by`, `limit`.
#[derive(Debug, Clone)]
pub struct MySqlUpdate {
    base: Update,
    state: Bounds,
    bricks: MySqlBricks,
}

#[derive(Debug, Clone, Default)]
pub(super) struct Bounds {
    pub(super) order_by: Vec<String>,
    pub(super) limit: Option<u64>,
}

wrapper!(MySqlUpdate wraps Update);

impl MySqlUpdate {
    /// Assigns a value to a column.
    #[must_use]
    pub fn set<T: ToSqlValue>(self, column: &str, value: T) -> Self {
        self.map_base(|b| b.set(column, value))
    }

    /// Assigns a raw SQL expression to a column.
    #[must_use]
    pub fn set_raw(self, column: &str, sql: &str) -> Self {
        self.map_base(|b| b.set_raw(column, sql))
    }

    /// Adds a WHERE condition, ANDed with any existing one.
    #[must_use]
    pub fn where_clause(self, expr: Expr) -> Self {
        self.map_base(|b| b.where_clause(expr))
    }
}

impl HasOrderBy for MySqlUpdate {
    fn order_by_columns(&self) -> &[String] {
        &self.state.order_by
    }

    fn order_by_slot(&mut self) -> &mut Vec<String> {
        &mut self.state.order_by
    }
}

impl HasLimit for MySqlUpdate {
    fn limit_value(&self) -> Option<u64> {
        self.state.limit
    }

    fn limit_slot(&mut self) -> &mut Option<u64> {
        &mut self.state.limit
    }
}
