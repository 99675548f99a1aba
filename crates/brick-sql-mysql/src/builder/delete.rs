//! MySQL DELETE: the base DELETE plus `ORDER BY` and `LIMIT`.

use brick_sql_core::{Delete, Expr};

use super::update::Bounds;
use super::wrapper;
use crate::clauses::{HasLimit, HasOrderBy};
use crate::MySqlBricks;

/// A DELETE statement with MySQL row bounds.
///
/// Clause order: `delete`, `where`, `order_by`, `limit`.
#[derive(Debug, Clone)]
pub struct MySqlDelete {
    base: Delete,
    state: Bounds,
    bricks: MySqlBricks,
}

wrapper!(MySqlDelete wraps Delete);

impl MySqlDelete {
    /// Adds a WHERE condition, ANDed with any existing one.
    #[must_use]
    pub fn where_clause(self, expr: Expr) -> Self {
        self.map_base(|b| b.where_clause(expr))
    }
}

impl HasOrderBy for MySqlDelete {
    fn order_by_columns(&self) -> &[String] {
        &self.state.order_by
    }

    fn order_by_slot(&mut self) -> &mut Vec<String> {
        &mut self.state.order_by
    }
}

impl HasLimit for MySqlDelete {
    fn limit_value(&self) -> Option<u64> {
        self.state.limit
    }

    fn limit_slot(&mut self) -> &mut Option<u64> {
        &mut self.state.limit
    }
}
