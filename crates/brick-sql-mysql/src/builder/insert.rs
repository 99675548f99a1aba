//! MySQL INSERT: the base INSERT plus `IGNORE` and `ON DUPLICATE KEY UPDATE`.

use brick_sql_core::{Insert, ToSqlValue};

use super::wrapper;
use crate::clauses::{HasIgnore, HasOnDuplicateKeyUpdate, UpdateColumn};
use crate::MySqlBricks;

/// An INSERT statement with MySQL conflict handling.
///
/// Clause order: `insert`, `ignore`, `into`, `values`,
/// `on_duplicate_key_update`.
#[derive(Debug, Clone)]
pub struct MySqlInsert {
    base: Insert,
    state: Conflict,
    bricks: MySqlBricks,
}

#[derive(Debug, Clone, Default)]
struct Conflict {
    ignore: bool,
    on_duplicate: Option<Vec<UpdateColumn>>,
}

wrapper!(MySqlInsert wraps Insert);

impl MySqlInsert {
    /// Sets the target columns.
    #[must_use]
    pub fn columns<I, C>(self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.map_base(|b| b.columns(cols))
    }

    /// Adds one row of values.
    #[must_use]
    pub fn values<I, T>(self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        self.map_base(|b| b.values(row))
    }

    /// Adds several rows of values.
    #[must_use]
    pub fn values_many<R, I, T>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        self.map_base(|b| b.values_many(rows))
    }
}

impl HasIgnore for MySqlInsert {
    fn ignore_flag(&self) -> bool {
        self.state.ignore
    }

    fn ignore_slot(&mut self) -> &mut bool {
        &mut self.state.ignore
    }
}

impl HasOnDuplicateKeyUpdate for MySqlInsert {
    fn on_duplicate_columns(&self) -> Option<&[UpdateColumn]> {
        self.state.on_duplicate.as_deref()
    }

    fn on_duplicate_slot(&mut self) -> &mut Option<Vec<UpdateColumn>> {
        &mut self.state.on_duplicate
    }
}
