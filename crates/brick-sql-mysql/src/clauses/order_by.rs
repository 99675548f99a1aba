//! `ORDER BY` for statements whose base grammar has none.

use brick_sql_core::RenderContext;

/// Statements that accept `ORDER BY`.
pub trait HasOrderBy: Sized {
    /// Returns the ordering columns.
    fn order_by_columns(&self) -> &[String];

    #[doc(hidden)]
    fn order_by_slot(&mut self) -> &mut Vec<String>;

    /// Sets the ordering columns (`"name"`, `"age desc"`, ...).
    ///
    /// Modifiers after the column name are passed through verbatim. Empty
    /// entries are skipped; a list with nothing else removes the clause.
    #[must_use]
    fn order_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        *self.order_by_slot() = cols.into_iter().map(Into::into).collect();
        self
    }
}

/// Renders `ORDER BY col, ...`.
#[must_use]
pub fn render_order_by<S: HasOrderBy>(stmt: &S, cx: &mut RenderContext) -> Option<String> {
    cx.column_list(stmt.order_by_columns())
        .map(|cols| format!("ORDER BY {cols}"))
}
