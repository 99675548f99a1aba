//! `LIMIT` and `OFFSET`.
//!
//! Both values are rendered inline, never as parameters. Zero and unset
//! values render nothing.

use brick_sql_core::RenderContext;

/// Statements that accept `LIMIT`.
pub trait HasLimit: Sized {
    /// Returns the current limit.
    fn limit_value(&self) -> Option<u64>;

    #[doc(hidden)]
    fn limit_slot(&mut self) -> &mut Option<u64>;

    /// Sets the row limit. `None` or `0` removes the clause.
    #[must_use]
    fn limit(mut self, value: impl Into<Option<u64>>) -> Self {
        *self.limit_slot() = value.into();
        self
    }
}

/// Statements that accept `OFFSET`.
pub trait HasOffset: Sized {
    /// Returns the current offset.
    fn offset_value(&self) -> Option<u64>;

    #[doc(hidden)]
    fn offset_slot(&mut self) -> &mut Option<u64>;

    /// Sets the row offset. `None` or `0` removes the clause.
    #[must_use]
    fn offset(mut self, value: impl Into<Option<u64>>) -> Self {
        *self.offset_slot() = value.into();
        self
    }
}

/// Renders `LIMIT n`.
#[must_use]
pub fn render_limit<S: HasLimit>(stmt: &S, _cx: &mut RenderContext) -> Option<String> {
    stmt.limit_value()
        .filter(|n| *n != 0)
        .map(|n| format!("LIMIT {n}"))
}

/// Renders `OFFSET n`.
#[must_use]
pub fn render_offset<S: HasOffset>(stmt: &S, _cx: &mut RenderContext) -> Option<String> {
    stmt.offset_value()
        .filter(|n| *n != 0)
        .map(|n| format!("OFFSET {n}"))
}
