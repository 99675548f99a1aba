//! `INSERT IGNORE`.

use brick_sql_core::RenderContext;

/// Statements that accept the `IGNORE` modifier.
pub trait HasIgnore: Sized {
    /// Returns `true` once [`ignore`](Self::ignore) was called.
    fn ignore_flag(&self) -> bool;

    #[doc(hidden)]
    fn ignore_slot(&mut self) -> &mut bool;

    /// Turns errors such as duplicate keys into warnings.
    #[must_use]
    fn ignore(mut self) -> Self {
        *self.ignore_slot() = true;
        self
    }
}

/// Renders `IGNORE`.
#[must_use]
pub fn render_ignore<S: HasIgnore>(stmt: &S, _cx: &mut RenderContext) -> Option<String> {
    stmt.ignore_flag().then(|| String::from("IGNORE"))
}
