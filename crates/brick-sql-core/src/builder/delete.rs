//! DELETE statement builder.

use std::fmt;

use super::expr::Expr;
use super::value::SqlValue;
use crate::clause::{self, ClauseRegistry};
use crate::config::GrammarConfig;
use crate::render::RenderContext;
use crate::statement::{Statement, StatementKind};

/// A DELETE statement builder.
///
/// Clause order: `delete`, `where`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delete {
    table: String,
    where_clause: Option<Expr>,
}

impl Delete {
    /// Creates a DELETE builder for `table`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from(table: &str) -> Self {
        Self {
            table: String::from(table),
            where_clause: None,
        }
    }

    /// Adds a WHERE condition. Repeated calls are combined with AND.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Renders with placeholders and returns the parameters.
    #[must_use]
    pub fn to_params(&self) -> (String, Vec<SqlValue>) {
        self.to_params_with(GrammarConfig::default())
    }

    #[allow(clippy::unnecessary_wraps)]
    fn render_delete(&self, cx: &mut RenderContext) -> Option<String> {
        Some(format!("DELETE FROM {}", cx.column(&self.table)))
    }

    fn render_where(&self, cx: &mut RenderContext) -> Option<String> {
        self.where_clause
            .as_ref()
            .map(|expr| format!("WHERE {}", expr.render(cx)))
    }
}

impl Statement for Delete {
    const KIND: StatementKind = StatementKind::Delete;

    fn clauses() -> ClauseRegistry<Self> {
        ClauseRegistry::new(Self::KIND)
            .define(clause::DELETE, Self::render_delete)
            .define(clause::WHERE, Self::render_where)
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_with(GrammarConfig::default()))
    }
}
