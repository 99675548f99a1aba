//! UPDATE statement builder.

use std::fmt;

use super::expr::Expr;
use super::value::{SqlValue, ToSqlValue};
use crate::clause::{self, ClauseRegistry};
use crate::config::GrammarConfig;
use crate::render::RenderContext;
use crate::statement::{Statement, StatementKind};

#[derive(Debug, Clone, PartialEq)]
enum Assigned {
    Value(SqlValue),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Assignment {
    column: String,
    value: Assigned,
}

/// An UPDATE statement builder.
///
/// Clause order: `update`, `set`, `where`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    table: String,
    assignments: Vec<Assignment>,
    where_clause: Option<Expr>,
}

impl Update {
    /// Creates an UPDATE builder for `table`.
    #[must_use]
    pub fn table(table: &str) -> Self {
        Self {
            table: String::from(table),
            ..Self::default()
        }
    }

    /// Adds a `column = value` assignment.
    #[must_use]
    pub fn set<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.assignments.push(Assignment {
            column: String::from(column),
            value: Assigned::Value(value.to_sql_value()),
        });
        self
    }

    /// Adds a `column = <sql>` assignment with the SQL emitted verbatim.
    #[must_use]
    pub fn set_raw(mut self, column: &str, sql: &str) -> Self {
        self.assignments.push(Assignment {
            column: String::from(column),
            value: Assigned::Raw(String::from(sql)),
        });
        self
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
    fn render_update(&self, cx: &mut RenderContext) -> Option<String> {
        Some(format!("UPDATE {}", cx.column(&self.table)))
    }

    fn render_set(&self, cx: &mut RenderContext) -> Option<String> {
        if self.assignments.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .assignments
            .iter()
            .map(|a| {
                let column = cx.column(&a.column);
                match &a.value {
                    Assigned::Value(value) => format!("{column} = {}", cx.value(value)),
                    Assigned::Raw(sql) => format!("{column} = {sql}"),
                }
            })
            .collect();
        Some(format!("SET {}", parts.join(", ")))
    }

    fn render_where(&self, cx: &mut RenderContext) -> Option<String> {
        self.where_clause
            .as_ref()
            .map(|expr| format!("WHERE {}", expr.render(cx)))
    }
}

impl Statement for Update {
    const KIND: StatementKind = StatementKind::Update;

    fn clauses() -> ClauseRegistry<Self> {
        ClauseRegistry::new(Self::KIND)
            .define(clause::UPDATE, Self::render_update)
            .define(clause::SET, Self::render_set)
            .define(clause::WHERE, Self::render_where)
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_with(GrammarConfig::default()))
    }
}
