//! SELECT statement builder.

use std::fmt;

use super::expr::Expr;
use super::value::SqlValue;
use crate::clause::{self, ClauseRegistry};
use crate::config::GrammarConfig;
use crate::render::RenderContext;
use crate::statement::{Statement, StatementKind};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Join {
    keyword: &'static str,
    table: String,
    on: Option<String>,
}

/// A SELECT statement builder.
///
/// Clause order: `select`, `from`, `join`, `where`, `group_by`, `having`,
/// `order_by`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    distinct: bool,
    columns: Vec<String>,
    from: Vec<String>,
    joins: Vec<Join>,
    where_clause: Option<Expr>,
    group_by: Vec<String>,
    having: Option<Expr>,
    order_by: Vec<String>,
}

impl Select {
    /// Creates a `SELECT *` builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected columns. An empty list selects `*`.
    #[must_use]
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds a table to the FROM list.
    #[must_use]
    pub fn from(mut self, table: &str) -> Self {
        self.from.push(String::from(table));
        self
    }

    fn push_join(mut self, keyword: &'static str, table: &str, on: Option<&str>) -> Self {
        self.joins.push(Join {
            keyword,
            table: String::from(table),
            on: on.map(String::from),
        });
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(self, table: &str, on: &str) -> Self {
        self.push_join("INNER JOIN", table, Some(on))
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.push_join("LEFT JOIN", table, Some(on))
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.push_join("RIGHT JOIN", table, Some(on))
    }

    /// Adds a CROSS JOIN.
    #[must_use]
    pub fn cross_join(self, table: &str) -> Self {
        self.push_join("CROSS JOIN", table, None)
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

    /// Sets the GROUP BY columns.
    #[must_use]
    pub fn group_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.group_by = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a HAVING condition. Repeated calls are combined with AND.
    #[must_use]
    pub fn having(mut self, expr: Expr) -> Self {
        self.having = Some(match self.having.take() {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Sets the ORDER BY columns (`"name"`, `"age desc"`, ...).
    #[must_use]
    pub fn order_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.order_by = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Renders with placeholders and returns the parameters.
    #[must_use]
    pub fn to_params(&self) -> (String, Vec<SqlValue>) {
        self.to_params_with(GrammarConfig::default())
    }

    #[allow(clippy::unnecessary_wraps)]
    fn render_select(&self, cx: &mut RenderContext) -> Option<String> {
        let columns = if self.columns.is_empty() {
            String::from("*")
        } else {
            self.columns
                .iter()
                .map(|c| cx.column(c))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        Some(format!("SELECT {distinct}{columns}"))
    }

    fn render_from(&self, cx: &mut RenderContext) -> Option<String> {
        cx.column_list(&self.from).map(|tables| format!("FROM {tables}"))
    }

    fn render_join(&self, cx: &mut RenderContext) -> Option<String> {
        if self.joins.is_empty() {
            return None;
        }
        let joins: Vec<String> = self
            .joins
            .iter()
            .map(|join| {
                let table = cx.column(&join.table);
                join.on.as_ref().map_or_else(
                    || format!("{} {table}", join.keyword),
                    |on| format!("{} {table} ON {on}", join.keyword),
                )
            })
            .collect();
        Some(joins.join(" "))
    }

    fn render_where(&self, cx: &mut RenderContext) -> Option<String> {
        self.where_clause
            .as_ref()
            .map(|expr| format!("WHERE {}", expr.render(cx)))
    }

    fn render_group_by(&self, cx: &mut RenderContext) -> Option<String> {
        cx.column_list(&self.group_by)
            .map(|cols| format!("GROUP BY {cols}"))
    }

    fn render_having(&self, cx: &mut RenderContext) -> Option<String> {
        self.having
            .as_ref()
            .map(|expr| format!("HAVING {}", expr.render(cx)))
    }

    fn render_order_by(&self, cx: &mut RenderContext) -> Option<String> {
        cx.column_list(&self.order_by)
            .map(|cols| format!("ORDER BY {cols}"))
    }
}

impl Statement for Select {
    const KIND: StatementKind = StatementKind::Select;

    fn clauses() -> ClauseRegistry<Self> {
        ClauseRegistry::new(Self::KIND)
            .define(clause::SELECT, Self::render_select)
            .define(clause::FROM, Self::render_from)
            .define(clause::JOIN, Self::render_join)
            .define(clause::WHERE, Self::render_where)
            .define(clause::GROUP_BY, Self::render_group_by)
            .define(clause::HAVING, Self::render_having)
            .define(clause::ORDER_BY, Self::render_order_by)
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_with(GrammarConfig::default()))
    }
}
