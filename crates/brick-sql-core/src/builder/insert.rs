//! INSERT statement builder.

use std::fmt;

use super::value::{SqlValue, ToSqlValue};
use crate::clause::{self, ClauseRegistry};
use crate::config::GrammarConfig;
use crate::render::RenderContext;
use crate::statement::{Statement, StatementKind};

/// An INSERT statement builder.
///
/// Clause order: `insert`, `into`, `values`. The bare `INSERT` keyword is a
/// clause of its own so modifiers can be placed between it and `INTO`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
}

impl Insert {
    /// Creates an INSERT builder for `table`.
    #[must_use]
    pub fn into(table: &str) -> Self {
        Self {
            table: String::from(table),
            ..Self::default()
        }
    }

    /// Sets the target columns.
    #[must_use]
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one row of values.
    #[must_use]
    pub fn values<I, T>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        self.rows
            .push(row.into_iter().map(ToSqlValue::to_sql_value).collect());
        self
    }

    /// Adds several rows of values.
    #[must_use]
    pub fn values_many<R, I, T>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        rows.into_iter().fold(self, Self::values)
    }

    /// Returns the target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Renders with placeholders and returns the parameters.
    #[must_use]
    pub fn to_params(&self) -> (String, Vec<SqlValue>) {
        self.to_params_with(GrammarConfig::default())
    }

    #[allow(clippy::unnecessary_wraps)]
    fn render_insert(&self, _cx: &mut RenderContext) -> Option<String> {
        Some(String::from("INSERT"))
    }

    #[allow(clippy::unnecessary_wraps)]
    fn render_into(&self, cx: &mut RenderContext) -> Option<String> {
        let table = cx.column(&self.table);
        Some(cx.column_list(&self.columns).map_or_else(
            || format!("INTO {table}"),
            |cols| format!("INTO {table} ({cols})"),
        ))
    }

    fn render_values(&self, cx: &mut RenderContext) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let items: Vec<String> = row.iter().map(|v| cx.value(v)).collect();
                format!("({})", items.join(", "))
            })
            .collect();
        Some(format!("VALUES {}", rows.join(", ")))
    }
}

impl Statement for Insert {
    const KIND: StatementKind = StatementKind::Insert;

    fn clauses() -> ClauseRegistry<Self> {
        ClauseRegistry::new(Self::KIND)
            .define(clause::INSERT, Self::render_insert)
            .define(clause::INTO, Self::render_into)
            .define(clause::VALUES, Self::render_values)
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_with(GrammarConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_insert() {
        let insert = Insert::into("users")
            .columns(["name", "email"])
            .values(["Alice", "alice@example.com"]);

        assert_eq!(
            insert.to_string(),
            "INSERT INTO users (name, email) VALUES ('Alice', 'alice@example.com')"
        );
        let (sql, params) = insert.to_params();
        assert_eq!(sql, "INSERT INTO users (name, email) VALUES (?, ?)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_insert_multiple_rows() {
        let sql = Insert::into("users")
            .columns(["name"])
            .values_many([["Alice"], ["Bob"], ["Charlie"]])
            .to_string();
        assert_eq!(
            sql,
            "INSERT INTO users (name) VALUES ('Alice'), ('Bob'), ('Charlie')"
        );
    }

    #[test]
    fn test_insert_without_columns() {
        let sql = Insert::into("users").values([1, 2]).to_string();
        assert_eq!(sql, "INSERT INTO users VALUES (1, 2)");
    }

    #[test]
    fn test_insert_mixed_values() {
        let sql = Insert::into("orders")
            .columns(["user_id", "note", "paid"])
            .values([1_i64.to_sql_value(), "it's".to_sql_value(), SqlValue::Null])
            .to_string();
        assert_eq!(
            sql,
            "INSERT INTO orders (user_id, note, paid) VALUES (1, 'it''s', NULL)"
        );
    }

    #[test]
    fn test_insert_injection_is_parameterized() {
        let malicious = "'; DROP TABLE users; --";
        let (sql, params) = Insert::into("users")
            .columns(["name"])
            .values([malicious])
            .to_params();
        assert_eq!(sql, "INSERT INTO users (name) VALUES (?)");
        assert!(matches!(&params[0], SqlValue::Text(s) if s == malicious));
    }
}
