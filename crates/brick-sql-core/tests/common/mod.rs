#![allow(dead_code)]

use brick_sql_core::{GrammarConfig, Placeholder, SqlValue, Statement};

/// Configuration used by MySQL-flavoured assertions.
pub fn backtick() -> GrammarConfig {
    GrammarConfig::new().with_auto_quote_char(Some('`'))
}

/// Renders inline and checks that a second render is byte-identical.
pub fn render<S: Statement>(stmt: &S, config: GrammarConfig) -> String {
    let first = stmt.to_sql_with(config);
    let second = stmt.to_sql_with(config);
    assert_eq!(first, second, "rendering is not idempotent");
    first
}

/// Renders with `$n` placeholders.
pub fn numbered<S: Statement>(stmt: &S) -> (String, Vec<SqlValue>) {
    stmt.to_params_with(GrammarConfig::default().with_placeholder(Placeholder::Numbered))
}
