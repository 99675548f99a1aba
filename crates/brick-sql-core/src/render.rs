//! Render state threaded through clause renderers.

use crate::builder::value::SqlValue;
use crate::config::GrammarConfig;
use crate::ident::handle_column;

/// Per-render state: the grammar configuration and, in parameterized
/// mode, the parameters collected so far.
///
/// Renderers receive builder state by shared reference; the context is the
/// only thing they may write to.
#[derive(Debug, Clone)]
pub struct RenderContext {
    config: GrammarConfig,
    params: Option<Vec<SqlValue>>,
}

impl RenderContext {
    /// Creates a context that inlines values as escaped literals.
    #[must_use]
    pub const fn inline(config: GrammarConfig) -> Self {
        Self {
            config,
            params: None,
        }
    }

    /// Creates a context that replaces values with placeholders.
    #[must_use]
    pub const fn parameterized(config: GrammarConfig) -> Self {
        Self {
            config,
            params: Some(Vec::new()),
        }
    }

    /// Returns the grammar configuration.
    #[must_use]
    pub const fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Returns `true` when values are collected as parameters.
    #[must_use]
    pub const fn is_parameterized(&self) -> bool {
        self.params.is_some()
    }

    /// Renders a column or table reference.
    #[must_use]
    pub fn column(&self, column: &str) -> String {
        handle_column(column, None, &self.config)
    }

    /// Renders a column reference qualified by `table`.
    #[must_use]
    pub fn qualified_column(&self, column: &str, table: Option<&str>) -> String {
        handle_column(column, table, &self.config)
    }

    /// Renders a comma-separated column list, skipping empty entries.
    ///
    /// Returns `None` when nothing is left, so callers can drop the whole
    /// clause.
    #[must_use]
    pub fn column_list(&self, columns: &[String]) -> Option<String> {
        let rendered: Vec<String> = columns
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| self.column(c))
            .collect();
        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join(", "))
        }
    }

    /// Renders a value, either inline or as the next placeholder.
    pub fn value(&mut self, value: &SqlValue) -> String {
        match &mut self.params {
            Some(params) => {
                params.push(value.clone());
                self.config.placeholder.render(params.len())
            }
            None => value.to_sql_inline(),
        }
    }

    /// Consumes the context and returns the collected parameters.
    #[must_use]
    pub fn into_params(self) -> Vec<SqlValue> {
        self.params.unwrap_or_default()
    }
}
