//! Statement kinds and the rendering entry points shared by every builder.

use std::fmt;

use crate::builder::value::SqlValue;
use crate::clause::ClauseRegistry;
use crate::config::GrammarConfig;

/// The four statement kinds the grammar knows how to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `SELECT ...`
    Select,
    /// `INSERT ...`
    Insert,
    /// `UPDATE ...`
    Update,
    /// `DELETE ...`
    Delete,
}

impl StatementKind {
    /// Returns the leading keyword of the statement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statement builder whose output is assembled from an ordered clause list.
pub trait Statement: Sized + 'static {
    /// The kind of statement this builder produces.
    const KIND: StatementKind;

    /// Returns the canonical clause order for this statement kind.
    fn clauses() -> ClauseRegistry<Self>;

    /// Renders the statement with values inlined.
    fn to_sql_with(&self, config: GrammarConfig) -> String {
        Self::clauses().to_sql(self, config)
    }

    /// Renders the statement with values replaced by placeholders.
    fn to_params_with(&self, config: GrammarConfig) -> (String, Vec<SqlValue>) {
        Self::clauses().to_params(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(StatementKind::Select.to_string(), "SELECT");
        assert_eq!(StatementKind::Insert.to_string(), "INSERT");
        assert_eq!(StatementKind::Update.to_string(), "UPDATE");
        assert_eq!(StatementKind::Delete.to_string(), "DELETE");
    }
}
