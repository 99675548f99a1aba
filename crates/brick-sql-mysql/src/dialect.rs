//! MySQL dialect implementation.

use brick_sql_core::dialect::Dialect;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_sql_core::{GrammarConfig, Placeholder};

    #[test]
    fn test_mysql_dialect() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.name(), "mysql");
        assert_eq!(dialect.identifier_quote(), '`');
        assert_eq!(dialect.quote_identifier("order"), "`order`");
    }

    #[test]
    fn test_mysql_config() {
        let config = GrammarConfig::for_dialect(&MySqlDialect::new());
        assert_eq!(config.auto_quote_char, Some('`'));
        assert_eq!(config.placeholder, Placeholder::Question);
    }
}
