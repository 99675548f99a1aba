//! Generic SQL dialect.

use super::Dialect;

/// A generic SQL dialect using ANSI SQL standards.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GrammarConfig, Placeholder};

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.placeholder(), Placeholder::Question);
        assert_eq!(dialect.quote_identifier("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_config_from_generic_dialect() {
        assert_eq!(
            GrammarConfig::for_dialect(&GenericDialect::new()),
            GrammarConfig::default()
        );
    }
}
