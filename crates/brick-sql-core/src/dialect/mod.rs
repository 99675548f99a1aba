//! SQL Dialect support.
//!
//! Different databases quote identifiers and number parameters
//! differently. A dialect supplies those defaults; see
//! [`GrammarConfig::for_dialect`](crate::config::GrammarConfig::for_dialect).

mod generic;

pub use generic::GenericDialect;

use crate::config::Placeholder;
use crate::ident::quote_with;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    ///
    /// `"` for standard SQL, `` ` `` for MySQL.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the parameter placeholder style.
    fn placeholder(&self) -> Placeholder {
        Placeholder::Question
    }

    /// Quotes an identifier unconditionally, doubling embedded quotes.
    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, self.identifier_quote())
    }
}
