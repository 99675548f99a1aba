//! Grammar configuration.
//!
//! A [`GrammarConfig`] is a small `Copy` value that is fixed when a
//! grammar is set up and then handed to every render call. It can be
//! deserialized, so hosts may keep it alongside the rest of their
//! settings.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;

/// Placeholder style used by parameterized rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `?` for every parameter.
    #[default]
    Question,
    /// `$1`, `$2`, ... numbered from one.
    Numbered,
}

impl Placeholder {
    /// Renders the placeholder for the parameter at `position` (one-based).
    #[must_use]
    pub fn render(self, position: usize) -> String {
        match self {
            Self::Question => String::from("?"),
            Self::Numbered => format!("${position}"),
        }
    }
}

/// Settings shared by every statement rendered through a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Character wrapped around identifiers that collide with reserved
    /// words. `None` disables quoting altogether.
    pub auto_quote_char: Option<char>,
    /// Placeholder style for parameterized output.
    pub placeholder: Placeholder,
}

impl GrammarConfig {
    /// Creates the ANSI configuration: double-quote identifiers, `?` placeholders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_quote_char: Some('"'),
            placeholder: Placeholder::Question,
        }
    }

    /// Derives a configuration from a dialect.
    #[must_use]
    pub fn for_dialect<D: Dialect + ?Sized>(dialect: &D) -> Self {
        Self {
            auto_quote_char: Some(dialect.identifier_quote()),
            placeholder: dialect.placeholder(),
        }
    }

    /// Replaces the auto-quote character.
    #[must_use]
    pub const fn with_auto_quote_char(mut self, quote: Option<char>) -> Self {
        self.auto_quote_char = quote;
        self
    }

    /// Replaces the placeholder style.
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_render() {
        assert_eq!(Placeholder::Question.render(3), "?");
        assert_eq!(Placeholder::Numbered.render(3), "$3");
    }

    #[test]
    fn test_default_config() {
        let config = GrammarConfig::default();
        assert_eq!(config.auto_quote_char, Some('"'));
        assert_eq!(config.placeholder, Placeholder::Question);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: GrammarConfig =
            serde_json::from_str(r#"{"auto_quote_char": "`"}"#).unwrap();
        assert_eq!(config.auto_quote_char, Some('`'));
        assert_eq!(config.placeholder, Placeholder::Question);

        let config: GrammarConfig =
            serde_json::from_str(r#"{"auto_quote_char": null, "placeholder": "numbered"}"#)
                .unwrap();
        assert_eq!(config.auto_quote_char, None);
        assert_eq!(config.placeholder, Placeholder::Numbered);
    }

    #[test]
    fn test_config_builders() {
        let config = GrammarConfig::new()
            .with_auto_quote_char(None)
            .with_placeholder(Placeholder::Numbered);
        assert_eq!(config.auto_quote_char, None);
        assert_eq!(config.placeholder, Placeholder::Numbered);
    }
}
