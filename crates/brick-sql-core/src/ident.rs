//! Identifier handling.
//!
//! Column and table references pass through [`handle_column`] before they
//! reach the output. Dotted references are split into parts and every part
//! that is a reserved word gets wrapped in the configured quote character.
//! References that are not plain identifiers (`age desc`, `COUNT(*)`) are
//! emitted verbatim.

use crate::config::GrammarConfig;
use crate::keywords::is_reserved;

/// Returns `true` for `[A-Za-z_][A-Za-z0-9_$]*`.
#[must_use]
pub fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Wraps `ident` in `quote`, doubling any embedded quote characters.
#[must_use]
pub fn quote_with(ident: &str, quote: char) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push(quote);
    for c in ident.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Quotes the reserved parts of a dotted identifier reference.
#[must_use]
pub fn auto_quote(reference: &str, quote: Option<char>) -> String {
    let Some(quote) = quote else {
        return reference.to_string();
    };

    let parts: Vec<&str> = reference.split('.').collect();
    if !parts.iter().all(|part| *part == "*" || is_identifier(part)) {
        return reference.to_string();
    }

    parts
        .iter()
        .map(|part| {
            if is_reserved(part) {
                quote_with(part, quote)
            } else {
                (*part).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Renders a column reference, prefixing `table` when the column is
/// unqualified and quoting reserved parts per `config`.
#[must_use]
pub fn handle_column(column: &str, table: Option<&str>, config: &GrammarConfig) -> String {
    match table {
        Some(table) if !column.contains('.') => {
            auto_quote(&format!("{table}.{column}"), config.auto_quote_char)
        }
        _ => auto_quote(column, config.auto_quote_char),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKTICK: GrammarConfig = GrammarConfig::new().with_auto_quote_char(Some('`'));

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("user_id"));
        assert!(is_identifier("_tmp"));
        assert!(is_identifier("a$b"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("age desc"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_quote_reserved_only() {
        assert_eq!(handle_column("user", None, &BACKTICK), "`user`");
        assert_eq!(handle_column("name", None, &BACKTICK), "name");
        assert_eq!(handle_column("main.order", None, &BACKTICK), "main.`order`");
        assert_eq!(handle_column("main.some_table", None, &BACKTICK), "main.some_table");
    }

    #[test]
    fn test_verbatim_passthrough() {
        assert_eq!(handle_column("age desc", None, &BACKTICK), "age desc");
        assert_eq!(handle_column("order desc", None, &BACKTICK), "order desc");
        assert_eq!(handle_column("COUNT(*)", None, &BACKTICK), "COUNT(*)");
        assert_eq!(handle_column("t.*", None, &BACKTICK), "t.*");
        assert_eq!(handle_column("", None, &BACKTICK), "");
    }

    #[test]
    fn test_table_qualifier() {
        assert_eq!(handle_column("user", Some("u"), &BACKTICK), "u.`user`");
        assert_eq!(handle_column("x.id", Some("u"), &BACKTICK), "x.id");
    }

    #[test]
    fn test_no_quote_char() {
        let config = GrammarConfig::new().with_auto_quote_char(None);
        assert_eq!(handle_column("user", None, &config), "user");
    }

    #[test]
    fn test_quote_with_escapes() {
        assert_eq!(quote_with("a`b", '`'), "`a``b`");
    }
}
