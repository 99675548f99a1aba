//! MySQL UPSERT (`INSERT ... ON DUPLICATE KEY UPDATE`).

use std::collections::{BTreeMap, HashMap};

use brick_sql_core::RenderContext;
use serde_json::Value;

/// One entry of an `ON DUPLICATE KEY UPDATE` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateColumn {
    /// `col = VALUES(col)`: take the value the INSERT tried to write.
    Values(String),
    /// `col = expr`, with `expr` emitted verbatim.
    Assign {
        /// Column being assigned.
        column: String,
        /// Raw SQL expression.
        expr: String,
    },
    /// An input that had no usable shape. Renders nothing.
    Skip,
}

impl UpdateColumn {
    /// `col = VALUES(col)`
    #[must_use]
    pub fn values(column: impl Into<String>) -> Self {
        Self::Values(column.into())
    }

    /// `col = expr`
    #[must_use]
    pub fn assign(column: impl Into<String>, expr: impl Into<String>) -> Self {
        Self::Assign {
            column: column.into(),
            expr: expr.into(),
        }
    }

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut pairs = pairs.into_iter();
        match (pairs.next(), pairs.next()) {
            (Some((column, expr)), None) => Self::Assign { column, expr },
            _ => Self::Skip,
        }
    }

    fn render(&self, cx: &RenderContext) -> Option<String> {
        match self {
            Self::Values(column) if column.is_empty() => None,
            Self::Values(column) => {
                let column = cx.column(column);
                Some(format!("{column} = VALUES({column})"))
            }
            Self::Assign { column, expr } => Some(format!("{} = {expr}", cx.column(column))),
            Self::Skip => None,
        }
    }
}

impl From<&str> for UpdateColumn {
    fn from(column: &str) -> Self {
        Self::values(column)
    }
}

impl From<String> for UpdateColumn {
    fn from(column: String) -> Self {
        Self::Values(column)
    }
}

impl From<(&str, &str)> for UpdateColumn {
    fn from((column, expr): (&str, &str)) -> Self {
        Self::assign(column, expr)
    }
}

impl From<(String, String)> for UpdateColumn {
    fn from((column, expr): (String, String)) -> Self {
        Self::Assign { column, expr }
    }
}

/// A single-entry map is `col = expr`; any other size is skipped.
impl From<BTreeMap<String, String>> for UpdateColumn {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::from_pairs(map)
    }
}

/// A single-entry map is `col = expr`; any other size is skipped.
impl<S: std::hash::BuildHasher> From<HashMap<String, String, S>> for UpdateColumn {
    fn from(map: HashMap<String, String, S>) -> Self {
        Self::from_pairs(map)
    }
}

/// Strings are plain columns. A single-key object maps its key to an
/// expression given as a string or number. Everything else is skipped.
impl From<&Value> for UpdateColumn {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(column) => Self::Values(column.clone()),
            Value::Object(map) if map.len() == 1 => {
                Self::from_pairs(map.iter().filter_map(|(column, expr)| match expr {
                    Value::String(s) => Some((column.clone(), s.clone())),
                    Value::Number(n) => Some((column.clone(), n.to_string())),
                    _ => None,
                }))
            }
            _ => Self::Skip,
        }
    }
}

/// Statements that accept `ON DUPLICATE KEY UPDATE`.
pub trait HasOnDuplicateKeyUpdate: Sized {
    /// Returns the configured entries, or `None` when the clause is unset.
    fn on_duplicate_columns(&self) -> Option<&[UpdateColumn]>;

    #[doc(hidden)]
    fn on_duplicate_slot(&mut self) -> &mut Option<Vec<UpdateColumn>>;

    /// Sets the columns to update when a row collides with an existing key.
    ///
    /// Entries render in the given order. Duplicates are kept.
    #[must_use]
    fn on_duplicate_key_update<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<UpdateColumn>,
    {
        *self.on_duplicate_slot() = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the update list from a JSON array such as
    /// `["age", {"counter": "counter + 1"}]`.
    ///
    /// A value that is not an array clears the clause.
    #[must_use]
    fn on_duplicate_key_update_json(mut self, value: &Value) -> Self {
        *self.on_duplicate_slot() = value
            .as_array()
            .map(|items| items.iter().map(UpdateColumn::from).collect());
        self
    }
}

/// Renders `ON DUPLICATE KEY UPDATE a = VALUES(a), b = expr`.
#[must_use]
pub fn render_on_duplicate_key_update<S: HasOnDuplicateKeyUpdate>(
    stmt: &S,
    cx: &mut RenderContext,
) -> Option<String> {
    let assignments = stmt
        .on_duplicate_columns()?
        .iter()
        .filter_map(|entry| entry.render(cx))
        .collect::<Vec<_>>();

    if assignments.is_empty() {
        return None;
    }
    Some(format!("ON DUPLICATE KEY UPDATE {}", assignments.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_sql_core::GrammarConfig;
    use serde_json::json;

    #[derive(Default)]
    struct Upsert(Option<Vec<UpdateColumn>>);

    impl HasOnDuplicateKeyUpdate for Upsert {
        fn on_duplicate_columns(&self) -> Option<&[UpdateColumn]> {
            self.0.as_deref()
        }

        fn on_duplicate_slot(&mut self) -> &mut Option<Vec<UpdateColumn>> {
            &mut self.0
        }
    }

    fn render(upsert: &Upsert) -> Option<String> {
        let config = GrammarConfig::default().with_auto_quote_char(Some('`'));
        render_on_duplicate_key_update(upsert, &mut RenderContext::inline(config))
    }

    #[test]
    fn test_plain_columns() {
        let upsert = Upsert::default().on_duplicate_key_update(["age", "grade"]);
        assert_eq!(
            render(&upsert).as_deref(),
            Some("ON DUPLICATE KEY UPDATE age = VALUES(age), grade = VALUES(grade)")
        );
    }

    #[test]
    fn test_mixed_columns_and_expressions() {
        let upsert = Upsert::default().on_duplicate_key_update([
            UpdateColumn::values("age"),
            UpdateColumn::from(("counter", "counter + 1")),
        ]);
        assert_eq!(
            render(&upsert).as_deref(),
            Some("ON DUPLICATE KEY UPDATE age = VALUES(age), counter = counter + 1")
        );
    }

    #[test]
    fn test_reserved_column_quoted_in_both_positions() {
        let upsert = Upsert::default().on_duplicate_key_update(["order"]);
        assert_eq!(
            render(&upsert).as_deref(),
            Some("ON DUPLICATE KEY UPDATE `order` = VALUES(`order`)")
        );
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let upsert = Upsert::default().on_duplicate_key_update(["age", "grade", "age"]);
        assert_eq!(
            render(&upsert).as_deref(),
            Some("ON DUPLICATE KEY UPDATE age = VALUES(age), grade = VALUES(grade), age = VALUES(age)")
        );
    }

    #[test]
    fn test_map_entries() {
        let mut one = BTreeMap::new();
        one.insert(String::from("counter"), String::from("counter + 1"));
        assert_eq!(
            UpdateColumn::from(one),
            UpdateColumn::assign("counter", "counter + 1")
        );

        let mut two = HashMap::new();
        two.insert(String::from("a"), String::from("1"));
        two.insert(String::from("b"), String::from("2"));
        assert_eq!(UpdateColumn::from(two), UpdateColumn::Skip);
        assert_eq!(
            UpdateColumn::from(BTreeMap::<String, String>::new()),
            UpdateColumn::Skip
        );
    }

    #[test]
    fn test_json_entries() {
        assert_eq!(UpdateColumn::from(&json!("age")), UpdateColumn::values("age"));
        assert_eq!(
            UpdateColumn::from(&json!({"counter": "counter + 1"})),
            UpdateColumn::assign("counter", "counter + 1")
        );
        assert_eq!(
            UpdateColumn::from(&json!({"counter": 0})),
            UpdateColumn::assign("counter", "0")
        );
        assert_eq!(UpdateColumn::from(&json!({"a": "1", "b": "2"})), UpdateColumn::Skip);
        assert_eq!(UpdateColumn::from(&json!({"a": "1", "b": null})), UpdateColumn::Skip);
        assert_eq!(UpdateColumn::from(&json!({"a": [1]})), UpdateColumn::Skip);
        assert_eq!(UpdateColumn::from(&json!(42)), UpdateColumn::Skip);
        assert_eq!(UpdateColumn::from(&json!(null)), UpdateColumn::Skip);
    }

    #[test]
    fn test_json_list() {
        let upsert = Upsert::default()
            .on_duplicate_key_update_json(&json!(["age", {"counter": "counter + 1"}, 7]));
        assert_eq!(
            render(&upsert).as_deref(),
            Some("ON DUPLICATE KEY UPDATE age = VALUES(age), counter = counter + 1")
        );
    }

    #[test]
    fn test_absent_forms() {
        assert_eq!(render(&Upsert::default()), None);
        assert_eq!(
            render(&Upsert::default().on_duplicate_key_update(Vec::<String>::new())),
            None
        );
        assert_eq!(
            render(&Upsert::default().on_duplicate_key_update([UpdateColumn::Skip])),
            None
        );
        assert_eq!(
            render(&Upsert::default().on_duplicate_key_update_json(&json!("age"))),
            None
        );
        assert_eq!(
            render(
                &Upsert::default()
                    .on_duplicate_key_update(["age"])
                    .on_duplicate_key_update_json(&json!({"age": "1"}))
            ),
            None
        );
    }
}
