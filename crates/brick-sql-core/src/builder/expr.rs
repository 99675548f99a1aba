//! Expression trees for WHERE and HAVING.
//!
//! Expressions are kept as a tree until render time so that values can be
//! either inlined or parameterized and column names go through identifier
//! handling.

use super::value::{SqlValue, ToSqlValue};
use crate::render::RenderContext;

/// Rendered in place of an empty `AND` group or `NOT IN ()` list.
const TRUE: &str = "1 = 1";
/// Rendered in place of an empty `OR` group or `IN ()` list.
const FALSE: &str = "1 = 0";

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column {
        table: None,
        name: String::from(name),
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Optional table qualifier.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

macro_rules! comparisons {
    ($($(#[$doc:meta])* $method:ident => $op:literal;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method<T: ToSqlValue>(self, value: T) -> Expr {
                Expr::Compare {
                    column: self,
                    op: $op,
                    value: value.to_sql_value(),
                }
            }
        )*
    };
}

impl Column {
    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: &str, name: &str) -> Self {
        Self {
            table: Some(String::from(table)),
            name: String::from(name),
        }
    }

    fn render(&self, cx: &RenderContext) -> String {
        cx.qualified_column(&self.name, self.table.as_deref())
    }

    comparisons! {
        /// `column = value`
        eq => "=";
        /// `column != value`
        not_eq => "!=";
        /// `column < value`
        lt => "<";
        /// `column <= value`
        lt_eq => "<=";
        /// `column > value`
        gt => ">";
        /// `column >= value`
        gt_eq => ">=";
        /// `column LIKE pattern`
        like => "LIKE";
        /// `column NOT LIKE pattern`
        not_like => "NOT LIKE";
    }

    /// `column IS NULL`
    #[must_use]
    pub const fn is_null(self) -> Expr {
        Expr::Postfix {
            column: self,
            op: "IS NULL",
        }
    }

    /// `column IS NOT NULL`
    #[must_use]
    pub const fn is_not_null(self) -> Expr {
        Expr::Postfix {
            column: self,
            op: "IS NOT NULL",
        }
    }

    /// `column BETWEEN low AND high`
    #[must_use]
    pub fn between<T: ToSqlValue, U: ToSqlValue>(self, low: T, high: U) -> Expr {
        Expr::Between {
            column: self,
            low: low.to_sql_value(),
            high: high.to_sql_value(),
            negated: false,
        }
    }

    /// `column NOT BETWEEN low AND high`
    #[must_use]
    pub fn not_between<T: ToSqlValue, U: ToSqlValue>(self, low: T, high: U) -> Expr {
        Expr::Between {
            column: self,
            low: low.to_sql_value(),
            high: high.to_sql_value(),
            negated: true,
        }
    }

    /// `column IN (values)`
    #[must_use]
    pub fn in_list<I, T>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        Expr::InList {
            column: self,
            values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
            negated: false,
        }
    }

    /// `column NOT IN (values)`
    #[must_use]
    pub fn not_in_list<I, T>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        Expr::InList {
            column: self,
            values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
            negated: true,
        }
    }
}

/// A boolean SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `column <op> value`
    Compare {
        /// Left-hand column.
        column: Column,
        /// Comparison operator.
        op: &'static str,
        /// Right-hand value.
        value: SqlValue,
    },
    /// `column IS [NOT] NULL`
    Postfix {
        /// Operand.
        column: Column,
        /// Postfix operator.
        op: &'static str,
    },
    /// `column [NOT] BETWEEN low AND high`
    Between {
        /// Operand.
        column: Column,
        /// Lower bound.
        low: SqlValue,
        /// Upper bound.
        high: SqlValue,
        /// `NOT BETWEEN` when set.
        negated: bool,
    },
    /// `column [NOT] IN (values)`
    InList {
        /// Operand.
        column: Column,
        /// Candidate values.
        values: Vec<SqlValue>,
        /// `NOT IN` when set.
        negated: bool,
    },
    /// Conjunction.
    And(Vec<Self>),
    /// Disjunction.
    Or(Vec<Self>),
    /// Negation.
    Not(Box<Self>),
    /// Raw SQL, emitted verbatim.
    Raw(String),
}

impl Expr {
    /// Creates a raw SQL expression.
    ///
    /// **Warning**: the text is emitted as-is. Only use it for SQL that
    /// does not contain user input.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Combines with another expression using AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut items) => {
                items.push(other);
                Self::And(items)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Combines with another expression using OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut items) => {
                items.push(other);
                Self::Or(items)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Negates the expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Renders the expression, inlining or collecting values per `cx`.
    pub fn render(&self, cx: &mut RenderContext) -> String {
        match self {
            Self::Compare { column, op, value } => {
                let column = column.render(cx);
                format!("{column} {op} {}", cx.value(value))
            }
            Self::Postfix { column, op } => format!("{} {op}", column.render(cx)),
            Self::Between {
                column,
                low,
                high,
                negated,
            } => {
                let keyword = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                let column = column.render(cx);
                let low = cx.value(low);
                let high = cx.value(high);
                format!("{column} {keyword} {low} AND {high}")
            }
            Self::InList {
                column,
                values,
                negated,
            } => {
                if values.is_empty() {
                    return String::from(if *negated { TRUE } else { FALSE });
                }
                let keyword = if *negated { "NOT IN" } else { "IN" };
                let column = column.render(cx);
                let items: Vec<String> = values.iter().map(|v| cx.value(v)).collect();
                format!("{column} {keyword} ({})", items.join(", "))
            }
            Self::And(items) if items.is_empty() => String::from(TRUE),
            Self::Or(items) if items.is_empty() => String::from(FALSE),
            Self::And(items) => Self::render_group(items, " AND ", cx),
            Self::Or(items) => Self::render_group(items, " OR ", cx),
            Self::Not(inner) => format!("NOT {}", inner.render_nested(cx)),
            Self::Raw(sql) => sql.clone(),
        }
    }

    fn render_group(items: &[Self], separator: &str, cx: &mut RenderContext) -> String {
        items
            .iter()
            .map(|item| item.render_nested(cx))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn render_nested(&self, cx: &mut RenderContext) -> String {
        match self {
            Self::And(items) | Self::Or(items) if items.len() > 1 => {
                format!("({})", self.render(cx))
            }
            _ => self.render(cx),
        }
    }
}
