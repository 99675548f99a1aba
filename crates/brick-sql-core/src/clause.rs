//! Named, ordered clause renderers.
//!
//! Every statement kind renders by walking a [`ClauseRegistry`]: an ordered
//! list of named renderers. Each renderer looks at the builder and returns a
//! fragment, or `None` to contribute nothing. The fragments that remain are
//! joined with a single space.
//!
//! Extensions place new clauses relative to a named anchor with
//! [`ClauseRegistry::insert_after`], so they never depend on absolute
//! positions in the base grammar.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::builder::value::SqlValue;
use crate::config::GrammarConfig;
use crate::error::{GrammarError, Result};
use crate::render::RenderContext;
use crate::statement::StatementKind;

/// `SELECT [DISTINCT] columns`
pub const SELECT: &str = "select";
/// `FROM tables`
pub const FROM: &str = "from";
/// `JOIN ...` (all joins)
pub const JOIN: &str = "join";
/// `WHERE expr`
pub const WHERE: &str = "where";
/// `GROUP BY columns`
pub const GROUP_BY: &str = "group_by";
/// `HAVING expr`
pub const HAVING: &str = "having";
/// `ORDER BY columns`
pub const ORDER_BY: &str = "order_by";
/// The bare `INSERT` keyword.
pub const INSERT: &str = "insert";
/// `INTO table (columns)`
pub const INTO: &str = "into";
/// `VALUES (...), (...)`
pub const VALUES: &str = "values";
/// `UPDATE table`
pub const UPDATE: &str = "update";
/// `SET assignments`
pub const SET: &str = "set";
/// `DELETE FROM table`
pub const DELETE: &str = "delete";

/// Signature shared by every clause renderer.
pub type RenderFn<S> = dyn Fn(&S, &mut RenderContext) -> Option<String> + Send + Sync;

fn shared<S, F>(renderer: F) -> Arc<RenderFn<S>>
where
    F: Fn(&S, &mut RenderContext) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(renderer)
}

/// A named clause renderer.
pub struct Clause<S> {
    name: String,
    renderer: Arc<RenderFn<S>>,
}

impl<S> Clause<S> {
    /// Returns the clause name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the clause for `stmt`.
    pub fn render(&self, stmt: &S, cx: &mut RenderContext) -> Option<String> {
        (self.renderer)(stmt, cx)
    }
}

impl<S> Clone for Clause<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<S> fmt::Debug for Clause<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clause").field(&self.name).finish()
    }
}

/// The ordered clause list of one statement kind.
pub struct ClauseRegistry<S> {
    kind: StatementKind,
    clauses: Vec<Clause<S>>,
}

impl<S> Clone for ClauseRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            clauses: self.clauses.clone(),
        }
    }
}

impl<S> fmt::Debug for ClauseRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseRegistry")
            .field("kind", &self.kind)
            .field("clauses", &self.clauses)
            .finish()
    }
}

impl<S: 'static> ClauseRegistry<S> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            clauses: Vec::new(),
        }
    }

    /// Returns the statement kind this registry renders.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Returns the number of clauses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if no clause is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the clause names in render order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.clauses.iter().map(Clause::name)
    }

    /// Returns `true` if a clause named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.clauses.iter().position(|c| c.name == name)
    }

    /// Appends a clause to the canonical order.
    ///
    /// Defining a name twice replaces the renderer and keeps the original
    /// position.
    #[must_use]
    pub fn define<F>(mut self, name: &str, renderer: F) -> Self
    where
        F: Fn(&S, &mut RenderContext) -> Option<String> + Send + Sync + 'static,
    {
        let renderer = shared(renderer);
        match self.position(name) {
            Some(i) => self.clauses[i].renderer = renderer,
            None => self.clauses.push(Clause {
                name: name.to_string(),
                renderer,
            }),
        }
        self
    }

    /// Inserts a clause immediately after the clause named `anchor`.
    ///
    /// Registering a name that already exists overwrites it: the old entry
    /// is removed and the new renderer is placed after `anchor`, so the
    /// clause is rendered once.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnknownAnchor`] if `anchor` is not
    /// registered, and [`GrammarError::SelfAnchor`] if `name == anchor`.
    pub fn insert_after<F>(&mut self, name: &str, anchor: &str, renderer: F) -> Result<()>
    where
        F: Fn(&S, &mut RenderContext) -> Option<String> + Send + Sync + 'static,
    {
        if name == anchor {
            return Err(GrammarError::SelfAnchor {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        if !self.contains(anchor) {
            return Err(GrammarError::UnknownAnchor {
                kind: self.kind,
                name: name.to_string(),
                anchor: anchor.to_string(),
            });
        }

        let replaced = self.position(name).map(|i| self.clauses.remove(i)).is_some();
        let at = self.position(anchor).map_or(self.clauses.len(), |i| i + 1);
        self.clauses.insert(
            at,
            Clause {
                name: name.to_string(),
                renderer: shared(renderer),
            },
        );

        debug!(
            kind = %self.kind,
            clause = name,
            after = anchor,
            replaced,
            "registered clause"
        );
        Ok(())
    }

    /// Re-targets this registry onto a type that wraps `S`.
    ///
    /// Each renderer reads the wrapped value through `AsRef`, so base
    /// clauses keep working unchanged on the wrapper.
    #[must_use]
    pub fn lift<T>(self) -> ClauseRegistry<T>
    where
        T: AsRef<S> + 'static,
    {
        ClauseRegistry {
            kind: self.kind,
            clauses: self
                .clauses
                .into_iter()
                .map(|clause| {
                    let inner = clause.renderer;
                    Clause {
                        name: clause.name,
                        renderer: shared(move |stmt: &T, cx: &mut RenderContext| {
                            (*inner)(stmt.as_ref(), cx)
                        }),
                    }
                })
                .collect(),
        }
    }

    /// Assembles `stmt`: renders every clause in order, drops absent or
    /// empty fragments and joins the rest with a single space.
    pub fn render(&self, stmt: &S, cx: &mut RenderContext) -> String {
        let sql = self
            .clauses
            .iter()
            .filter_map(|clause| clause.render(stmt, cx))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        trace!(kind = %self.kind, sql = %sql, "assembled statement");
        sql
    }

    /// Renders `stmt` with values inlined.
    #[must_use]
    pub fn to_sql(&self, stmt: &S, config: GrammarConfig) -> String {
        self.render(stmt, &mut RenderContext::inline(config))
    }

    /// Renders `stmt` with placeholders and returns the parameters.
    #[must_use]
    pub fn to_params(&self, stmt: &S, config: GrammarConfig) -> (String, Vec<SqlValue>) {
        let mut cx = RenderContext::parameterized(config);
        let sql = self.render(stmt, &mut cx);
        (sql, cx.into_params())
    }
}
