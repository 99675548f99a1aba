//! The MySQL grammar: base registries extended with the MySQL clauses.

use std::sync::{Arc, OnceLock};

use brick_sql_core::builder::{self, Delete, Insert, Select, Update};
use brick_sql_core::clause::{self, ClauseRegistry};
use brick_sql_core::{GrammarConfig, RenderContext, Result, SqlValue, Statement};
use tracing::debug;

use crate::builder::{MySqlDelete, MySqlInsert, MySqlSelect, MySqlUpdate};
use crate::clauses::{
    render_ignore, render_limit, render_offset, render_on_duplicate_key_update, render_order_by,
    IGNORE, LIMIT, OFFSET, ON_DUPLICATE_KEY_UPDATE, ORDER_BY,
};
use crate::dialect::MySqlDialect;

/// The four extended clause registries, one per statement kind.
#[derive(Debug, Clone)]
pub struct Registries {
    select: ClauseRegistry<MySqlSelect>,
    insert: ClauseRegistry<MySqlInsert>,
    update: ClauseRegistry<MySqlUpdate>,
    delete: ClauseRegistry<MySqlDelete>,
}

impl Registries {
    fn build() -> Result<Self> {
        let mut select = Select::clauses().lift::<MySqlSelect>();
        select.insert_after(LIMIT, clause::ORDER_BY, render_limit::<MySqlSelect>)?;
        select.insert_after(OFFSET, LIMIT, render_offset::<MySqlSelect>)?;

        let mut insert = Insert::clauses().lift::<MySqlInsert>();
        insert.insert_after(IGNORE, clause::INSERT, render_ignore::<MySqlInsert>)?;
        insert.insert_after(
            ON_DUPLICATE_KEY_UPDATE,
            clause::VALUES,
            render_on_duplicate_key_update::<MySqlInsert>,
        )?;

        let mut update = Update::clauses().lift::<MySqlUpdate>();
        update.insert_after(ORDER_BY, clause::WHERE, render_order_by::<MySqlUpdate>)?;
        update.insert_after(LIMIT, ORDER_BY, render_limit::<MySqlUpdate>)?;

        let mut delete = Delete::clauses().lift::<MySqlDelete>();
        delete.insert_after(ORDER_BY, clause::WHERE, render_order_by::<MySqlDelete>)?;
        delete.insert_after(LIMIT, ORDER_BY, render_limit::<MySqlDelete>)?;

        Ok(Self {
            select,
            insert,
            update,
            delete,
        })
    }
}

/// A statement type rendered through one of the MySQL registries.
pub trait MySqlStatement: Sized + 'static {
    #[doc(hidden)]
    fn registry(registries: &Registries) -> &ClauseRegistry<Self>;

    #[doc(hidden)]
    fn registry_mut(registries: &mut Registries) -> &mut ClauseRegistry<Self>;
}

macro_rules! mysql_statement {
    ($ty:ty => $field:ident) => {
        impl MySqlStatement for $ty {
            fn registry(registries: &Registries) -> &ClauseRegistry<Self> {
                &registries.$field
            }

            fn registry_mut(registries: &mut Registries) -> &mut ClauseRegistry<Self> {
                &mut registries.$field
            }
        }
    };
}

mysql_statement!(MySqlSelect => select);
mysql_statement!(MySqlInsert => insert);
mysql_statement!(MySqlUpdate => update);
mysql_statement!(MySqlDelete => delete);

/// MySQL grammar configuration: the quoting rules plus the clause
/// registries every builder created from it renders with.
///
/// Cloning is cheap. Builders keep the registries they were created with,
/// so clauses registered later only affect builders created afterwards.
///
/// # Example
///
/// ```rust
/// use brick_sql_mysql::prelude::*;
///
/// let bricks = MySqlBricks::new()?;
/// let sql = bricks.select().columns(["name"]).from("users").limit(10).to_string();
/// assert_eq!(sql, "SELECT name FROM users LIMIT 10");
/// # Ok::<(), brick_sql_core::GrammarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MySqlBricks {
    config: GrammarConfig,
    registries: Arc<Registries>,
}

impl MySqlBricks {
    /// Builds the MySQL grammar with backtick quoting.
    ///
    /// # Errors
    ///
    /// Returns an error if a MySQL clause cannot be anchored in the base
    /// grammar.
    pub fn new() -> Result<Self> {
        Self::with_config(GrammarConfig::for_dialect(&MySqlDialect::new()))
    }

    /// Builds the MySQL grammar with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a MySQL clause cannot be anchored in the base
    /// grammar.
    pub fn with_config(config: GrammarConfig) -> Result<Self> {
        let registries = Registries::build()?;
        debug!(
            quote = ?config.auto_quote_char,
            placeholder = ?config.placeholder,
            "built MySQL clause registries"
        );
        Ok(Self {
            config,
            registries: Arc::new(registries),
        })
    }

    /// Returns the process-wide default grammar, built on first use.
    ///
    /// # Errors
    ///
    /// Returns the error [`MySqlBricks::new`] produced, if any.
    pub fn shared() -> Result<&'static Self> {
        static SHARED: OnceLock<Result<MySqlBricks>> = OnceLock::new();
        SHARED.get_or_init(Self::new).as_ref().map_err(Clone::clone)
    }

    /// Returns the grammar configuration.
    #[must_use]
    pub const fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Returns the clause registry for statement type `S`.
    #[must_use]
    pub fn registry<S: MySqlStatement>(&self) -> &ClauseRegistry<S> {
        S::registry(&self.registries)
    }

    /// Registers an extra clause for statement type `S`, right after
    /// `anchor`. Registering an existing name moves and replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if `anchor` is unknown for `S` or equals `name`.
    pub fn register<S, F>(&mut self, name: &str, anchor: &str, renderer: F) -> Result<()>
    where
        S: MySqlStatement,
        F: Fn(&S, &mut RenderContext) -> Option<String> + Send + Sync + 'static,
    {
        S::registry_mut(Arc::make_mut(&mut self.registries)).insert_after(name, anchor, renderer)
    }

    /// Creates a SELECT builder selecting `*` until columns are set.
    #[must_use]
    pub fn select(&self) -> MySqlSelect {
        MySqlSelect::new(builder::select(), self.clone())
    }

    /// Creates an INSERT builder for `table` and `cols`.
    #[must_use]
    pub fn insert<I, C>(&self, table: &str, cols: I) -> MySqlInsert
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        MySqlInsert::new(builder::insert(table, cols), self.clone())
    }

    /// Creates an UPDATE builder for `table`.
    #[must_use]
    pub fn update(&self, table: &str) -> MySqlUpdate {
        MySqlUpdate::new(builder::update(table), self.clone())
    }

    /// Creates a DELETE builder for `table`.
    #[must_use]
    pub fn delete(&self, table: &str) -> MySqlDelete {
        MySqlDelete::new(builder::delete(table), self.clone())
    }

    pub(crate) fn to_sql<S: MySqlStatement>(&self, stmt: &S) -> String {
        self.registry::<S>().to_sql(stmt, self.config)
    }

    pub(crate) fn to_params<S: MySqlStatement>(&self, stmt: &S) -> (String, Vec<SqlValue>) {
        self.registry::<S>().to_params(stmt, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_clause_order() {
        let bricks = MySqlBricks::new().unwrap();
        let names: Vec<_> = bricks.registry::<MySqlSelect>().names().collect();
        assert_eq!(
            names,
            ["select", "from", "join", "where", "group_by", "having", "order_by", "limit", "offset"]
        );
    }

    #[test]
    fn test_insert_clause_order() {
        let bricks = MySqlBricks::new().unwrap();
        let names: Vec<_> = bricks.registry::<MySqlInsert>().names().collect();
        assert_eq!(
            names,
            ["insert", "ignore", "into", "values", "on_duplicate_key_update"]
        );
    }

    #[test]
    fn test_update_and_delete_clause_order() {
        let bricks = MySqlBricks::new().unwrap();
        let update: Vec<_> = bricks.registry::<MySqlUpdate>().names().collect();
        let delete: Vec<_> = bricks.registry::<MySqlDelete>().names().collect();
        assert_eq!(update, ["update", "set", "where", "order_by", "limit"]);
        assert_eq!(delete, ["delete", "where", "order_by", "limit"]);
    }

    #[test]
    fn test_shared_is_built_once() {
        let a = MySqlBricks::shared().unwrap();
        let b = MySqlBricks::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.config().auto_quote_char, Some('`'));
    }

    #[test]
    fn test_register_is_copy_on_write() {
        let mut bricks = MySqlBricks::new().unwrap();
        let before = bricks.clone();
        bricks
            .register::<MySqlSelect, _>("lock", OFFSET, |_, _| Some(String::from("FOR UPDATE")))
            .unwrap();

        assert!(bricks.registry::<MySqlSelect>().contains("lock"));
        assert!(!before.registry::<MySqlSelect>().contains("lock"));
    }
}
