//! MySQL extension clauses.
//!
//! Each clause comes as a capability trait holding its fluent setter, plus
//! a renderer generic over that trait. A statement type opts into a clause
//! by implementing the trait; the renderer is registered once per statement
//! kind, relative to an anchor clause of the base grammar.

mod ignore;
mod limit;
mod order_by;
mod upsert;

pub use ignore::{render_ignore, HasIgnore};
pub use limit::{render_limit, render_offset, HasLimit, HasOffset};
pub use order_by::{render_order_by, HasOrderBy};
pub use upsert::{render_on_duplicate_key_update, HasOnDuplicateKeyUpdate, UpdateColumn};

/// `ORDER BY` on UPDATE and DELETE. Same name as the SELECT clause.
pub const ORDER_BY: &str = brick_sql_core::clause::ORDER_BY;
/// `LIMIT n`
pub const LIMIT: &str = "limit";
/// `OFFSET n`
pub const OFFSET: &str = "offset";
/// `IGNORE` between `INSERT` and `INTO`.
pub const IGNORE: &str = "ignore";
/// `ON DUPLICATE KEY UPDATE ...`
pub const ON_DUPLICATE_KEY_UPDATE: &str = "on_duplicate_key_update";
