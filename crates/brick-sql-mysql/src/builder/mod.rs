//! MySQL statement builders.
//!
//! Each builder wraps the corresponding base builder, forwards its methods
//! and adds the state of the MySQL clauses it supports. Rendering goes
//! through the registries of the [`MySqlBricks`](crate::MySqlBricks) the
//! builder was created from.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::MySqlDelete;
pub use insert::MySqlInsert;
pub use select::MySqlSelect;
pub use update::MySqlUpdate;

/// Shared plumbing for the wrapper builders: construction, `AsRef` to the
/// base builder, `Display` and parameterized rendering.
macro_rules! wrapper {
    ($ty:ident wraps $base:ty) => {
        impl $ty {
            pub(crate) fn new(base: $base, bricks: $crate::MySqlBricks) -> Self {
                Self {
                    base,
                    state: Default::default(),
                    bricks,
                }
            }

            fn map_base(mut self, f: impl FnOnce($base) -> $base) -> Self {
                self.base = f(self.base);
                self
            }

            /// Returns the wrapped base builder.
            #[must_use]
            pub const fn base(&self) -> &$base {
                &self.base
            }

            /// Renders the statement with placeholders and returns the
            /// parameters in placeholder order.
            #[must_use]
            pub fn to_params(&self) -> (String, Vec<brick_sql_core::SqlValue>) {
                self.bricks.to_params(self)
            }
        }

        impl AsRef<$base> for $ty {
            fn as_ref(&self) -> &$base {
                &self.base
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.bricks.to_sql(self))
            }
        }
    };
}

pub(crate) use wrapper;
