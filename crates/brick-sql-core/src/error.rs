//! Error types for grammar configuration.

use crate::statement::StatementKind;

/// Errors raised while configuring a clause registry.
///
/// Rendering never fails; these only surface when clauses are registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// The anchor clause does not exist in the registry.
    #[error("cannot place clause '{name}' after unknown clause '{anchor}' in {kind} statements")]
    UnknownAnchor {
        /// Statement kind owning the registry.
        kind: StatementKind,
        /// Clause being registered.
        name: String,
        /// Anchor that was not found.
        anchor: String,
    },

    /// A clause was asked to follow itself.
    #[error("clause '{name}' cannot be anchored to itself in {kind} statements")]
    SelfAnchor {
        /// Statement kind owning the registry.
        kind: StatementKind,
        /// Clause being registered.
        name: String,
    },
}

/// Result type for grammar configuration.
pub type Result<T> = std::result::Result<T, GrammarError>;
