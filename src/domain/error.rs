//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors cover user-supplied keys that do not name anything in the diagram.
/// The diagram algorithms themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown view: {0} (expected main, giants, dwarfs, all or evolution)")]
    UnknownView(String),

    #[error("unknown star category: {0} (expected all, main, giant, supergiant or dwarf)")]
    UnknownCategory(String),

    #[error("unknown sort key: {0} (expected name, temp, lum or type)")]
    UnknownSortKey(String),

    #[error("unknown sort direction: {0} (expected asc or desc)")]
    UnknownSortDirection(String),
}
