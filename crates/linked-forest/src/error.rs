use thiserror::Error;

/// Errors surfaced by the tree containers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The element cannot be placed in a total order.
    ///
    /// Only reachable through the `PartialOrd`-backed default comparator,
    /// e.g. when inserting a `f64` NaN. Custom comparators are total by
    /// contract and never produce this.
    #[error("element is not comparable")]
    NonComparable,

    /// The target element is not present in the tree.
    #[error("element not found")]
    NotFound,

    /// The operation requires a non-empty tree.
    #[error("empty collection")]
    Empty,
}
