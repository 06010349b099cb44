//! Error types for cost model construction.

use thiserror::Error;

use crate::cost::EditOp;

/// Errors that can occur while building a [`CostModel`](crate::cost::CostModel).
///
/// All validation happens at construction time, so a successfully built
/// model can never fail during a distance computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostModelError {
    /// A supplied cost is negative or non-finite.
    ///
    /// Costs must be finite and >= 0. A negative weight breaks the
    /// optimality argument of the dynamic-programming recurrence, and a
    /// NaN weight poisons `min` comparisons, so both are rejected here
    /// rather than clamped or deferred into the table fill.
    #[error("invalid {op} cost {cost}: costs must be finite and non-negative")]
    InvalidCost {
        /// The edit operation the cost was supplied for.
        op: EditOp,
        /// The offending cost value.
        cost: f64,
    },

    /// The fallback cost itself is negative or non-finite.
    ///
    /// The default applies to every operation without an exact entry, so
    /// it is validated under the same rule as per-token costs.
    #[error("invalid default cost {cost}: costs must be finite and non-negative")]
    InvalidDefaultCost {
        /// The offending cost value.
        cost: f64,
    },
}

/// A specialized `Result` type for cost model construction.
pub type Result<T> = std::result::Result<T, CostModelError>;
