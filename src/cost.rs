//! Per-token and per-pair operation costs.
//!
//! A [`CostModel`] maps each elementary edit operation to a weight for a
//! specific token (insert, delete) or ordered token pair (substitute,
//! transpose). Every lookup is two-tier: the exact table entry if present,
//! otherwise the model's explicit [`default_cost`](CostModel::default_cost).
//! Models are immutable once built, so a single instance can be shared
//! across threads and across distance calls.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{CostModelError, Result};

/// Cost applied when no table entry exists for a token or token pair.
///
/// This is the default for all four operations, transposition included.
pub const DEFAULT_COST: f64 = 1.0;

/// The four elementary edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Insert a token into the target sequence.
    Insert,
    /// Delete a token from the source sequence.
    Delete,
    /// Replace one token with another.
    Substitute,
    /// Swap a pair of tokens.
    Transpose,
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOp::Insert => "insert",
            EditOp::Delete => "delete",
            EditOp::Substitute => "substitute",
            EditOp::Transpose => "transpose",
        };
        f.write_str(name)
    }
}

/// Caller-supplied weights for each elementary edit operation.
///
/// Pair lookups are strictly directional: [`substitute_cost`] consults only
/// the `(from, to)` entry and never falls back to `(to, from)`, and
/// [`transpose_cost`] likewise keys on the pair in source order. Callers
/// wanting symmetric costs must supply both orderings.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::CostModel;
/// use weighted_levenshtein::distance::levenshtein;
///
/// let costs = CostModel::builder()
///     .substitute_cost('n', 'm', 0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(levenshtein(&['n'], &['m'], &costs), 0.5);
/// assert_eq!(levenshtein(&['m'], &['n'], &costs), 1.0); // no symmetry fallback
/// ```
///
/// [`substitute_cost`]: CostModel::substitute_cost
/// [`transpose_cost`]: CostModel::transpose_cost
#[derive(Debug, Clone)]
pub struct CostModel<T> {
    insert: FxHashMap<T, f64>,
    delete: FxHashMap<T, f64>,
    // Nested maps so pair lookups borrow both keys instead of allocating
    // an owned (T, T) tuple per cell.
    substitute: FxHashMap<T, FxHashMap<T, f64>>,
    transpose: FxHashMap<T, FxHashMap<T, f64>>,
    default_cost: f64,
}

impl<T: Eq + Hash> CostModel<T> {
    /// Create a builder for a model with non-uniform weights.
    pub fn builder() -> CostModelBuilder<T> {
        CostModelBuilder::new()
    }

    /// Cost of inserting `token` into the target sequence.
    pub fn insert_cost(&self, token: &T) -> f64 {
        self.insert.get(token).copied().unwrap_or(self.default_cost)
    }

    /// Cost of deleting `token` from the source sequence.
    pub fn delete_cost(&self, token: &T) -> f64 {
        self.delete.get(token).copied().unwrap_or(self.default_cost)
    }

    /// Cost of replacing `from` with `to`.
    ///
    /// Only the `(from, to)` entry is consulted; the reversed pair is
    /// never used as a fallback.
    pub fn substitute_cost(&self, from: &T, to: &T) -> f64 {
        self.substitute
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(self.default_cost)
    }

    /// Cost of swapping the adjacent-in-effect pair `(first, second)`,
    /// keyed in source-sequence order.
    ///
    /// Only consulted by the OSA and Damerau-Levenshtein variants. The
    /// fallback is [`default_cost`](Self::default_cost) (1.0 unless
    /// overridden), the same as the other three operations.
    pub fn transpose_cost(&self, first: &T, second: &T) -> f64 {
        self.transpose
            .get(first)
            .and_then(|row| row.get(second))
            .copied()
            .unwrap_or(self.default_cost)
    }

    /// The cost applied when no exact table entry exists.
    pub fn default_cost(&self) -> f64 {
        self.default_cost
    }
}

/// The uniform unit-cost model: every operation costs exactly 1.0.
impl<T: Eq + Hash> Default for CostModel<T> {
    fn default() -> Self {
        CostModel {
            insert: FxHashMap::default(),
            delete: FxHashMap::default(),
            substitute: FxHashMap::default(),
            transpose: FxHashMap::default(),
            default_cost: DEFAULT_COST,
        }
    }
}

/// Builder for constructing a [`CostModel`] with a fluent API.
///
/// Costs are validated in [`build`](Self::build): every supplied weight,
/// including the default, must be finite and non-negative.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::CostModel;
///
/// let costs = CostModel::builder()
///     .insert_cost('a', 5.0)
///     .delete_cost('a', 1.0)
///     .substitute_cost('n', 'm', 0.25)
///     .transpose_cost('h', 't', 0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(costs.insert_cost(&'a'), 5.0);
/// assert_eq!(costs.insert_cost(&'b'), 1.0); // default
/// ```
#[derive(Debug, Clone)]
pub struct CostModelBuilder<T> {
    entries: Vec<Entry<T>>,
    default_cost: f64,
}

// Each entry carries its operation so build() can report which one an
// invalid weight was supplied for.
#[derive(Debug, Clone)]
enum Entry<T> {
    Insert(T, f64),
    Delete(T, f64),
    Substitute(T, T, f64),
    Transpose(T, T, f64),
}

impl<T> Entry<T> {
    fn op_and_cost(&self) -> (EditOp, f64) {
        match self {
            Entry::Insert(_, cost) => (EditOp::Insert, *cost),
            Entry::Delete(_, cost) => (EditOp::Delete, *cost),
            Entry::Substitute(_, _, cost) => (EditOp::Substitute, *cost),
            Entry::Transpose(_, _, cost) => (EditOp::Transpose, *cost),
        }
    }
}

impl<T: Eq + Hash> CostModelBuilder<T> {
    /// Create a new builder with no entries and the unit default.
    pub fn new() -> Self {
        CostModelBuilder {
            entries: Vec::new(),
            default_cost: DEFAULT_COST,
        }
    }

    /// Set the cost of inserting `token`.
    pub fn insert_cost(mut self, token: T, cost: f64) -> Self {
        self.entries.push(Entry::Insert(token, cost));
        self
    }

    /// Set the cost of deleting `token`.
    pub fn delete_cost(mut self, token: T, cost: f64) -> Self {
        self.entries.push(Entry::Delete(token, cost));
        self
    }

    /// Set the cost of substituting `from` with `to` (directional).
    pub fn substitute_cost(mut self, from: T, to: T, cost: f64) -> Self {
        self.entries.push(Entry::Substitute(from, to, cost));
        self
    }

    /// Set the cost of transposing the pair `(first, second)`, keyed in
    /// source-sequence order.
    pub fn transpose_cost(mut self, first: T, second: T, cost: f64) -> Self {
        self.entries.push(Entry::Transpose(first, second, cost));
        self
    }

    /// Load insertion costs from an iterator of `(token, cost)` pairs.
    pub fn insert_costs(mut self, costs: impl IntoIterator<Item = (T, f64)>) -> Self {
        for (token, cost) in costs {
            self = self.insert_cost(token, cost);
        }
        self
    }

    /// Load deletion costs from an iterator of `(token, cost)` pairs.
    pub fn delete_costs(mut self, costs: impl IntoIterator<Item = (T, f64)>) -> Self {
        for (token, cost) in costs {
            self = self.delete_cost(token, cost);
        }
        self
    }

    /// Load substitution costs from an iterator of `(from, to, cost)` triples.
    pub fn substitute_costs(mut self, costs: impl IntoIterator<Item = (T, T, f64)>) -> Self {
        for (from, to, cost) in costs {
            self = self.substitute_cost(from, to, cost);
        }
        self
    }

    /// Load transposition costs from an iterator of `(first, second, cost)`
    /// triples.
    pub fn transpose_costs(mut self, costs: impl IntoIterator<Item = (T, T, f64)>) -> Self {
        for (first, second, cost) in costs {
            self = self.transpose_cost(first, second, cost);
        }
        self
    }

    /// Override the fallback cost applied when no exact entry exists.
    pub fn default_cost(mut self, cost: f64) -> Self {
        self.default_cost = cost;
        self
    }

    /// Build the [`CostModel`].
    ///
    /// # Errors
    ///
    /// Returns [`CostModelError::InvalidCost`] if any supplied cost,
    /// including the default, is negative or non-finite. Later entries for
    /// the same token or pair overwrite earlier ones.
    pub fn build(self) -> Result<CostModel<T>> {
        if !valid_cost(self.default_cost) {
            return Err(CostModelError::InvalidDefaultCost {
                cost: self.default_cost,
            });
        }

        let mut model = CostModel {
            insert: FxHashMap::default(),
            delete: FxHashMap::default(),
            substitute: FxHashMap::default(),
            transpose: FxHashMap::default(),
            default_cost: self.default_cost,
        };

        for entry in self.entries {
            let (op, cost) = entry.op_and_cost();
            if !valid_cost(cost) {
                return Err(CostModelError::InvalidCost { op, cost });
            }
            match entry {
                Entry::Insert(token, cost) => {
                    model.insert.insert(token, cost);
                }
                Entry::Delete(token, cost) => {
                    model.delete.insert(token, cost);
                }
                Entry::Substitute(from, to, cost) => {
                    model.substitute.entry(from).or_default().insert(to, cost);
                }
                Entry::Transpose(first, second, cost) => {
                    model.transpose.entry(first).or_default().insert(second, cost);
                }
            }
        }

        Ok(model)
    }
}

impl<T: Eq + Hash> Default for CostModelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}
