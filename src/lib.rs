//! # weighted-levenshtein
//!
//! Weighted edit distances between sequences of generic tokens.
//!
//! Three distance variants share one dynamic-programming substrate:
//!
//! - **Levenshtein**: insertions, deletions, substitutions
//! - **Optimal String Alignment**: plus adjacent-pair transposition, with
//!   each substring transposed at most once
//! - **Damerau-Levenshtein**: transposition even across intervening edits
//!
//! Each elementary operation may carry a per-token (insert, delete) or
//! per-pair (substitute, transpose) cost supplied through a [`CostModel`],
//! falling back to an explicit default of 1.0. Tokens are any `Eq + Hash`
//! type, so the same engine covers chars, integers, words, or
//! user-defined symbols.
//!
//! ## Example
//!
//! ```rust
//! use weighted_levenshtein::prelude::*;
//!
//! // Unit costs via the string convenience API.
//! assert_eq!(levenshtein_str("kitten", "sitting"), 3.0);
//!
//! // Mistaking 'n' for 'm' is cheap; everything else costs 1.
//! let costs = CostModel::builder()
//!     .substitute_cost('n', 'm', 0.25)
//!     .build()
//!     .unwrap();
//! let a: Vec<char> = "nap".chars().collect();
//! let b: Vec<char> = "map".chars().collect();
//! assert_eq!(levenshtein(&a, &b, &costs), 0.25);
//! ```
//!
//! [`CostModel`]: cost::CostModel

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cost;
pub mod distance;
pub mod error;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cost::{CostModel, CostModelBuilder, EditOp, DEFAULT_COST};
    pub use crate::distance::{
        damerau_levenshtein, damerau_levenshtein_str, levenshtein, levenshtein_str,
        optimal_string_alignment, optimal_string_alignment_str,
    };
    pub use crate::error::CostModelError;
}
