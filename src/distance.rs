//! Weighted distance computations.
//!
//! This module provides the three dynamic-programming distance variants
//! over slices of generic tokens:
//!
//! - [`levenshtein`]: insert, delete, substitute
//! - [`optimal_string_alignment`]: Levenshtein plus adjacent-pair
//!   transposition, each pair transposed at most once
//! - [`damerau_levenshtein`]: unrestricted transposition, allowing edits
//!   between the two swapped tokens
//!
//! Every operation is priced through a [`CostModel`]; `*_str` convenience
//! wrappers cover the common char-token case with uniform unit costs.
//! Each call allocates its own table and holds no state afterwards, so
//! the functions are safe to invoke concurrently with a shared model.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cost::CostModel;

/// Compute the weighted Levenshtein distance between two token slices.
///
/// The result is the minimal total cost of insertions, deletions, and
/// substitutions transforming `a` into `b`. Matching tokens always cost 0,
/// regardless of any `(t, t)` substitution entry in the model.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::CostModel;
/// use weighted_levenshtein::distance::levenshtein;
///
/// let unit = CostModel::default();
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&a, &b, &unit), 3.0);
/// ```
pub fn levenshtein<T: Eq + Hash>(a: &[T], b: &[T], costs: &CostModel<T>) -> f64 {
    let m = a.len();
    let n = b.len();

    // Insertion costs are reused once per row; resolve them up front.
    let ins: Vec<f64> = b.iter().map(|t| costs.insert_cost(t)).collect();

    // Space-optimized fill, two rows instead of the full matrix.
    let mut prev_row = Vec::with_capacity(n + 1);
    prev_row.push(0.0);
    for j in 1..=n {
        prev_row.push(prev_row[j - 1] + ins[j - 1]);
    }
    let mut curr_row = vec![0.0; n + 1];

    for i in 1..=m {
        let del = costs.delete_cost(&a[i - 1]);
        curr_row[0] = prev_row[0] + del;

        for j in 1..=n {
            let sub = if a[i - 1] == b[j - 1] {
                0.0
            } else {
                costs.substitute_cost(&a[i - 1], &b[j - 1])
            };

            curr_row[j] = (prev_row[j] + del) // deletion
                .min(curr_row[j - 1] + ins[j - 1]) // insertion
                .min(prev_row[j - 1] + sub); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the weighted Optimal String Alignment distance.
///
/// Extends [`levenshtein`] with transposition of adjacent tokens, under
/// the OSA restriction that no substring is transposed more than once.
/// The restriction is structural: the transposition candidate only ever
/// reaches back to the cell two rows and two columns up, so no extra
/// bookkeeping is needed.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::CostModel;
/// use weighted_levenshtein::distance::optimal_string_alignment;
///
/// let unit = CostModel::default();
/// assert_eq!(optimal_string_alignment(&['a', 'b'], &['b', 'a'], &unit), 1.0);
/// ```
pub fn optimal_string_alignment<T: Eq + Hash>(a: &[T], b: &[T], costs: &CostModel<T>) -> f64 {
    let m = a.len();
    let n = b.len();

    let ins: Vec<f64> = b.iter().map(|t| costs.insert_cost(t)).collect();

    // Three rows: the transposition candidate reads two rows back.
    let mut two_ago = vec![0.0; n + 1];
    let mut prev_row = Vec::with_capacity(n + 1);
    prev_row.push(0.0);
    for j in 1..=n {
        prev_row.push(prev_row[j - 1] + ins[j - 1]);
    }
    let mut curr_row = vec![0.0; n + 1];

    for i in 1..=m {
        let del = costs.delete_cost(&a[i - 1]);
        curr_row[0] = prev_row[0] + del;

        for j in 1..=n {
            let sub = if a[i - 1] == b[j - 1] {
                0.0
            } else {
                costs.substitute_cost(&a[i - 1], &b[j - 1])
            };

            curr_row[j] = (prev_row[j] + del)
                .min(curr_row[j - 1] + ins[j - 1])
                .min(prev_row[j - 1] + sub);

            // Adjacent-pair transposition.
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                let swap = two_ago[j - 2] + costs.transpose_cost(&a[i - 2], &a[i - 1]);
                curr_row[j] = curr_row[j].min(swap);
            }
        }

        // Rotate rows
        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the weighted Damerau-Levenshtein distance.
///
/// Unlike [`optimal_string_alignment`], a transposed pair may have other
/// edits applied to the tokens between its two occurrences. The candidate
/// at each cell reaches back to the last row where the current target
/// token appeared in `a` and the last column in this row where the current
/// source token matched in `b`; the tokens strictly between the pair are
/// deleted from `a` and inserted from `b`, each priced through the model.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::cost::CostModel;
/// use weighted_levenshtein::distance::{damerau_levenshtein, optimal_string_alignment};
///
/// let unit = CostModel::default();
/// let a: Vec<char> = "ca".chars().collect();
/// let b: Vec<char> = "abc".chars().collect();
/// // The c/a swap survives the intervening insertion of 'b'.
/// assert_eq!(damerau_levenshtein(&a, &b, &unit), 2.0);
/// assert_eq!(optimal_string_alignment(&a, &b, &unit), 3.0);
/// ```
pub fn damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T], costs: &CostModel<T>) -> f64 {
    let m = a.len();
    let n = b.len();

    // Prefix sums of per-token costs: del_prefix[i] is the cost of
    // deleting a[..i], ins_prefix[j] of inserting b[..j]. They seed the
    // matrix border and price the tokens between a transposed pair.
    let mut del_prefix = Vec::with_capacity(m + 1);
    del_prefix.push(0.0);
    for (i, t) in a.iter().enumerate() {
        del_prefix.push(del_prefix[i] + costs.delete_cost(t));
    }
    let mut ins_prefix = Vec::with_capacity(n + 1);
    ins_prefix.push(0.0);
    for (j, t) in b.iter().enumerate() {
        ins_prefix.push(ins_prefix[j] + costs.insert_cost(t));
    }

    // The transposition candidate reaches arbitrarily far back, so the
    // full matrix is kept, row-major.
    let w = n + 1;
    let mut d = vec![0.0; (m + 1) * w];
    for i in 0..=m {
        d[i * w] = del_prefix[i];
    }
    d[..=n].copy_from_slice(&ins_prefix);

    // Last row where each token value occurred in `a`, 0 = not yet seen.
    let mut last_row: FxHashMap<&T, usize> = FxHashMap::default();

    for i in 1..=m {
        // Last column before the current one where a[i-1] matched in `b`.
        let mut last_col = 0;

        for j in 1..=n {
            let trans_row = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let trans_col = last_col;

            let sub = if a[i - 1] == b[j - 1] {
                last_col = j;
                0.0
            } else {
                costs.substitute_cost(&a[i - 1], &b[j - 1])
            };

            let mut best = (d[(i - 1) * w + (j - 1)] + sub)
                .min(d[i * w + (j - 1)] + ins_prefix[j] - ins_prefix[j - 1])
                .min(d[(i - 1) * w + j] + del_prefix[i] - del_prefix[i - 1]);

            // Transpose a[trans_row-1] with a[i-1], deleting the tokens of
            // `a` and inserting the tokens of `b` that lie strictly
            // between the two occurrences.
            if trans_row >= 1 && trans_col >= 1 {
                let swap = d[(trans_row - 1) * w + (trans_col - 1)]
                    + (del_prefix[i - 1] - del_prefix[trans_row])
                    + costs.transpose_cost(&a[trans_row - 1], &a[i - 1])
                    + (ins_prefix[j - 1] - ins_prefix[trans_col]);
                best = best.min(swap);
            }

            d[i * w + j] = best;
        }

        last_row.insert(&a[i - 1], i);
    }

    d[m * w + n]
}

/// [`levenshtein`] over the chars of two strings with unit costs.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::distance::levenshtein_str;
///
/// assert_eq!(levenshtein_str("kitten", "sitting"), 3.0);
/// assert_eq!(levenshtein_str("test", "test"), 0.0);
/// ```
pub fn levenshtein_str(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    levenshtein(&a_chars, &b_chars, &CostModel::default())
}

/// [`optimal_string_alignment`] over the chars of two strings with unit
/// costs.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::distance::optimal_string_alignment_str;
///
/// assert_eq!(optimal_string_alignment_str("test", "tset"), 1.0);
/// ```
pub fn optimal_string_alignment_str(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    optimal_string_alignment(&a_chars, &b_chars, &CostModel::default())
}

/// [`damerau_levenshtein`] over the chars of two strings with unit costs.
///
/// # Example
///
/// ```rust
/// use weighted_levenshtein::distance::damerau_levenshtein_str;
///
/// assert_eq!(damerau_levenshtein_str("ab", "ba"), 1.0);
/// ```
pub fn damerau_levenshtein_str(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    damerau_levenshtein(&a_chars, &b_chars, &CostModel::default())
}
