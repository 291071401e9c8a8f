//! # Distribution Engine
//!
//! Expands or contracts lists under numeric constraints: plain repetition,
//! proportional repetition to an exact total, numeric progressions and
//! shuffling.
//!
//! ## Exact Apportioning
//!
//! `repeat_entries` in exact mode turns ideal (possibly fractional) counts
//! into whole counts by rounding the running total rather than each count:
//!
//! ```text
//! ideal   = [1.5, 1.5, 1.5, 1.5]      (6 items over 4 entries)
//! running = [1.5, 3.0, 4.5, 6.0]  ->  rounded [2, 3, 5, 6]
//! counts  = [2,   1,   2,   1  ]      (differences, sum = 6)
//! ```
//!
//! Every count stays within one unit of its ideal and the counts always sum
//! to the rounded total.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{reject, ListError, ListResult};
use crate::value::Value;

/// How long the output of [`repeat_entries`] should be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistributionTarget {
    /// Total output length, shared evenly across the entries.
    Total(usize),
    /// Repetition count per entry.
    Counts(Vec<f64>),
}

impl DistributionTarget {
    /// Reads a target from dynamic data: a non-negative integer total or a
    /// vector of non-negative counts.
    pub fn from_value(value: &Value) -> ListResult<Self> {
        const OP: &str = "repeat_entries";
        match value {
            Value::Number(_) => value
                .as_integer()
                .and_then(|n| usize::try_from(n).ok())
                .map(DistributionTarget::Total)
                .ok_or_else(|| {
                    reject(ListError::invalid(
                        OP,
                        format!("total {} is not a non-negative integer", value),
                    ))
                }),
            Value::Vector(items) => items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => Ok(*n),
                    other => Err(reject(ListError::invalid(
                        OP,
                        format!("count {} is not a number", other),
                    ))),
                })
                .collect::<ListResult<Vec<_>>>()
                .map(DistributionTarget::Counts),
            other => Err(reject(ListError::invalid(
                OP,
                format!("expected a total or a count vector, got {}", other.kind()),
            ))),
        }
    }
}

impl From<usize> for DistributionTarget {
    fn from(n: usize) -> Self {
        DistributionTarget::Total(n)
    }
}

impl From<Vec<f64>> for DistributionTarget {
    fn from(counts: Vec<f64>) -> Self {
        DistributionTarget::Counts(counts)
    }
}

// =============================================================================
// REPETITION
// =============================================================================

/// `n` copies of `value`.
pub fn repeat<T: Clone>(value: &T, n: usize) -> Vec<T> {
    vec![value.clone(); n]
}

/// Nested repetition: `dims[0]` groups, each holding the structure for
/// `dims[1..]`. Empty `dims` returns `value` itself.
///
/// ```rust
/// use openscad_lists::{repeat_dims, vector, Value};
/// let grid = repeat_dims(&Value::from(0), &[2, 3]);
/// assert_eq!(grid, vector([vector([0, 0, 0]), vector([0, 0, 0])]));
/// ```
pub fn repeat_dims(value: &Value, dims: &[usize]) -> Value {
    dims.iter()
        .rev()
        .fold(value.clone(), |inner, &n| Value::Vector(vec![inner; n]))
}

/// Repeats each entry of `list` so the output reaches `target`.
///
/// With `exact`, the output length equals the target total exactly (the
/// rounded sum of the counts for [`DistributionTarget::Counts`]). Without
/// it, each ideal count is rounded on its own and the total may drift.
///
/// ```rust
/// use openscad_lists::{repeat_entries, DistributionTarget};
/// let out = repeat_entries(&[0, 1, 2, 3], &DistributionTarget::Total(6), true).unwrap();
/// assert_eq!(out, vec![0, 0, 1, 2, 2, 3]);
/// ```
pub fn repeat_entries<T: Clone>(
    list: &[T],
    target: &DistributionTarget,
    exact: bool,
) -> ListResult<Vec<T>> {
    const OP: &str = "repeat_entries";
    if list.is_empty() {
        return Err(reject(ListError::EmptySequence { operation: OP }));
    }
    let counts = match target {
        DistributionTarget::Total(total) if exact => apportion_evenly(*total, list.len()),
        DistributionTarget::Total(total) => {
            let share = *total as f64 / list.len() as f64;
            vec![share.round() as usize; list.len()]
        }
        DistributionTarget::Counts(weights) => {
            if weights.len() != list.len() {
                return Err(reject(ListError::LengthMismatch {
                    operation: OP,
                    expected: list.len(),
                    actual: weights.len(),
                }));
            }
            if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
                return Err(reject(ListError::invalid(
                    OP,
                    format!("count {bad} is not a non-negative number"),
                )));
            }
            if exact {
                sum_preserving_round(weights)
            } else {
                weights.iter().map(|w| w.round() as usize).collect()
            }
        }
    };

    Ok(list
        .iter()
        .zip(counts)
        .flat_map(|(item, n)| std::iter::repeat(item.clone()).take(n))
        .collect())
}

/// Rounds non-negative ideal counts so that they sum to the rounded total
/// of the ideals, each staying within one unit of its ideal.
///
/// ```rust
/// use openscad_lists::sum_preserving_round;
/// assert_eq!(sum_preserving_round(&[0.4, 0.4, 0.4, 0.8]), vec![0, 1, 0, 1]);
/// ```
pub fn sum_preserving_round(ideal: &[f64]) -> Vec<usize> {
    let mut running = 0.0;
    let mut placed = 0usize;
    ideal
        .iter()
        .map(|&x| {
            running += x;
            let reached = running.round().max(0.0) as usize;
            let n = reached.saturating_sub(placed);
            placed += n;
            n
        })
        .collect()
}

/// Integer form of [`sum_preserving_round`] for `total` shared across
/// `parts` equal entries; the running totals are rounded half up exactly.
fn apportion_evenly(total: usize, parts: usize) -> Vec<usize> {
    let rounded_prefix = |k: usize| (2 * total * k + parts) / (2 * parts);
    (0..parts)
        .map(|k| rounded_prefix(k + 1) - rounded_prefix(k))
        .collect()
}

// =============================================================================
// PROGRESSIONS
// =============================================================================

/// `n` values `start, start + step, ...`, optionally in reverse order.
///
/// ```rust
/// use openscad_lists::count;
/// assert_eq!(count(3, 1.0, 2.0, false), vec![1.0, 3.0, 5.0]);
/// assert_eq!(count(3, 1.0, 2.0, true), vec![5.0, 3.0, 1.0]);
/// ```
pub fn count(n: usize, start: f64, step: f64, reverse: bool) -> Vec<f64> {
    let at = |i: usize| start + i as f64 * step;
    if reverse {
        (0..n).rev().map(at).collect()
    } else {
        (0..n).map(at).collect()
    }
}

// =============================================================================
// SHUFFLING
// =============================================================================

/// A uniformly random permutation of `list`.
///
/// The same `seed` always gives the same order; `None` draws from system
/// entropy. Lists of length 0 or 1 come back unchanged.
pub fn shuffle<T: Clone>(list: &[T], seed: Option<u64>) -> Vec<T> {
    let mut out = list.to_vec();
    if out.len() <= 1 {
        return out;
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::trace!(len = out.len(), seeded = seed.is_some(), "shuffling list");
    out.shuffle(&mut rng);
    out
}

#[cfg(test)]
mod tests;
