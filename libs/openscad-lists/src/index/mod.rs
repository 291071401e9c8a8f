//! # Index Resolver
//!
//! Normalizes scalar, list and range indices against a list length using
//! wraparound: `-1` is the last item and `len` maps back to the first.
//!
//! ## Example
//!
//! ```rust
//! use openscad_lists::index::{resolve_index, resolve_selector, IndexRange, Selector};
//!
//! assert_eq!(resolve_index(4, -1).unwrap(), 3);
//! assert_eq!(resolve_index(4, 9).unwrap(), 1);
//!
//! let sel = Selector::Range(IndexRange::new(-3, 1, -1));
//! assert_eq!(resolve_selector(5, &sel).unwrap(), vec![2, 3, 4]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{reject, ListError, ListResult};
use crate::value::Value;

/// Inclusive integer range in OpenSCAD `[start:step:end]` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: i64,
    pub step: i64,
    pub end: i64,
}

impl IndexRange {
    pub fn new(start: i64, step: i64, end: i64) -> Self {
        Self { start, step, end }
    }

    /// `[start:end]` with a step of one.
    pub fn span(start: i64, end: i64) -> Self {
        Self::new(start, 1, end)
    }
}

/// Which positions of a list an accessor should read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// A single position.
    At(i64),
    /// Independent positions; repeats are allowed and yield repeated items.
    List(Vec<i64>),
    /// A strided run between two wrapped endpoints.
    Range(IndexRange),
}

impl Selector {
    /// Reads an index argument from dynamic data.
    ///
    /// Accepts an integral number, a vector of integral numbers or an
    /// integral range.
    pub fn from_value(value: &Value) -> ListResult<Self> {
        const OP: &str = "selector";
        match value {
            Value::Number(_) => value
                .as_integer()
                .map(Selector::At)
                .ok_or_else(|| reject(ListError::invalid(OP, format!("index {} is not an integer", value)))),
            Value::Vector(items) => items
                .iter()
                .map(|item| {
                    item.as_integer().ok_or_else(|| {
                        reject(ListError::invalid(OP, format!("index {} is not an integer", item)))
                    })
                })
                .collect::<ListResult<Vec<_>>>()
                .map(Selector::List),
            Value::Range { start, step, end } => {
                let part = |n: f64| Value::Number(n).as_integer();
                match (part(*start), part(*step), part(*end)) {
                    (Some(start), Some(step), Some(end)) => {
                        Ok(Selector::Range(IndexRange::new(start, step, end)))
                    }
                    _ => Err(reject(ListError::invalid(
                        OP,
                        format!("range {} has non-integer parts", value),
                    ))),
                }
            }
            other => Err(reject(ListError::invalid(
                OP,
                format!("expected an index, list of indices or range, got {}", other.kind()),
            ))),
        }
    }

    /// True when the selector names exactly one position.
    pub fn is_single(&self) -> bool {
        matches!(self, Selector::At(_))
    }
}

impl From<i64> for Selector {
    fn from(i: i64) -> Self {
        Selector::At(i)
    }
}

impl From<Vec<i64>> for Selector {
    fn from(v: Vec<i64>) -> Self {
        Selector::List(v)
    }
}

impl From<&[i64]> for Selector {
    fn from(v: &[i64]) -> Self {
        Selector::List(v.to_vec())
    }
}

impl From<IndexRange> for Selector {
    fn from(r: IndexRange) -> Self {
        Selector::Range(r)
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolves `index` into `0..len` by wraparound.
///
/// Fails with `EmptySequence` when `len == 0`.
pub fn resolve_index(len: usize, index: i64) -> ListResult<usize> {
    if len == 0 {
        return Err(reject(ListError::EmptySequence { operation: "resolve_index" }));
    }
    Ok(index.rem_euclid(len as i64) as usize)
}

/// Resolves both endpoints of `range` by wraparound and walks the stride
/// between them.
///
/// The walked positions are already in bounds and are not wrapped again, so
/// a stride whose resolved start lies past its resolved end is empty.
pub fn resolve_range(len: usize, range: IndexRange) -> ListResult<Vec<usize>> {
    if range.step == 0 {
        return Err(reject(ListError::invalid("resolve_range", "range step must not be zero")));
    }
    let start = resolve_index(len, range.start)?;
    let end = resolve_index(len, range.end)?;
    let step = range.step.unsigned_abs() as usize;

    let positions = if range.step > 0 {
        if start > end {
            Vec::new()
        } else {
            (start..=end).step_by(step).collect()
        }
    } else if start < end {
        Vec::new()
    } else {
        (end..=start).rev().step_by(step).collect()
    };
    Ok(positions)
}

/// Resolves every position named by `selector`.
pub fn resolve_selector(len: usize, selector: &Selector) -> ListResult<Vec<usize>> {
    match selector {
        Selector::At(i) => Ok(vec![resolve_index(len, *i)?]),
        Selector::List(indices) => indices.iter().map(|&i| resolve_index(len, i)).collect(),
        Selector::Range(range) => resolve_range(len, *range),
    }
}

/// Counts a possibly negative index from the end without wrapping.
///
/// Returns `None` when the index still falls before the start.
pub(crate) fn from_end(len: usize, index: i64) -> Option<usize> {
    let adjusted = if index < 0 { index + len as i64 } else { index };
    usize::try_from(adjusted).ok()
}
