//! # Shape Inspector
//!
//! Structural queries over nested lists: per-depth lengths, raggedness,
//! homogeneity and flattening.
//!
//! ## Depth Limits
//!
//! Shape inspection walks one level at a time and never recurses. Full
//! flattening recurses through `stacker` so the call stack grows on demand,
//! and both stop at [`ListConfig::max_depth`] levels.

use config::constants::{ListConfig, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;

use crate::error::{reject, ListError, ListResult};
use crate::value::{Nested, Value};

/// Length of a nested list at one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dim {
    /// Every list at this depth has this length.
    Len(usize),
    /// Lists at this depth disagree in length, or lists and flat values
    /// are mixed.
    Inconsistent,
}

impl Dim {
    /// The length, when consistent.
    pub fn len(self) -> Option<usize> {
        match self {
            Dim::Len(n) => Some(n),
            Dim::Inconsistent => None,
        }
    }
}

/// Per-depth lengths of a nested list, outermost first.
pub type ShapeDescriptor = Vec<Dim>;

// =============================================================================
// SHAPE
// =============================================================================

/// Measures the length of `list` at every depth.
///
/// ```rust
/// use openscad_lists::{list_shape, vector, Dim};
/// let m = vec![vector([1, 2, 3]), vector([4, 5, 6])];
/// assert_eq!(list_shape(&m).unwrap(), vec![Dim::Len(2), Dim::Len(3)]);
///
/// let ragged = vec![vector([1, 2]), vector([3])];
/// assert_eq!(list_shape(&ragged).unwrap(), vec![Dim::Len(2), Dim::Inconsistent]);
/// ```
pub fn list_shape<T: Nested>(list: &[T]) -> ListResult<ShapeDescriptor> {
    list_shape_with(list, &ListConfig::default())
}

/// [`list_shape`] with an explicit depth cap.
pub fn list_shape_with<T: Nested>(list: &[T], config: &ListConfig) -> ListResult<ShapeDescriptor> {
    let mut dims = vec![Dim::Len(list.len())];
    let mut level: Vec<&T> = list.iter().collect();

    while !level.is_empty() {
        let children: Vec<Option<&[T]>> = level.iter().map(|item| item.children()).collect();
        if children.iter().all(Option::is_none) {
            break;
        }
        let lists: Option<Vec<&[T]>> = children.into_iter().collect();
        let Some(lists) = lists else {
            // A flat value next to a list cannot be descended into.
            dims.push(Dim::Inconsistent);
            break;
        };
        let first = lists[0].len();
        if lists.iter().any(|l| l.len() != first) {
            dims.push(Dim::Inconsistent);
            break;
        }
        if dims.len() >= config.max_depth {
            return Err(depth_exceeded("list_shape", config.max_depth));
        }
        dims.push(Dim::Len(first));
        level = lists.into_iter().flatten().collect();
    }
    Ok(dims)
}

/// The length of `list` at a single `depth`; depth 0 is `list.len()`.
///
/// Fails with `IndexOutOfPolicy` when the list has fewer dimensions.
pub fn list_shape_at<T: Nested>(list: &[T], depth: usize) -> ListResult<Dim> {
    if depth == 0 {
        return Ok(Dim::Len(list.len()));
    }
    let dims = list_shape(list)?;
    dims.get(depth).copied().ok_or_else(|| {
        reject(ListError::out_of_policy(
            "list_shape",
            depth as i64,
            format!("[0, {}]", dims.len() - 1),
        ))
    })
}

/// True when every item has the same kind, and for vectors the same length
/// and item kinds, down to `depth` levels.
///
/// ```rust
/// use openscad_lists::{is_homogeneous, vector, Value};
/// let mixed = vector([Value::from(3), Value::from("x")]);
/// assert!(is_homogeneous(&[vector([1, 2]), vector([3, 4])], 1));
/// assert!(!is_homogeneous(&[vector([1, 2]), mixed.clone()], 1));
/// assert!(is_homogeneous(&[vector([1, 2]), mixed], 0));
/// ```
pub fn is_homogeneous(list: &[Value], depth: usize) -> bool {
    match list.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|item| same_pattern(first, item, depth)),
    }
}

fn same_pattern(a: &Value, b: &Value, depth: usize) -> bool {
    match (a, b) {
        (Value::Vector(x), Value::Vector(y)) if depth > 0 => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_pattern(p, q, depth - 1))
        }
        _ => a.kind() == b.kind(),
    }
}

/// Shortest sublist length.
pub fn min_length<T: Nested>(list: &[T]) -> ListResult<usize> {
    sublist_lengths(list, "min_length").map(|lens| lens.into_iter().min().unwrap_or_default())
}

/// Longest sublist length.
pub fn max_length<T: Nested>(list: &[T]) -> ListResult<usize> {
    sublist_lengths(list, "max_length").map(|lens| lens.into_iter().max().unwrap_or_default())
}

fn sublist_lengths<T: Nested>(list: &[T], op: &'static str) -> ListResult<Vec<usize>> {
    if list.is_empty() {
        return Err(reject(ListError::EmptySequence { operation: op }));
    }
    list.iter()
        .map(|item| {
            item.children()
                .map(<[T]>::len)
                .ok_or_else(|| reject(ListError::invalid(op, "every item must be a list")))
        })
        .collect()
}

// =============================================================================
// FLATTENING
// =============================================================================

/// Removes one level of nesting. Flat items are kept as they are.
pub fn flatten<T: Nested + Clone>(list: &[T]) -> Vec<T> {
    list.iter()
        .flat_map(|item| match item.children() {
            Some(inner) => inner.to_vec(),
            None => vec![item.clone()],
        })
        .collect()
}

/// Removes every level of nesting, keeping leaves in depth-first order.
///
/// ```rust
/// use openscad_lists::{full_flatten, vector, Value};
/// let nested = vec![vector([vector([1]), Value::from(2)]), Value::from(3)];
/// assert_eq!(full_flatten(&nested).unwrap(), vec![Value::from(1), Value::from(2), Value::from(3)]);
/// ```
pub fn full_flatten<T: Nested + Clone>(list: &[T]) -> ListResult<Vec<T>> {
    full_flatten_with(list, &ListConfig::default())
}

/// [`full_flatten`] with an explicit depth cap.
pub fn full_flatten_with<T: Nested + Clone>(list: &[T], config: &ListConfig) -> ListResult<Vec<T>> {
    let mut out = Vec::new();
    flatten_into(list, 1, config.max_depth, &mut out)?;
    Ok(out)
}

fn flatten_into<T: Nested + Clone>(
    items: &[T],
    depth: usize,
    max_depth: usize,
    out: &mut Vec<T>,
) -> ListResult<()> {
    if depth > max_depth {
        return Err(depth_exceeded("full_flatten", max_depth));
    }
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        for item in items {
            match item.children() {
                Some(inner) => flatten_into(inner, depth + 1, max_depth, out)?,
                None => out.push(item.clone()),
            }
        }
        Ok(())
    })
}

fn depth_exceeded(op: &'static str, max_depth: usize) -> ListError {
    reject(ListError::invalid(op, format!("nesting deeper than {max_depth} levels")))
}

// =============================================================================
// RESHAPING
// =============================================================================

/// Cuts `list` into rows of `width` items, padding the last row with `fill`.
pub fn list_to_matrix<T: Clone>(list: &[T], width: usize, fill: &T) -> ListResult<Vec<Vec<T>>> {
    if width == 0 {
        return Err(reject(ListError::out_of_policy("list_to_matrix", 0, "[1, inf)")));
    }
    Ok(list
        .chunks(width)
        .map(|row| {
            let mut row = row.to_vec();
            row.resize(width, fill.clone());
            row
        })
        .collect())
}

/// Swaps rows and columns. Every row must have the same length.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> ListResult<Vec<Vec<T>>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();
    if let Some(bad) = rows.iter().find(|r| r.len() != width) {
        return Err(reject(ListError::LengthMismatch {
            operation: "transpose",
            expected: width,
            actual: bad.len(),
        }));
    }
    Ok((0..width)
        .map(|c| rows.iter().map(|r| r[c].clone()).collect())
        .collect())
}

/// Returns a list item unchanged as a list; a flat item becomes `n` copies,
/// or the item followed by `n - 1` copies of `fill` when one is given.
pub fn force_list<T: Nested + Clone>(item: &T, n: usize, fill: Option<&T>) -> Vec<T> {
    if let Some(items) = item.children() {
        return items.to_vec();
    }
    match fill {
        None => vec![item.clone(); n],
        Some(fill) if n > 0 => std::iter::once(item.clone())
            .chain(std::iter::repeat(fill.clone()).take(n - 1))
            .collect(),
        Some(_) => Vec::new(),
    }
}
