//! # Structural Mutators
//!
//! Operations that return a new list with targeted edits. Inputs are never
//! modified in place.
//!
//! Write indices follow a different policy from read indices: a negative
//! index counts from the end once (no wraparound), an index past the end
//! extends the list, and naming the same position twice is an error.

use std::collections::HashSet;

use crate::error::{reject, ListError, ListResult};
use crate::index::from_end;

// =============================================================================
// PATCHING
// =============================================================================

/// Returns `list` with `values[k]` written at `indices[k]`.
///
/// Positions past the end extend the list, filling gaps with `dflt`; the
/// result is further right-padded with `dflt` to at least `minlen` items.
///
/// ```rust
/// use openscad_lists::list_set;
/// assert_eq!(list_set(&[2, 3, 4, 5], &[1, 3], &[81, 47], &0, 0).unwrap(), vec![2, 81, 4, 47]);
/// assert_eq!(list_set(&[1], &[3], &[9], &0, 6).unwrap(), vec![1, 0, 0, 9, 0, 0]);
/// ```
pub fn list_set<T: Clone>(
    list: &[T],
    indices: &[i64],
    values: &[T],
    dflt: &T,
    minlen: usize,
) -> ListResult<Vec<T>> {
    const OP: &str = "list_set";
    let positions = write_positions(OP, list.len(), indices, values.len())?;

    let needed = positions.iter().map(|&p| p + 1).max().unwrap_or(0);
    let mut out = list.to_vec();
    out.resize(list.len().max(needed).max(minlen), dflt.clone());
    for (&p, value) in positions.iter().zip(values) {
        out[p] = value.clone();
    }
    Ok(out)
}

/// [`list_set`] for a single position.
///
/// ```rust
/// use openscad_lists::list_set_at;
/// assert_eq!(list_set_at(&[2, 3, 4, 5], 2, 21, &0, 0).unwrap(), vec![2, 3, 21, 5]);
/// ```
pub fn list_set_at<T: Clone>(
    list: &[T],
    index: i64,
    value: T,
    dflt: &T,
    minlen: usize,
) -> ListResult<Vec<T>> {
    list_set(list, &[index], &[value], dflt, minlen)
}

/// Inserts `values[k]` immediately before `indices[k]`, shifting later
/// items right. Index `list.len()` appends.
///
/// Indices may be given in any order; they refer to positions in the
/// original list.
///
/// ```rust
/// use openscad_lists::list_insert;
/// assert_eq!(list_insert(&[3, 6, 9], &[3, 0], &[12, 0]).unwrap(), vec![0, 3, 6, 9, 12]);
/// ```
pub fn list_insert<T: Clone>(list: &[T], indices: &[i64], values: &[T]) -> ListResult<Vec<T>> {
    const OP: &str = "list_insert";
    let positions = write_positions(OP, list.len(), indices, values.len())?;
    if let Some(k) = positions.iter().position(|&p| p > list.len()) {
        return Err(reject(ListError::out_of_policy(
            OP,
            indices[k],
            format!("[-{0}, {0}]", list.len()),
        )));
    }

    let mut inserts: Vec<(usize, &T)> = positions.into_iter().zip(values).collect();
    inserts.sort_by_key(|&(p, _)| p);

    let mut out = Vec::with_capacity(list.len() + inserts.len());
    let mut pending = inserts.into_iter().peekable();
    for (i, item) in list.iter().enumerate() {
        while let Some((_, value)) = pending.next_if(|&(p, _)| p == i) {
            out.push(value.clone());
        }
        out.push(item.clone());
    }
    out.extend(pending.map(|(_, value)| value.clone()));
    Ok(out)
}

/// [`list_insert`] for a single position.
pub fn list_insert_at<T: Clone>(list: &[T], index: i64, value: T) -> ListResult<Vec<T>> {
    list_insert(list, &[index], &[value])
}

/// Normalizes write indices and enforces the pairing and uniqueness rules.
fn write_positions(
    op: &'static str,
    len: usize,
    indices: &[i64],
    value_count: usize,
) -> ListResult<Vec<usize>> {
    if indices.len() != value_count {
        return Err(reject(ListError::LengthMismatch {
            operation: op,
            expected: indices.len(),
            actual: value_count,
        }));
    }
    let mut seen = HashSet::with_capacity(indices.len());
    indices
        .iter()
        .map(|&i| {
            let p = from_end(len, i)
                .ok_or_else(|| reject(ListError::out_of_policy(op, i, format!("[-{len}, inf)"))))?;
            if !seen.insert(p) {
                return Err(reject(ListError::DuplicateIndex { operation: op, index: p }));
            }
            Ok(p)
        })
        .collect()
}

/// Scatters `values` into the positions flagged `true` in `mask`; the rest
/// get `dflt`.
///
/// The number of `true` flags must equal `values.len()`.
pub fn list_bset<T: Clone>(mask: &[bool], values: &[T], dflt: &T) -> ListResult<Vec<T>> {
    let flagged = mask.iter().filter(|&&m| m).count();
    if flagged != values.len() {
        return Err(reject(ListError::LengthMismatch {
            operation: "list_bset",
            expected: flagged,
            actual: values.len(),
        }));
    }
    let mut next = values.iter();
    Ok(mask
        .iter()
        .map(|&m| {
            let picked = if m { next.next() } else { None };
            picked.unwrap_or(dflt).clone()
        })
        .collect())
}

// =============================================================================
// REMOVAL
// =============================================================================

/// Drops the items at `indices`. Indices outside the list, including
/// negative ones, are ignored, as are repeats.
///
/// ```rust
/// use openscad_lists::list_remove;
/// assert_eq!(list_remove(&[3, 6, 9, 12], &[1, 3]), vec![3, 9]);
/// ```
pub fn list_remove<T: Clone>(list: &[T], indices: &[i64]) -> Vec<T> {
    let doomed: HashSet<i64> = indices.iter().copied().collect();
    list.iter()
        .enumerate()
        .filter(|(i, _)| !doomed.contains(&(*i as i64)))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Drops items equal to entries of `values`.
///
/// With `all == false` each entry removes one occurrence, the first one not
/// already removed, so listing a value twice removes two copies. With
/// `all == true` every occurrence of every entry goes. Entries that are
/// themselves lists are matched as whole items.
pub fn list_remove_values<T: Clone + PartialEq>(list: &[T], values: &[T], all: bool) -> Vec<T> {
    if all {
        return list.iter().filter(|item| !values.contains(item)).cloned().collect();
    }
    let mut removed = vec![false; list.len()];
    for value in values {
        if let Some(i) = (0..list.len()).find(|&i| !removed[i] && list[i] == *value) {
            removed[i] = true;
        }
    }
    list.iter()
        .zip(removed)
        .filter(|(_, gone)| !gone)
        .map(|(item, _)| item.clone())
        .collect()
}

// =============================================================================
// LENGTH FITTING
// =============================================================================

/// Right-pads `list` with `fill` to at least `minlen` items.
pub fn list_pad<T: Clone>(list: &[T], minlen: usize, fill: &T) -> Vec<T> {
    let mut out = list.to_vec();
    if out.len() < minlen {
        out.resize(minlen, fill.clone());
    }
    out
}

/// Truncates `list` to at most `maxlen` items.
pub fn list_trim<T: Clone>(list: &[T], maxlen: usize) -> Vec<T> {
    list[..list.len().min(maxlen)].to_vec()
}

/// Pads or truncates `list` to exactly `length` items.
pub fn list_fit<T: Clone>(list: &[T], length: usize, fill: &T) -> Vec<T> {
    if list.len() > length {
        list_trim(list, length)
    } else {
        list_pad(list, length, fill)
    }
}

// =============================================================================
// REORDERING
// =============================================================================

/// Items in reverse order.
pub fn reverse<T: Clone>(list: &[T]) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

/// Rotates left by `n` positions; negative `n` rotates right.
///
/// ```rust
/// use openscad_lists::list_rotate;
/// assert_eq!(list_rotate(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
/// assert_eq!(list_rotate(&[1, 2, 3, 4, 5], -1), vec![5, 1, 2, 3, 4]);
/// ```
pub fn list_rotate<T: Clone>(list: &[T], n: i64) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    let r = n.rem_euclid(list.len() as i64) as usize;
    list[r..].iter().chain(&list[..r]).cloned().collect()
}

// =============================================================================
// DEDUPLICATION
// =============================================================================

/// Collapses runs of equal consecutive items into one.
///
/// With `closed`, the list is treated as a loop and a last item equal to the
/// first is dropped too. A non-empty list never collapses to nothing.
///
/// ```rust
/// use openscad_lists::deduplicate;
/// assert_eq!(deduplicate(&[1, 1, 2, 3, 3, 1], false), vec![1, 2, 3, 1]);
/// assert_eq!(deduplicate(&[1, 1, 2, 3, 3, 1], true), vec![1, 2, 3]);
/// ```
pub fn deduplicate<T: Clone + PartialEq>(list: &[T], closed: bool) -> Vec<T> {
    deduplicate_by(list, closed, |a, b| a == b)
}

/// [`deduplicate`] with a caller-supplied equality, for example
/// [`Value::approx_eq`](crate::Value::approx_eq).
pub fn deduplicate_by<T: Clone, F>(list: &[T], closed: bool, same: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    kept_positions(list.len(), closed, |a, b| same(&list[a], &list[b]))
        .into_iter()
        .map(|i| list[i].clone())
        .collect()
}

/// Applies [`deduplicate`] to the items named by `indices`, returning the
/// surviving indices.
pub fn deduplicate_indexed<T: PartialEq>(
    list: &[T],
    indices: &[usize],
    closed: bool,
) -> ListResult<Vec<usize>> {
    if let Some(&bad) = indices.iter().find(|&&i| i >= list.len()) {
        return Err(reject(ListError::out_of_policy(
            "deduplicate_indexed",
            bad as i64,
            format!("[0, {})", list.len()),
        )));
    }
    Ok(kept_positions(indices.len(), closed, |a, b| list[indices[a]] == list[indices[b]])
        .into_iter()
        .map(|k| indices[k])
        .collect())
}

/// Keeps position `i` unless it equals its successor.
fn kept_positions(len: usize, closed: bool, same: impl Fn(usize, usize) -> bool) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..len)
        .filter(|&i| {
            if i + 1 < len {
                !same(i, i + 1)
            } else {
                !(closed && len > 1 && same(i, 0))
            }
        })
        .collect();
    if kept.is_empty() && len > 0 {
        kept.push(len - 1);
    }
    kept
}
