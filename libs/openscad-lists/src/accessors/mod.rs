//! # Sequence Accessors
//!
//! Read-only extraction. Read indices never fail for being out of range:
//! they are resolved by wraparound, and every returned item is a copy of an
//! item already present in the input.

use crate::error::{reject, ListError, ListResult};
use crate::index::{from_end, resolve_index, resolve_range, resolve_selector, IndexRange, Selector};
use crate::value::Nested;

/// Returns the item at `index` after wraparound.
///
/// ```rust
/// use openscad_lists::select;
/// assert_eq!(*select(&[10, 20, 30], -1).unwrap(), 30);
/// assert_eq!(*select(&[10, 20, 30], 4).unwrap(), 20);
/// ```
pub fn select<T>(list: &[T], index: i64) -> ListResult<&T> {
    if list.is_empty() {
        return Err(reject(ListError::EmptySequence { operation: "select" }));
    }
    Ok(&list[resolve_index(list.len(), index)?])
}

/// Returns one item per position named by `selector`, each position wrapped
/// independently. Repeated positions yield repeated items.
pub fn select_many<T: Clone>(list: &[T], selector: &Selector) -> ListResult<Vec<T>> {
    if list.is_empty() && !matches!(selector, Selector::List(v) if v.is_empty()) {
        return Err(reject(ListError::EmptySequence { operation: "select" }));
    }
    let positions = resolve_selector(list.len(), selector)?;
    Ok(positions.into_iter().map(|i| list[i].clone()).collect())
}

/// Inclusive circular span from `start` to `end`.
///
/// When `end` resolves to a position before `start`, the span runs to the
/// last item and continues from the first item up to `end`.
///
/// ```rust
/// use openscad_lists::select_span;
/// assert_eq!(select_span(&[0, 1, 2, 3, 4], 3, 1).unwrap(), vec![3, 4, 0, 1]);
/// ```
pub fn select_span<T: Clone>(list: &[T], start: i64, end: i64) -> ListResult<Vec<T>> {
    let len = list.len();
    if len == 0 {
        return Err(reject(ListError::EmptySequence { operation: "select_span" }));
    }
    let s = resolve_index(len, start)?;
    let e = resolve_index(len, end)?;
    if s <= e {
        Ok(list[s..=e].to_vec())
    } else {
        Ok(list[s..].iter().chain(&list[..=e]).cloned().collect())
    }
}

/// Inclusive span from `start` to `end` without wraparound.
///
/// Negative endpoints count from the end and both endpoints are clamped into
/// the list. An end before the start gives an empty list.
///
/// ```rust
/// use openscad_lists::slice;
/// assert_eq!(slice(&[0, 1, 2, 3, 4], 1, -2), vec![1, 2, 3]);
/// assert!(slice(&[0, 1, 2, 3, 4], 3, 1).is_empty());
/// ```
pub fn slice<T: Clone>(list: &[T], start: i64, end: i64) -> Vec<T> {
    let len = list.len() as i64;
    if len == 0 {
        return Vec::new();
    }
    let clamp = |i: i64| (if i < 0 { i + len } else { i }).clamp(0, len - 1) as usize;
    let (s, e) = (clamp(start), clamp(end));
    if e < s {
        Vec::new()
    } else {
        list[s..=e].to_vec()
    }
}

/// Items from the start up to and including `to`.
///
/// A negative `to` counts from the end; a `to` past the end returns the
/// whole list.
pub fn head<T: Clone>(list: &[T], to: i64) -> Vec<T> {
    match from_end(list.len(), to) {
        None => Vec::new(),
        Some(to) => list[..(to + 1).min(list.len())].to_vec(),
    }
}

/// Items from `from` to the end.
///
/// A negative `from` counts from the end, clamping at the first item; a
/// `from` past the end returns nothing.
pub fn tail<T: Clone>(list: &[T], from: i64) -> Vec<T> {
    let from = from_end(list.len(), from).unwrap_or(0);
    list.get(from..).map(<[T]>::to_vec).unwrap_or_default()
}

/// The final item, or `None` for an empty list.
pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// Positions of `list` from `start` to `end` stepping by `step`.
///
/// Both endpoints wrap like any other read index; an empty list has no
/// positions.
///
/// ```rust
/// use openscad_lists::idx;
/// assert_eq!(idx(&['a', 'b', 'c', 'd'], 0, -1, 2).unwrap(), vec![0, 2]);
/// assert_eq!(idx(&['a', 'b', 'c', 'd'], -1, 0, -1).unwrap(), vec![3, 2, 1, 0]);
/// assert_eq!(idx(&['a', 'b', 'c', 'd'], 0, 5, 1).unwrap(), vec![0, 1]);
/// ```
pub fn idx<T>(list: &[T], start: i64, end: i64, step: i64) -> ListResult<Vec<usize>> {
    if step == 0 {
        return Err(reject(ListError::invalid("idx", "step must not be zero")));
    }
    if list.is_empty() {
        return Ok(Vec::new());
    }
    resolve_range(list.len(), IndexRange::new(start, step, end))
}

/// Pairs each item with its position.
pub fn enumerate<T: Clone>(list: &[T]) -> Vec<(usize, T)> {
    list.iter().cloned().enumerate().collect()
}

/// Pairs each position with the fields `cols` of the item there.
///
/// Every item must itself be a list; see [`column`] for field resolution.
pub fn enumerate_columns<T: Nested + Clone>(
    list: &[T],
    cols: &[i64],
) -> ListResult<Vec<(usize, Vec<T>)>> {
    list.iter()
        .enumerate()
        .map(|(i, item)| {
            let fields = cols
                .iter()
                .map(|&c| field(item, c, "enumerate").cloned())
                .collect::<ListResult<Vec<_>>>()?;
            Ok((i, fields))
        })
        .collect()
}

/// The field at `col` of every item.
///
/// Negative columns count from the end of each item. Columns do not wrap: a
/// column outside an item fails with `IndexOutOfPolicy`, and an item that is
/// not a list fails with `InvalidArgument`.
pub fn column<T: Nested + Clone>(list: &[T], col: i64) -> ListResult<Vec<T>> {
    list.iter().map(|item| field(item, col, "column").cloned()).collect()
}

fn field<'a, T: Nested>(item: &'a T, col: i64, op: &'static str) -> ListResult<&'a T> {
    let fields = item
        .children()
        .ok_or_else(|| reject(ListError::invalid(op, "item is not a list")))?;
    from_end(fields.len(), col)
        .and_then(|c| fields.get(c))
        .ok_or_else(|| {
            reject(ListError::out_of_policy(op, col, format!("[-{0}, {0})", fields.len())))
        })
}

/// Items whose matching mask entry is `true`.
///
/// ```rust
/// use openscad_lists::bselect;
/// assert_eq!(bselect(&[1, 2, 3], &[true, false, true]).unwrap(), vec![1, 3]);
/// ```
pub fn bselect<T: Clone>(list: &[T], mask: &[bool]) -> ListResult<Vec<T>> {
    if mask.len() != list.len() {
        return Err(reject(ListError::LengthMismatch {
            operation: "bselect",
            expected: list.len(),
            actual: mask.len(),
        }));
    }
    Ok(list
        .iter()
        .zip(mask)
        .filter(|(_, &keep)| keep)
        .map(|(item, _)| item.clone())
        .collect())
}
