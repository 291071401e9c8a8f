//! # Set Algebra
//!
//! Treats lists as collections of unique items compared by equality.
//! Results keep the order in which items first appear. Items only need
//! `PartialEq`, so lookups are linear scans; floating-point coordinates
//! cannot be hashed reliably.

use crate::error::{reject, ListError, ListResult};
use crate::index::from_end;
use crate::value::Nested;

/// All of `a`, followed by the items of `b` missing from `a`.
///
/// Only the first copy of a repeated item in `b` is added.
///
/// ```rust
/// use openscad_lists::set_union;
/// assert_eq!(set_union(&[2, 5, 7], &[1, 5, 1, 9]), vec![2, 5, 7, 1, 9]);
/// ```
pub fn set_union<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    set_union_indexed(a, b).1
}

/// [`set_union`] that also reports, for each item of `b`, its position in
/// the union.
///
/// ```rust
/// use openscad_lists::set_union_indexed;
/// let (where_b, union) = set_union_indexed(&[2, 5, 7], &[1, 5, 1]);
/// assert_eq!(union, vec![2, 5, 7, 1]);
/// assert_eq!(where_b, vec![3, 1, 3]);
/// ```
pub fn set_union_indexed<T: Clone + PartialEq>(a: &[T], b: &[T]) -> (Vec<usize>, Vec<T>) {
    let mut union = a.to_vec();
    let positions = b
        .iter()
        .map(|item| match union.iter().position(|u| u == item) {
            Some(p) => p,
            None => {
                union.push(item.clone());
                union.len() - 1
            }
        })
        .collect();
    (positions, union)
}

/// Items of `a` with no equal item in `b`.
pub fn set_difference<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

/// Items of `a` with at least one equal item in `b`.
pub fn set_intersection<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// True when `item` equals some member of `list`.
pub fn in_list<T: PartialEq>(item: &T, list: &[T]) -> bool {
    list.contains(item)
}

/// Position of the first member of `list` equal to `item`.
pub fn find_first_match<T: PartialEq>(item: &T, list: &[T]) -> Option<usize> {
    list.iter().position(|member| member == item)
}

/// True when `item` equals field `col` of some member of `list`.
///
/// Members must themselves be lists. A member too short to have the
/// column simply does not match; a member that is not a list fails.
///
/// ```rust
/// use openscad_lists::{in_list_column, vector, Value};
/// let anchors = vec![vector([Value::from("top"), Value::from(1)]), vector([Value::from("left")])];
/// assert!(in_list_column(&Value::from("left"), &anchors, 0).unwrap());
/// assert!(!in_list_column(&Value::from(1), &anchors, 0).unwrap());
/// ```
pub fn in_list_column<T: Nested + PartialEq>(item: &T, list: &[T], col: i64) -> ListResult<bool> {
    for member in list {
        let fields = member
            .children()
            .ok_or_else(|| reject(ListError::invalid("in_list", "member is not a list")))?;
        if from_end(fields.len(), col).and_then(|c| fields.get(c)) == Some(item) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests;
