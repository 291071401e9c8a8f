//! # Combinatorial Generator
//!
//! Sliding windows, combinations, permutations and zipping. Output order is
//! fixed by the order of the input list: combinations come out in
//! lexicographic order of item positions, never re-sorted by value.

use config::constants::ListConfig;
use rayon::prelude::*;

use crate::error::{reject, ListError, ListResult};

// =============================================================================
// WINDOWS
// =============================================================================

/// Overlapping pairs of neighbours. With `wrap`, the pair joining the last
/// item back to the first is appended. Lists shorter than two give nothing.
///
/// ```rust
/// use openscad_lists::pair;
/// assert_eq!(pair(&[1, 2, 3], false), vec![[1, 2], [2, 3]]);
/// assert_eq!(pair(&[1, 2, 3], true), vec![[1, 2], [2, 3], [3, 1]]);
/// ```
pub fn pair<T: Clone>(list: &[T], wrap: bool) -> Vec<[T; 2]> {
    windows(list, wrap)
}

/// Overlapping triples of neighbours. With `wrap`, the two triples crossing
/// the end of the list are appended. Lists shorter than three give nothing.
pub fn triplet<T: Clone>(list: &[T], wrap: bool) -> Vec<[T; 3]> {
    windows(list, wrap)
}

fn windows<T: Clone, const N: usize>(list: &[T], wrap: bool) -> Vec<[T; N]> {
    let len = list.len();
    if len < N {
        return Vec::new();
    }
    let starts = if wrap { len } else { len - N + 1 };
    (0..starts)
        .map(|s| std::array::from_fn(|k| list[(s + k) % len].clone()))
        .collect()
}

// =============================================================================
// COMBINATIONS AND PERMUTATIONS
// =============================================================================

fn check_size(op: &'static str, len: usize, n: usize) -> ListResult<()> {
    if n == 0 || n > len {
        return Err(reject(ListError::out_of_policy(op, n as i64, format!("[1, {len}]"))));
    }
    Ok(())
}

/// Number of ways to choose `k` of `n` items, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1u128, |acc, i| {
        acc.checked_mul((n - i) as u128).map(|v| v / (i as u128 + 1))
    })
}

/// All `n`-item subsets of `list`, each in list order, listed in
/// lexicographic order of positions.
///
/// Fails with `IndexOutOfPolicy` unless `1 <= n <= list.len()`.
///
/// ```rust
/// use openscad_lists::combinations;
/// assert_eq!(
///     combinations(&[1, 2, 3], 2).unwrap(),
///     vec![vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
pub fn combinations<T: Clone>(list: &[T], n: usize) -> ListResult<Vec<Vec<T>>> {
    check_size("combinations", list.len(), n)?;
    Ok(index_combinations(list.len(), n)
        .into_iter()
        .map(|c| c.into_iter().map(|i| list[i].clone()).collect())
        .collect())
}

/// [`combinations`] computed on the rayon pool, in the same order.
pub fn combinations_par<T: Clone + Send + Sync>(list: &[T], n: usize) -> ListResult<Vec<Vec<T>>> {
    combinations_par_with(list, n, &ListConfig::default())
}

/// [`combinations_par`] with an explicit parallel threshold. Inputs shorter
/// than `config.parallel_threshold` are generated sequentially.
pub fn combinations_par_with<T: Clone + Send + Sync>(
    list: &[T],
    n: usize,
    config: &ListConfig,
) -> ListResult<Vec<Vec<T>>> {
    let len = list.len();
    if len < config.parallel_threshold {
        return combinations(list, n);
    }
    check_size("combinations", len, n)?;
    tracing::trace!(len, n, "generating combinations in parallel");

    // One task per leading position; each task's block is already ordered.
    let blocks: Vec<Vec<Vec<T>>> = (0..=len - n)
        .into_par_iter()
        .map(|first| {
            let rest = first + 1;
            index_combinations(len - rest, n - 1)
                .into_iter()
                .map(|tail| {
                    std::iter::once(list[first].clone())
                        .chain(tail.into_iter().map(|i| list[rest + i].clone()))
                        .collect()
                })
                .collect()
        })
        .collect();
    Ok(blocks.into_iter().flatten().collect())
}

/// Lexicographic `k`-subsets of `0..len`; `k == 0` yields one empty subset.
fn index_combinations(len: usize, k: usize) -> Vec<Vec<usize>> {
    if k > len {
        return Vec::new();
    }
    let capacity = binomial(len, k)
        .and_then(|c| usize::try_from(c).ok())
        .unwrap_or(0);
    let mut out = Vec::with_capacity(capacity);
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still advance
        let Some(pos) = (0..k).rev().find(|&p| current[p] < len - k + p) else {
            return out;
        };
        current[pos] += 1;
        for p in pos + 1..k {
            current[p] = current[p - 1] + 1;
        }
    }
}

/// All ordered selections of `n` distinct positions of `list`.
///
/// Each level picks every remaining position in list order and recurses on
/// the rest. Fails with `IndexOutOfPolicy` unless `1 <= n <= list.len()`.
///
/// ```rust
/// use openscad_lists::permutations;
/// let p = permutations(&[3, 4, 5], 2).unwrap();
/// assert_eq!(p, vec![vec![3, 4], vec![3, 5], vec![4, 3], vec![4, 5], vec![5, 3], vec![5, 4]]);
/// ```
pub fn permutations<T: Clone>(list: &[T], n: usize) -> ListResult<Vec<Vec<T>>> {
    check_size("permutations", list.len(), n)?;
    let mut out = Vec::new();
    let mut used = vec![false; list.len()];
    let mut current = Vec::with_capacity(n);
    extend_permutations(list, n, &mut used, &mut current, &mut out);
    Ok(out)
}

fn extend_permutations<T: Clone>(
    list: &[T],
    n: usize,
    used: &mut [bool],
    current: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if current.len() == n {
        out.push(current.clone());
        return;
    }
    for i in 0..list.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(list[i].clone());
        extend_permutations(list, n, used, current, out);
        current.pop();
        used[i] = false;
    }
}

// =============================================================================
// ZIPPING
// =============================================================================

/// Groups the `i`-th items of every list, stopping at the shortest list.
///
/// ```rust
/// use openscad_lists::zip;
/// let (a, b) = ([1, 2, 3, 4], [9, 8, 7]);
/// assert_eq!(zip(&[&a[..], &b[..]]), vec![vec![1, 9], vec![2, 8], vec![3, 7]]);
/// ```
pub fn zip<T: Clone>(lists: &[&[T]]) -> Vec<Vec<T>> {
    let len = lists.iter().map(|l| l.len()).min().unwrap_or(0);
    (0..len)
        .map(|i| lists.iter().map(|l| l[i].clone()).collect())
        .collect()
}

/// Groups the `i`-th items of every list up to the longest list, filling
/// missing positions with `fill`.
pub fn zip_long<T: Clone>(lists: &[&[T]], fill: &T) -> Vec<Vec<T>> {
    let len = lists.iter().map(|l| l.len()).max().unwrap_or(0);
    (0..len)
        .map(|i| lists.iter().map(|l| l.get(i).unwrap_or(fill).clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests;
