use super::*;

// =============================================================================
// WINDOWS
// =============================================================================

#[test]
fn test_pair_short_lists() {
    assert!(pair::<i32>(&[], true).is_empty());
    assert!(pair(&[1], true).is_empty());
    assert_eq!(pair(&[1, 2], false), vec![[1, 2]]);
    assert_eq!(pair(&[1, 2], true), vec![[1, 2], [2, 1]]);
}

#[test]
fn test_triplet() {
    assert!(triplet(&[1, 2], true).is_empty());
    assert_eq!(triplet(&[1, 2, 3, 4], false), vec![[1, 2, 3], [2, 3, 4]]);
    assert_eq!(
        triplet(&[1, 2, 3, 4], true),
        vec![[1, 2, 3], [2, 3, 4], [3, 4, 1], [4, 1, 2]]
    );
}

// =============================================================================
// COMBINATIONS
// =============================================================================

#[test]
fn test_binomial() {
    assert_eq!(binomial(5, 2), Some(10));
    assert_eq!(binomial(5, 0), Some(1));
    assert_eq!(binomial(5, 5), Some(1));
    assert_eq!(binomial(3, 4), Some(0));
    assert_eq!(binomial(52, 5), Some(2_598_960));
}

#[test]
fn test_combinations_order_follows_input() {
    let got = combinations(&['c', 'a', 'b'], 2).unwrap();
    assert_eq!(got, vec![vec!['c', 'a'], vec!['c', 'b'], vec!['a', 'b']]);
}

#[test]
fn test_combinations_extremes() {
    assert_eq!(combinations(&[1, 2, 3], 1).unwrap(), vec![vec![1], vec![2], vec![3]]);
    assert_eq!(combinations(&[1, 2, 3], 3).unwrap(), vec![vec![1, 2, 3]]);
}

#[test]
fn test_combinations_bounds() {
    assert!(matches!(
        combinations(&[1, 2, 3], 0),
        Err(ListError::IndexOutOfPolicy { value: 0, .. })
    ));
    assert!(matches!(
        combinations(&[1, 2, 3], 4),
        Err(ListError::IndexOutOfPolicy { value: 4, .. })
    ));
    assert!(combinations::<i32>(&[], 1).is_err());
}

#[test]
fn test_combinations_par_matches_sequential() {
    let list: Vec<u32> = (0..20).collect();
    let cfg = ListConfig::new(8, 4, 1e-9).unwrap();
    for n in [1, 3, 20] {
        assert_eq!(
            combinations_par_with(&list, n, &cfg).unwrap(),
            combinations(&list, n).unwrap()
        );
    }
    assert!(combinations_par_with(&list, 21, &cfg).is_err());
    // Below the threshold the sequential path is taken
    assert_eq!(combinations_par(&[1, 2, 3], 2).unwrap().len(), 3);
}

#[test]
fn test_index_combinations_zero() {
    assert_eq!(index_combinations(3, 0), vec![Vec::<usize>::new()]);
    assert!(index_combinations(2, 3).is_empty());
}

// =============================================================================
// PERMUTATIONS
// =============================================================================

#[test]
fn test_permutations_pairs() {
    let got = permutations(&[3, 4, 5], 2).unwrap();
    assert_eq!(got.len(), 6);
    assert_eq!(got[0], vec![3, 4]);
    assert_eq!(got[5], vec![5, 4]);
}

#[test]
fn test_permutations_full() {
    let got = permutations(&['a', 'b', 'c'], 3).unwrap();
    assert_eq!(got.len(), 6);
    assert_eq!(got[1], vec!['a', 'c', 'b']);
}

#[test]
fn test_permutations_bounds() {
    assert!(permutations(&[1, 2], 0).is_err());
    assert!(permutations(&[1, 2], 3).is_err());
}

// =============================================================================
// ZIP
// =============================================================================

#[test]
fn test_zip_truncates() {
    let a = [1, 2, 3, 4];
    let b = [9, 8, 7];
    assert_eq!(zip(&[&a[..], &b[..]]), vec![vec![1, 9], vec![2, 8], vec![3, 7]]);
    assert!(zip::<i32>(&[]).is_empty());
}

#[test]
fn test_zip_long_fills() {
    let a = [1, 2, 3];
    let b = [9];
    let c = [5, 6];
    assert_eq!(
        zip_long(&[&a[..], &b[..], &c[..]], &0),
        vec![vec![1, 9, 5], vec![2, 0, 6], vec![3, 0, 0]]
    );
}

#[test]
fn test_zip_long_with_undef_marker() {
    use crate::value::Value;
    let a = [Value::from(1)];
    let b: [Value; 0] = [];
    assert_eq!(zip_long(&[&a[..], &b[..]], &Value::Undef), vec![vec![Value::from(1), Value::Undef]]);
}
