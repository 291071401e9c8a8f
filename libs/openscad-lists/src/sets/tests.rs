use super::*;
use crate::value::{vector, Value};
use crate::ListError;

#[test]
fn test_union_keeps_a_then_new_b() {
    assert_eq!(set_union(&[1, 2, 3], &[3, 4, 4, 2, 5]), vec![1, 2, 3, 4, 5]);
    assert_eq!(set_union::<i32>(&[], &[]), Vec::<i32>::new());
    assert_eq!(set_union(&[], &[7, 7]), vec![7]);
}

#[test]
fn test_union_indexed_maps_every_b_item() {
    let a = ['p', 'q'];
    let b = ['r', 'p', 'r', 's'];
    let (where_b, union) = set_union_indexed(&a, &b);
    assert_eq!(union, vec!['p', 'q', 'r', 's']);
    for (item, &p) in b.iter().zip(&where_b) {
        assert_eq!(union[p], *item);
    }
}

#[test]
fn test_difference_and_intersection_partition_a() {
    let a = [1, 2, 3, 4, 2];
    let b = [2, 4, 6];
    assert_eq!(set_difference(&a, &b), vec![1, 3]);
    assert_eq!(set_intersection(&a, &b), vec![2, 4, 2]);
}

#[test]
fn test_membership() {
    assert!(in_list(&3, &[1, 2, 3]));
    assert!(!in_list(&5, &[1, 2, 3]));
    assert_eq!(find_first_match(&2, &[1, 2, 2]), Some(1));
    assert_eq!(find_first_match(&9, &[1, 2, 2]), None);
}

#[test]
fn test_in_list_column() {
    let rows = vec![vector([1, 10]), vector([2]), vector([3, 30])];
    assert!(in_list_column(&Value::from(30), &rows, 1).unwrap());
    assert!(in_list_column(&Value::from(30), &rows, -1).unwrap());
    assert!(!in_list_column(&Value::from(2), &rows, 1).unwrap());

    let mixed = vec![vector([1]), Value::from(2)];
    assert!(matches!(
        in_list_column(&Value::from(5), &mixed, 0),
        Err(ListError::InvalidArgument { .. })
    ));
}

#[test]
fn test_sublists_compare_as_units() {
    let a = vec![vec![1, 2], vec![3]];
    let b = vec![vec![3], vec![1]];
    assert_eq!(set_intersection(&a, &b), vec![vec![3]]);
    assert_eq!(set_difference(&a, &b), vec![vec![1, 2]]);
}
