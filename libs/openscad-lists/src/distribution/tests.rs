use super::*;
use crate::value::vector;

#[test]
fn test_repeat() {
    assert_eq!(repeat(&'x', 3), vec!['x', 'x', 'x']);
    assert!(repeat(&1, 0).is_empty());
}

#[test]
fn test_repeat_dims() {
    assert_eq!(repeat_dims(&Value::from(1), &[]), Value::from(1));
    assert_eq!(repeat_dims(&Value::from(1), &[2]), vector([1, 1]));
    let cube = repeat_dims(&Value::from(0), &[2, 1, 3]);
    assert_eq!(
        crate::shape::list_shape(&[cube]).unwrap(),
        vec![
            crate::shape::Dim::Len(1),
            crate::shape::Dim::Len(2),
            crate::shape::Dim::Len(1),
            crate::shape::Dim::Len(3),
        ]
    );
}

#[test]
fn test_repeat_entries_exact_total() {
    let out = repeat_entries(&[0, 1, 2, 3], &DistributionTarget::Total(6), true).unwrap();
    assert_eq!(out, vec![0, 0, 1, 2, 2, 3]);

    let out = repeat_entries(&['a', 'b', 'c'], &DistributionTarget::Total(10), true).unwrap();
    assert_eq!(out.len(), 10);
    for item in ['a', 'b', 'c'] {
        let n = out.iter().filter(|&&c| c == item).count();
        assert!(n == 3 || n == 4, "{item} appears {n} times");
    }
}

#[test]
fn test_repeat_entries_shrinks_and_empties() {
    let out = repeat_entries(&[1, 2, 3, 4, 5], &DistributionTarget::Total(2), true).unwrap();
    assert_eq!(out.len(), 2);
    assert!(repeat_entries(&[1, 2], &DistributionTarget::Total(0), true).unwrap().is_empty());
}

#[test]
fn test_repeat_entries_keeps_order() {
    let out = repeat_entries(&[5, 6], &DistributionTarget::Total(5), true).unwrap();
    assert_eq!(out, vec![5, 5, 5, 6, 6]);
}

#[test]
fn test_repeat_entries_nearest_mode() {
    let out = repeat_entries(&[0, 1, 2, 3], &DistributionTarget::Total(6), false).unwrap();
    // 1.5 rounds up for every entry, overshooting the target
    assert_eq!(out, vec![0, 0, 1, 1, 2, 2, 3, 3]);
}

#[test]
fn test_repeat_entries_counts() {
    let counts = DistributionTarget::Counts(vec![1.0, 0.0, 3.0]);
    assert_eq!(repeat_entries(&['a', 'b', 'c'], &counts, true).unwrap(), vec!['a', 'c', 'c', 'c']);

    let fractional = DistributionTarget::Counts(vec![0.5, 0.5, 0.5, 0.5]);
    assert_eq!(repeat_entries(&[1, 2, 3, 4], &fractional, true).unwrap().len(), 2);
}

#[test]
fn test_repeat_entries_rejects() {
    assert!(matches!(
        repeat_entries::<i32>(&[], &DistributionTarget::Total(3), true),
        Err(ListError::EmptySequence { .. })
    ));
    assert!(matches!(
        repeat_entries(&[1, 2], &DistributionTarget::Counts(vec![1.0]), true),
        Err(ListError::LengthMismatch { expected: 2, actual: 1, .. })
    ));
    assert!(matches!(
        repeat_entries(&[1, 2], &DistributionTarget::Counts(vec![1.0, -1.0]), true),
        Err(ListError::InvalidArgument { .. })
    ));
    assert!(matches!(
        repeat_entries(&[1], &DistributionTarget::Counts(vec![f64::NAN]), false),
        Err(ListError::InvalidArgument { .. })
    ));
}

#[test]
fn test_target_from_value() {
    assert_eq!(
        DistributionTarget::from_value(&Value::from(4)).unwrap(),
        DistributionTarget::Total(4)
    );
    assert_eq!(
        DistributionTarget::from_value(&vector([1.0, 2.5])).unwrap(),
        DistributionTarget::Counts(vec![1.0, 2.5])
    );
    for bad in [
        Value::from(-1),
        Value::from(2.5),
        Value::from(1e20),
        Value::from("6"),
        vector([Value::Undef]),
    ] {
        assert!(DistributionTarget::from_value(&bad).is_err(), "{bad}");
    }
}

#[test]
fn test_sum_preserving_round_totals() {
    let ideal = [0.3, 1.7, 2.2, 0.8];
    let rounded = sum_preserving_round(&ideal);
    assert_eq!(rounded.iter().sum::<usize>(), 5);
    for (r, x) in rounded.iter().zip(ideal) {
        assert!((*r as f64 - x).abs() < 1.0);
    }
}

#[test]
fn test_apportion_evenly() {
    assert_eq!(apportion_evenly(6, 4), vec![2, 1, 2, 1]);
    assert_eq!(apportion_evenly(3, 3), vec![1, 1, 1]);
    assert_eq!(apportion_evenly(0, 2), vec![0, 0]);
}

#[test]
fn test_count() {
    assert_eq!(count(4, 0.0, 1.0, false), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(count(2, 10.0, -5.0, true), vec![5.0, 10.0]);
    assert!(count(0, 1.0, 1.0, false).is_empty());
}

#[test]
fn test_shuffle_is_permutation() {
    let list: Vec<i32> = (0..50).collect();
    let mut out = shuffle(&list, Some(7));
    assert_eq!(out.len(), list.len());
    out.sort_unstable();
    assert_eq!(out, list);
}

#[test]
fn test_shuffle_seed_is_reproducible() {
    let list: Vec<i32> = (0..20).collect();
    assert_eq!(shuffle(&list, Some(42)), shuffle(&list, Some(42)));
    assert_ne!(shuffle(&list, Some(42)), list);
}

#[test]
fn test_shuffle_short_lists_unchanged() {
    assert_eq!(shuffle(&[9], None), vec![9]);
    assert!(shuffle::<i32>(&[], Some(1)).is_empty());
}
