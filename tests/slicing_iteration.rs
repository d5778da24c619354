//! Integration tests for indexing, slicing, and first-axis iteration.

use array_primer::slicing::{at, cell, column, prefix, row_block, rows, segment, suffix};
use array_primer::ArrayError;
use ndarray::{array, Array1, Array2};

fn one_d() -> Array1<i64> {
    Array1::from_iter(0..=10)
}

fn two_d() -> Array2<i64> {
    array![
        [0, 1, 2, 3],
        [10, 11, 12, 13],
        [20, 21, 22, 23],
        [30, 31, 32, 33],
        [40, 41, 42, 43],
    ]
}

// ---------------------------------------------------------------------------
// One-dimensional
// ---------------------------------------------------------------------------

#[test]
fn positive_and_negative_indexing() {
    let a = one_d();
    assert_eq!(at(&a, 2), Some(2));
    assert_eq!(at(&a, -1), Some(10));
    assert_eq!(at(&a, -11), Some(0));
    assert_eq!(at(&a, 11), None);
    assert_eq!(at(&a, -12), None);
}

#[test]
fn segment_matches_oracle() {
    let a = one_d();
    assert_eq!(segment(&a, 2..5).unwrap(), array![2, 3, 4]);
}

#[test]
fn prefix_and_suffix() {
    let a = one_d();
    assert_eq!(prefix(&a, 8).unwrap(), array![0, 1, 2, 3, 4, 5, 6, 7]);
    // The library's answer for a[2:], not the primer's typo'd comment.
    assert_eq!(
        suffix(&a, 2).unwrap(),
        array![2, 3, 4, 5, 6, 7, 8, 9, 10]
    );
}

#[test]
fn out_of_range_segment_is_an_error() {
    let a = one_d();
    assert!(matches!(
        segment(&a, 5..20),
        Err(ArrayError::IndexOutOfBounds { index: 20, len: 11 })
    ));
}

// ---------------------------------------------------------------------------
// Two-dimensional
// ---------------------------------------------------------------------------

#[test]
fn cell_lookup() {
    let m = two_d();
    assert_eq!(cell(&m, (2, 3)), Some(23));
    assert_eq!(cell(&m, (5, 0)), None);
}

#[test]
fn column_matches_oracle() {
    let m = two_d();
    assert_eq!(column(&m, 1).unwrap(), array![1, 11, 21, 31, 41]);
    assert!(column(&m, 4).is_err());
}

#[test]
fn row_block_matches_oracle() {
    let m = two_d();
    assert_eq!(
        row_block(&m, 1..3).unwrap(),
        array![[10, 11, 12, 13], [20, 21, 22, 23]]
    );
    assert!(row_block(&m, 4..6).is_err());
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

#[test]
fn rows_iterate_over_first_axis() {
    let m = two_d();
    let collected: Vec<Vec<i64>> = rows(&m).map(|r| r.to_vec()).collect();
    assert_eq!(collected.len(), 5);
    assert_eq!(collected[0], vec![0, 1, 2, 3]);
    assert_eq!(collected[4], vec![40, 41, 42, 43]);
}
