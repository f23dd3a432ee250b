//! Validation tests for Heightmap construction.

use topo_common::{Heightmap, TopoError};

// ============================================================================
// from_rows tests
// ============================================================================

#[test]
fn test_from_rows_minimal_grid() {
    let hm = Heightmap::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
    assert_eq!(hm.cols(), 2);
    assert_eq!(hm.rows(), 2);
    assert_eq!(hm.samples(), &[0, 1, 2, 3]);
}

#[test]
fn test_from_rows_empty() {
    let err = Heightmap::from_rows(vec![]).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
}

#[test]
fn test_from_rows_single_row() {
    let err = Heightmap::from_rows(vec![vec![1, 2, 3]]).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
}

#[test]
fn test_from_rows_single_column() {
    let err = Heightmap::from_rows(vec![vec![1], vec![2], vec![3]]).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
}

#[test]
fn test_from_rows_empty_rows() {
    let err = Heightmap::from_rows(vec![vec![], vec![]]).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
}

#[test]
fn test_from_rows_ragged() {
    let err = Heightmap::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]).unwrap_err();
    match err {
        TopoError::MalformedGrid(msg) => {
            assert!(msg.contains("row 2"));
            assert!(msg.contains("expected 3"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_row_access() {
    let hm = Heightmap::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    assert_eq!(hm.row(1), Some(&[3, 4][..]));
    assert_eq!(hm.row(3), None);
}

// ============================================================================
// from_flat tests
// ============================================================================

#[test]
fn test_from_flat_matches_from_rows() {
    let flat = Heightmap::from_flat(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    let nested = Heightmap::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(flat, nested);
}

#[test]
fn test_from_flat_dimension_overflow() {
    let err = Heightmap::from_flat(vec![0; 4], usize::MAX / 2 + 1, 3).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_from_flat_length_mismatch() {
    let err = Heightmap::from_flat(vec![1, 2, 3], 2, 2).unwrap_err();
    assert_eq!(err.kind(), "malformed_grid");
}

// ============================================================================
// from_f64_rows tests
// ============================================================================

#[test]
fn test_from_f64_integral_values() {
    let hm = Heightmap::from_f64_rows(vec![vec![64.0, -3.0], vec![0.0, 255.0]]).unwrap();
    assert_eq!(hm.get(1, 0), Some(-3));
    assert_eq!(hm.get(1, 1), Some(255));
}

#[test]
fn test_from_f64_rejects_nan() {
    let err = Heightmap::from_f64_rows(vec![vec![1.0, f64::NAN], vec![3.0, 4.0]]).unwrap_err();
    assert!(matches!(err, TopoError::MalformedGrid(_)));
}

#[test]
fn test_from_f64_rejects_out_of_range() {
    let err = Heightmap::from_f64_rows(vec![vec![1.0, 1e12], vec![3.0, 4.0]]).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
