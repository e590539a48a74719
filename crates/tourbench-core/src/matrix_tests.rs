//! Tests for distance matrix validation

use super::error::ValidationError;
use super::matrix::*;

fn triangle() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 3.0],
        vec![2.0, 3.0, 0.0],
    ]
}

#[test]
fn test_valid_matrix_loads() {
    let matrix = validate_and_load(&triangle()).unwrap();
    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.row(2), &[2.0, 3.0, 0.0]);
    assert_eq!(matrix.to_rows(), triangle());
}

#[test]
fn test_asymmetric_pair_is_reported() {
    let mut rows = triangle();
    rows[1][0] = 5.0;

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Asymmetric {
            row: 0,
            col: 1,
            forward: 1.0,
            backward: 5.0,
        }
    );
}

#[test]
fn test_too_few_cities() {
    let rows = [[0.0, 1.0], [1.0, 0.0]];
    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::SizeOutOfRange {
            n: 2,
            min: MIN_CITIES,
            max: MAX_CITIES,
        }
    );
}

#[test]
fn test_empty_table() {
    let rows: Vec<Vec<f64>> = Vec::new();
    let err = validate_and_load(&rows).unwrap_err();
    assert!(matches!(err, ValidationError::SizeOutOfRange { n: 0, .. }));
}

#[test]
fn test_too_many_cities() {
    let n = MAX_CITIES + 1;
    let rows = vec![vec![0.0; n]; n];
    let err = validate_and_load(&rows).unwrap_err();
    assert!(matches!(err, ValidationError::SizeOutOfRange { n: 16, .. }));
}

#[test]
fn test_ragged_row() {
    let mut rows = triangle();
    rows[2].pop();

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NotSquare {
            row: 2,
            len: 2,
            expected: 3,
        }
    );
}

#[test]
fn test_nonzero_diagonal() {
    let mut rows = triangle();
    rows[1][1] = 4.0;

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonZeroDiagonal {
            index: 1,
            value: 4.0,
        }
    );
}

#[test]
fn test_negative_entry() {
    let mut rows = triangle();
    rows[0][2] = -2.0;
    rows[2][0] = -2.0;

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Negative {
            row: 0,
            col: 2,
            value: -2.0,
        }
    );
}

#[test]
fn test_nan_entry() {
    let mut rows = triangle();
    rows[2][1] = f64::NAN;

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(err, ValidationError::NonFinite { row: 2, col: 1 });
}

#[test]
fn test_violations_collects_everything() {
    let rows = [
        [1.0, 1.0, 2.0],
        [1.0, 0.0, 7.0],
        [2.0, 3.0, -1.0],
    ];
    let problems = DistanceMatrix::violations(&rows);
    assert_eq!(
        problems,
        vec![
            ValidationError::NonZeroDiagonal {
                index: 0,
                value: 1.0,
            },
            ValidationError::Asymmetric {
                row: 1,
                col: 2,
                forward: 7.0,
                backward: 3.0,
            },
            ValidationError::Negative {
                row: 2,
                col: 2,
                value: -1.0,
            },
            ValidationError::NonZeroDiagonal {
                index: 2,
                value: -1.0,
            },
        ]
    );
}

#[test]
fn test_cycle_length_overflow_is_rejected() {
    let mut rows = vec![vec![1e308; 4]; 4];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    let err = validate_and_load(&rows).unwrap_err();
    assert_eq!(
        err,
        ValidationError::CycleOverflow {
            n: 4,
            largest: 1e308,
        }
    );
}

#[test]
fn test_large_but_summable_distances_load() {
    let mut rows = vec![vec![1e306; 4]; 4];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    let matrix = validate_and_load(&rows).unwrap();
    assert!(matrix.cycle_cost(&[0, 1, 2, 3]).is_finite());
}

#[test]
fn test_violations_empty_for_valid_matrix() {
    assert!(DistanceMatrix::violations(&triangle()).is_empty());
}

#[test]
fn test_cycle_cost_closes_the_loop() {
    let matrix = DistanceMatrix::from_rows(&triangle()).unwrap();
    assert_eq!(matrix.cycle_cost(&[0, 1, 2]), 6.0);
    assert_eq!(matrix.cycle_cost(&[0, 2, 1]), 6.0);
    assert_eq!(matrix.cycle_cost(&[0]), 0.0);
    assert_eq!(matrix.cycle_cost(&[]), 0.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_cycle_cost_panics_on_unknown_city() {
    let matrix = DistanceMatrix::from_rows(&triangle()).unwrap();
    matrix.cycle_cost(&[0, 5]);
}

#[test]
fn test_leading_block() {
    let rows = [
        [0.0, 1.0, 2.0, 3.0],
        [1.0, 0.0, 4.0, 5.0],
        [2.0, 4.0, 0.0, 6.0],
        [3.0, 5.0, 6.0, 0.0],
    ];
    let matrix = DistanceMatrix::from_rows(&rows).unwrap();
    let block = matrix.leading(3).unwrap();
    assert_eq!(block.size(), 3);
    assert_eq!(block.get(1, 2), 4.0);
    assert!(matrix.leading(5).is_err());
    assert!(matrix.leading(2).is_err());
}

#[test]
fn test_try_from_nested_vec() {
    let matrix = DistanceMatrix::try_from(triangle()).unwrap();
    let rows: Vec<Vec<f64>> = matrix.into();
    assert_eq!(rows, triangle());
}
