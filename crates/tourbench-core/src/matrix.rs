//! Validated distance matrices.
//!
//! A [`DistanceMatrix`] is an `n x n` table of non-negative, finite distances
//! with a zero diagonal and `d[i][j] == d[j][i]`. The only way to build one is
//! through validation, so solvers can rely on those invariants without
//! re-checking them.

use std::fmt;

use crate::error::ValidationError;

/// Smallest number of cities a matrix may have.
pub const MIN_CITIES: usize = 3;

/// Largest number of cities a matrix may have.
///
/// Brute force performs `(n-1)!` evaluations, so at 15 cities this is already
/// `14!` (about 87 billion) cycles.
pub const MAX_CITIES: usize = 15;

/// A square, symmetric, zero-diagonal table of non-negative distances.
///
/// Stored flattened in row-major order. Immutable once constructed.
///
/// # Example
///
/// ```
/// use tourbench_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(&[
///     [0.0, 1.0, 2.0],
///     [1.0, 0.0, 3.0],
///     [2.0, 3.0, 0.0],
/// ]).unwrap();
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(1, 2), 3.0);
/// assert_eq!(matrix.cycle_cost(&[0, 1, 2]), 6.0);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Validates `rows` and builds a matrix from them.
    ///
    /// Reports the first violated invariant; see [`validate_and_load`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ValidationError> {
        validate_and_load(rows)
    }

    /// Returns every invariant violation found in `rows`, in scan order.
    ///
    /// An empty vector means the table is a valid matrix. When a row has the
    /// wrong length the cell scan is skipped, so only shape errors (and a
    /// size error, if any) are reported in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tourbench_core::{DistanceMatrix, ValidationError};
    ///
    /// let problems = DistanceMatrix::violations(&[
    ///     [0.0, 1.0, -2.0],
    ///     [4.0, 0.0, 3.0],
    ///     [-2.0, 3.0, 0.0],
    /// ]);
    /// assert_eq!(problems.len(), 3);
    /// assert!(matches!(problems[0], ValidationError::Asymmetric { row: 0, col: 1, .. }));
    /// ```
    pub fn violations<R: AsRef<[f64]>>(rows: &[R]) -> Vec<ValidationError> {
        let mut found = Vec::new();
        scan(rows, |err| {
            found.push(err);
            true
        });
        found
    }

    /// Returns the number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "city index out of range");
        self.data[from * self.n + to]
    }

    /// Returns the distances from city `from` to every city.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.n..(from + 1) * self.n]
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n).map(<[f64]>::to_vec).collect()
    }

    /// Returns the leading `n x n` block of this matrix.
    ///
    /// Any principal submatrix of a valid matrix is itself valid, so only the
    /// size bound is checked.
    pub fn leading(&self, n: usize) -> Result<Self, ValidationError> {
        if !(MIN_CITIES..=self.n).contains(&n) {
            return Err(ValidationError::SizeOutOfRange {
                n,
                min: MIN_CITIES,
                max: self.n,
            });
        }
        let data = (0..n)
            .flat_map(|i| self.row(i)[..n].iter().copied())
            .collect();
        Ok(Self { n, data })
    }

    /// Returns the length of the closed cycle visiting `path` in order and
    /// returning to `path[0]`.
    ///
    /// Paths with fewer than two cities have cost 0.
    ///
    /// # Panics
    ///
    /// Panics if any city in `path` is out of range.
    pub fn cycle_cost(&self, path: &[usize]) -> f64 {
        match (path.first(), path.last()) {
            (Some(&first), Some(&last)) if path.len() > 1 => {
                let open: f64 = path.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceMatrix")
            .field("n", &self.n)
            .field("rows", &self.to_rows())
            .finish()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        validate_and_load(&rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Checks every matrix invariant and loads `rows` into a [`DistanceMatrix`].
///
/// Fails on the first violation found. The checks run in this order:
/// 1. city count within `[MIN_CITIES, MAX_CITIES]`
/// 2. every row has exactly `n` entries
/// 3. a row-major cell scan; for each `(i, j)`: finiteness, sign, zero
///    diagonal, and (for `j > i`) symmetry against `(j, i)`
/// 4. the largest distance times `n` is finite, so no cycle length overflows
pub fn validate_and_load<R: AsRef<[f64]>>(rows: &[R]) -> Result<DistanceMatrix, ValidationError> {
    let mut first = None;
    scan(rows, |err| {
        first = Some(err);
        false
    });
    if let Some(err) = first {
        return Err(err);
    }

    let n = rows.len();
    let data = rows
        .iter()
        .flat_map(|row| row.as_ref().iter().copied())
        .collect();
    Ok(DistanceMatrix { n, data })
}

// Walks the table in check order, handing each violation to `report`.
// `report` returns whether the scan should continue.
fn scan<R, F>(rows: &[R], mut report: F)
where
    R: AsRef<[f64]>,
    F: FnMut(ValidationError) -> bool,
{
    let n = rows.len();

    if !(MIN_CITIES..=MAX_CITIES).contains(&n)
        && !report(ValidationError::SizeOutOfRange {
            n,
            min: MIN_CITIES,
            max: MAX_CITIES,
        })
    {
        return;
    }

    let mut square = true;
    for (row, cells) in rows.iter().enumerate() {
        let len = cells.as_ref().len();
        if len != n {
            square = false;
            if !report(ValidationError::NotSquare {
                row,
                len,
                expected: n,
            }) {
                return;
            }
        }
    }
    if !square {
        return;
    }

    let mut largest = 0.0_f64;
    for (i, cells) in rows.iter().enumerate() {
        for (j, &value) in cells.as_ref().iter().enumerate() {
            if !value.is_finite() {
                if !report(ValidationError::NonFinite { row: i, col: j }) {
                    return;
                }
                continue;
            }
            largest = largest.max(value);
            if value < 0.0
                && !report(ValidationError::Negative {
                    row: i,
                    col: j,
                    value,
                })
            {
                return;
            }
            if i == j {
                if value != 0.0 && !report(ValidationError::NonZeroDiagonal { index: i, value }) {
                    return;
                }
                continue;
            }
            if j > i {
                let mirror = rows[j].as_ref()[i];
                if mirror.is_finite()
                    && value != mirror
                    && !report(ValidationError::Asymmetric {
                        row: i,
                        col: j,
                        forward: value,
                        backward: mirror,
                    })
                {
                    return;
                }
            }
        }
    }

    // A cycle has n edges, so n * largest bounds every cycle length.
    if !(largest * n as f64).is_finite() {
        report(ValidationError::CycleOverflow { n, largest });
    }
}
