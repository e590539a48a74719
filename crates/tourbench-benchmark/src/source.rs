//! Where benchmark matrices come from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourbench_core::{
    DistanceMatrix, Result, TourBenchError, ValidationError, MAX_CITIES, MIN_CITIES,
};

/// Supplies one distance matrix per benchmarked city count.
///
/// Implemented for any `FnMut(usize) -> Result<DistanceMatrix>` closure.
pub trait MatrixSource {
    /// Returns a matrix with exactly `n` cities.
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix>;

    /// Short label used in reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> MatrixSource for F
where
    F: FnMut(usize) -> Result<DistanceMatrix>,
{
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix> {
        self(n)
    }
}

/// Builds a random symmetric matrix of integer distances.
///
/// Every ordered pair `(i, j)` draws an integer uniformly from
/// `[min_distance, max_distance)`; the pair is then symmetrized as
/// `floor((a[i][j] + a[j][i]) / 2)` and the diagonal is zeroed, so the result
/// stays inside the drawn range.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tourbench_benchmark::random_matrix;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let matrix = random_matrix(5, 1, 100, &mut rng).unwrap();
/// assert_eq!(matrix.size(), 5);
/// assert_eq!(matrix.get(1, 3), matrix.get(3, 1));
/// ```
pub fn random_matrix<R: Rng + ?Sized>(
    n: usize,
    min_distance: u32,
    max_distance: u32,
    rng: &mut R,
) -> Result<DistanceMatrix> {
    if min_distance >= max_distance {
        return Err(TourBenchError::Config(format!(
            "distance range [{min_distance}, {max_distance}) is empty"
        )));
    }
    if !(MIN_CITIES..=MAX_CITIES).contains(&n) {
        return Err(ValidationError::SizeOutOfRange {
            n,
            min: MIN_CITIES,
            max: MAX_CITIES,
        }
        .into());
    }

    let draws: Vec<Vec<u32>> = (0..n)
        .map(|_| {
            (0..n)
                .map(|_| rng.random_range(min_distance..max_distance))
                .collect()
        })
        .collect();

    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        let sum = u64::from(draws[i][j]) + u64::from(draws[j][i]);
                        (sum / 2) as f64
                    }
                })
                .collect()
        })
        .collect();

    Ok(DistanceMatrix::from_rows(&rows)?)
}

/// Fresh random matrices for every size.
#[derive(Debug, Clone)]
pub struct RandomMatrixSource {
    rng: ChaCha8Rng,
    min_distance: u32,
    max_distance: u32,
}

impl RandomMatrixSource {
    /// Default range of drawn distances, `[1, 100)`.
    pub const DEFAULT_RANGE: (u32, u32) = (1, 100);

    /// Seeds from operating-system entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// Seeds deterministically, so the same seed yields the same matrices.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        let (min_distance, max_distance) = Self::DEFAULT_RANGE;
        Self {
            rng,
            min_distance,
            max_distance,
        }
    }

    /// Draws distances from `[min_distance, max_distance)` instead.
    pub fn with_distance_range(mut self, min_distance: u32, max_distance: u32) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }
}

impl Default for RandomMatrixSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixSource for RandomMatrixSource {
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix> {
        random_matrix(n, self.min_distance, self.max_distance, &mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

// Leading 6x6 block is the six-city example graph.
const CANONICAL: [[f64; MAX_CITIES]; MAX_CITIES] = [
    [0.0, 10.0, 15.0, 20.0, 25.0, 30.0, 81.0, 51.0, 21.0, 74.0, 44.0, 14.0, 67.0, 37.0, 90.0],
    [10.0, 0.0, 35.0, 25.0, 20.0, 15.0, 30.0, 13.0, 79.0, 62.0, 45.0, 28.0, 94.0, 77.0, 60.0],
    [15.0, 35.0, 0.0, 30.0, 18.0, 12.0, 62.0, 58.0, 54.0, 50.0, 46.0, 42.0, 38.0, 34.0, 30.0],
    [20.0, 25.0, 30.0, 0.0, 15.0, 28.0, 94.0, 20.0, 29.0, 38.0, 47.0, 56.0, 65.0, 74.0, 83.0],
    [25.0, 20.0, 18.0, 15.0, 0.0, 10.0, 43.0, 65.0, 87.0, 26.0, 48.0, 70.0, 92.0, 31.0, 53.0],
    [30.0, 15.0, 12.0, 28.0, 10.0, 0.0, 75.0, 27.0, 62.0, 14.0, 49.0, 84.0, 36.0, 71.0, 23.0],
    [81.0, 30.0, 62.0, 94.0, 43.0, 75.0, 0.0, 72.0, 37.0, 85.0, 50.0, 15.0, 63.0, 28.0, 76.0],
    [51.0, 13.0, 58.0, 20.0, 65.0, 27.0, 72.0, 0.0, 12.0, 73.0, 51.0, 29.0, 90.0, 68.0, 46.0],
    [21.0, 79.0, 54.0, 29.0, 87.0, 62.0, 37.0, 12.0, 0.0, 61.0, 52.0, 43.0, 34.0, 25.0, 16.0],
    [74.0, 62.0, 50.0, 38.0, 26.0, 14.0, 85.0, 73.0, 61.0, 0.0, 53.0, 57.0, 61.0, 65.0, 69.0],
    [44.0, 45.0, 46.0, 47.0, 48.0, 49.0, 50.0, 51.0, 52.0, 53.0, 0.0, 71.0, 88.0, 22.0, 39.0],
    [14.0, 28.0, 42.0, 56.0, 70.0, 84.0, 15.0, 29.0, 43.0, 57.0, 71.0, 0.0, 32.0, 62.0, 92.0],
    [67.0, 94.0, 38.0, 65.0, 92.0, 36.0, 63.0, 90.0, 34.0, 61.0, 88.0, 32.0, 0.0, 19.0, 62.0],
    [37.0, 77.0, 34.0, 74.0, 31.0, 71.0, 28.0, 68.0, 25.0, 65.0, 22.0, 62.0, 19.0, 0.0, 32.0],
    [90.0, 60.0, 30.0, 83.0, 53.0, 23.0, 76.0, 46.0, 16.0, 69.0, 39.0, 92.0, 62.0, 32.0, 0.0],
];

/// The fixed 15-city matrix behind [`ExampleMatrixSource`].
pub fn canonical_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(&CANONICAL).expect("canonical matrix is valid")
}

/// The six-city example graph.
///
/// Its optimal cycle, `0 -> 1 -> 3 -> 4 -> 5 -> 2 -> 0`, costs 87.
pub fn example_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(&CANONICAL[..6].iter().map(|row| &row[..6]).collect::<Vec<_>>())
        .expect("example matrix is valid")
}

/// Deterministic matrices: the leading `n x n` block of [`canonical_matrix`].
#[derive(Debug, Clone)]
pub struct ExampleMatrixSource {
    canonical: DistanceMatrix,
}

impl ExampleMatrixSource {
    pub fn new() -> Self {
        Self {
            canonical: canonical_matrix(),
        }
    }
}

impl Default for ExampleMatrixSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixSource for ExampleMatrixSource {
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix> {
        Ok(self.canonical.leading(n)?)
    }

    fn name(&self) -> &str {
        "example"
    }
}

/// A single caller-supplied matrix, served only for its own size.
#[derive(Debug, Clone)]
pub struct FixedMatrixSource {
    matrix: DistanceMatrix,
}

impl FixedMatrixSource {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }
}

impl MatrixSource for FixedMatrixSource {
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix> {
        let size = self.matrix.size();
        if n != size {
            return Err(ValidationError::SizeOutOfRange {
                n,
                min: size,
                max: size,
            }
            .into());
        }
        Ok(self.matrix.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
