//! Solver outcomes.

use std::fmt;
use std::time::Duration;

/// The exact algorithm that produced a [`TourResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Enumeration of every Hamiltonian cycle anchored at city 0.
    #[cfg_attr(feature = "serde", serde(rename = "Brute Force"))]
    BruteForce,

    /// Subset dynamic programming (Bellman-Held-Karp).
    #[cfg_attr(feature = "serde", serde(rename = "Bellman-Held-Karp"))]
    HeldKarp,
}

impl Method {
    /// Every method, in comparison order (brute force first).
    pub const ALL: [Method; 2] = [Method::BruteForce, Method::HeldKarp];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::BruteForce => "Brute Force",
            Method::HeldKarp => "Bellman-Held-Karp",
        }
    }

    /// What the method's `work_count` counts.
    pub fn work_unit(&self) -> &'static str {
        match self {
            Method::BruteForce => "paths explored",
            Method::HeldKarp => "states computed",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One solver's outcome on one matrix.
///
/// `path` is a permutation of `0..n` starting at the anchor city 0. It
/// describes a cycle: the edge from the last city back to 0 is implied and
/// included in `cost`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult {
    /// Algorithm that produced this result.
    pub method: Method,
    /// Total cycle length.
    pub cost: f64,
    /// Visit order, starting at city 0.
    pub path: Vec<usize>,
    /// Wall-clock duration of the solve.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "elapsed_time", with = "duration_secs")
    )]
    pub elapsed: Duration,
    /// Permutations evaluated (brute force) or DP states computed (Held-Karp).
    pub work_count: u64,
}

impl TourResult {
    /// Returns the solve time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Returns the path with the anchor repeated at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use tourbench_core::{Method, TourResult};
    ///
    /// let result = TourResult {
    ///     method: Method::HeldKarp,
    ///     cost: 6.0,
    ///     path: vec![0, 1, 2],
    ///     elapsed: Duration::ZERO,
    ///     work_count: 2,
    /// };
    /// assert_eq!(result.closed_path(), vec![0, 1, 2, 0]);
    /// ```
    pub fn closed_path(&self) -> Vec<usize> {
        let mut closed = self.path.clone();
        if let Some(&anchor) = self.path.first() {
            closed.push(anchor);
        }
        closed
    }

    /// Returns work units per second, or 0 for an unmeasurably fast solve.
    pub fn work_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.work_count as f64 / self.elapsed.as_secs_f64()
        }
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
