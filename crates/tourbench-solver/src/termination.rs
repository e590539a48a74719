//! Cooperative termination for long-running solves.
//!
//! Solvers poll their termination every [`CHECK_INTERVAL`](crate::CHECK_INTERVAL)
//! work units and abandon the solve with `TourBenchError::Cancelled` once it
//! fires. Nothing is returned from a cancelled solve.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Decides whether a running solve should stop.
pub trait Termination: Send + Sync + Debug {
    /// Returns true once the solve should be abandoned.
    fn is_terminated(&self) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self) -> bool {
        false
    }
}

/// Terminates when an external flag is set.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use tourbench_solver::termination::{ExternalTermination, Termination};
///
/// let flag = AtomicBool::new(false);
/// let term = ExternalTermination::new(&flag);
/// assert!(!term.is_terminated());
///
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_terminated());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Terminates once a wall-clock budget, counted from construction, is spent.
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    deadline: Instant,
    limit: Duration,
}

impl TimeTermination {
    /// Creates a termination that fires `limit` after now.
    pub fn new(limit: Duration) -> Self {
        Self {
            deadline: Instant::now() + limit,
            limit,
        }
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Returns the configured budget.
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Terminates when either inner termination fires.
#[derive(Debug, Clone, Copy)]
pub struct OrTermination<A, B>(pub A, pub B);

impl<A: Termination, B: Termination> Termination for OrTermination<A, B> {
    fn is_terminated(&self) -> bool {
        self.0.is_terminated() || self.1.is_terminated()
    }
}
