//! Shared application state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tourbench_config::{AppConfig, BenchmarkSection};
use tourbench_core::Result;
use tourbench_solver::{
    BruteForceSolver, Comparator, ExternalTermination, HeldKarpSolver, OrTermination, Termination,
    TimeTermination,
};
use tracing::warn;

use crate::error::ApiError;

/// State shared by every request.
#[derive(Debug)]
pub struct AppState {
    comparator: Comparator,
    solves: Arc<Semaphore>,
    solve_timeout: Option<Duration>,
    benchmark: BenchmarkSection,
}

impl AppState {
    /// Creates state from the default configuration.
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let comparator = Comparator::new()
            .with_brute_force(
                BruteForceSolver::new().with_max_cities(config.limits.brute_force_max_cities),
            )
            .with_held_karp(
                HeldKarpSolver::new().with_max_cities(config.limits.held_karp_max_cities),
            );

        Self {
            comparator,
            solves: Arc::new(Semaphore::new(config.server.max_concurrent_solves.max(1))),
            solve_timeout: config.server.solve_timeout(),
            benchmark: config.benchmark.clone(),
        }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn benchmark(&self) -> &BenchmarkSection {
        &self.benchmark
    }

    /// Solve slots currently free.
    pub fn available_solves(&self) -> usize {
        self.solves.available_permits()
    }

    /// Runs `job` on the blocking pool once a solve slot is free.
    ///
    /// The job receives a termination that fires when the request times out:
    /// the worker watches its own deadline and also stops once the request
    /// side gives up and raises the cancellation flag. The slot stays taken
    /// until the job itself returns.
    pub async fn run_blocking<T, F>(&self, job: F) -> std::result::Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn Termination) -> Result<T> + Send + 'static,
    {
        let permit = self
            .solves
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let limit = self.solve_timeout;
        let task = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            with_termination(&flag, limit, job)
        });

        let joined = match self.solve_timeout {
            Some(limit) => match tokio::time::timeout(limit, task).await {
                Ok(joined) => joined,
                Err(_) => {
                    cancel.store(true, Ordering::SeqCst);
                    warn!(event = "solve_timeout", timeout_ms = limit.as_millis() as u64);
                    return Err(ApiError::Timeout(limit));
                }
            },
            None => task.await,
        };

        let outcome = joined.map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(outcome?)
    }
}

// Builds the termination a blocking job polls: the cancellation flag, plus a
// deadline when the request has a timeout.
fn with_termination<R>(
    flag: &AtomicBool,
    limit: Option<Duration>,
    job: impl FnOnce(&dyn Termination) -> R,
) -> R {
    let cancelled = ExternalTermination::new(flag);
    match limit {
        Some(limit) => job(&OrTermination(cancelled, TimeTermination::new(limit))),
        None => job(&cancelled),
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbench_core::TourBenchError;

    #[tokio::test]
    async fn test_permit_released_after_job() {
        let state = AppState::from_config(&AppConfig::default());
        assert_eq!(state.available_solves(), 4);
        let value = state.run_blocking(|_| Ok(21 * 2)).await.unwrap();
        assert_eq!(value, 42);
        assert_eq!(state.available_solves(), 4);
    }

    #[tokio::test]
    async fn test_job_error_is_forwarded() {
        let state = AppState::new();
        let err = state
            .run_blocking(|_| Err::<(), _>(TourBenchError::Config("bad".into())))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Solver(TourBenchError::Config(_))));
    }

    #[tokio::test]
    async fn test_timed_out_job_stops() {
        let state = AppState::from_config(&AppConfig::default().with_solve_timeout_secs(1));
        let (tx, rx) = std::sync::mpsc::channel();
        let err = state
            .run_blocking(move |termination| {
                while !termination.is_terminated() {
                    std::thread::sleep(Duration::from_millis(5));
                }
                let _ = tx.send(());
                Err::<(), _>(TourBenchError::Cancelled)
            })
            .await
            .unwrap_err();

        // Either side may notice the deadline first.
        assert_eq!(err.status(), axum::http::StatusCode::GATEWAY_TIMEOUT);
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn test_worker_watches_its_own_deadline() {
        let flag = AtomicBool::new(false);
        assert!(with_termination(&flag, Some(Duration::ZERO), |t| t.is_terminated()));
        assert!(!with_termination(&flag, Some(Duration::from_secs(3600)), |t| t
            .is_terminated()));
        assert!(!with_termination(&flag, None, |t| t.is_terminated()));

        flag.store(true, Ordering::SeqCst);
        assert!(with_termination(&flag, Some(Duration::from_secs(3600)), |t| t
            .is_terminated()));
    }
}
