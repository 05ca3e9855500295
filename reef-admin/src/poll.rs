//! Periodic refresh with a request-sequence guard
//!
//! Views reload on an interval. Poll ticks are not coalesced and in-flight
//! requests are never cancelled, so a slow response can resolve after a
//! newer one; [`RefreshGuard`] hands out monotonic tickets and only the most
//! recently issued ticket may commit, keeping stale responses out of the
//! view state.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Monotonic ticket dispenser for load requests
#[derive(Debug, Default)]
pub struct RefreshGuard {
    latest: AtomicU64,
}

impl RefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new load request.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True iff the ticket belongs to the most recently issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Background refresher driving a shared view state
///
/// Each tick issues a ticket, runs the loader, and commits the result only
/// while the ticket is still current. Loader failures are logged and leave
/// the previous state in place until the next tick.
pub struct Refresher {
    task: JoinHandle<()>,
}

impl Refresher {
    /// Spawn the refresh loop.
    ///
    /// Loads run as detached tasks: stopping the refresher clears the
    /// interval timer only and does not cancel an in-flight request.
    pub fn spawn<T, E, F, Fut>(period: Duration, state: Arc<RwLock<T>>, loader: F) -> Self
    where
        T: Send + Sync + 'static,
        E: std::fmt::Display + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let guard = Arc::new(RefreshGuard::new());

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);

            loop {
                ticker.tick().await;

                let ticket = guard.begin();
                let guard = Arc::clone(&guard);
                let state = Arc::clone(&state);
                let load = loader();

                tokio::spawn(async move {
                    match load.await {
                        Ok(value) => {
                            if guard.is_current(ticket) {
                                *state.write().await = value;
                            } else {
                                tracing::debug!(ticket, "Discarding stale refresh result");
                            }
                        }
                        Err(error) => {
                            tracing::warn!(%error, ticket, "Refresh failed, keeping previous state");
                        }
                    }
                });
            }
        });

        Self { task }
    }

    /// Stop future ticks. In-flight requests are left to finish on their own.
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let guard = RefreshGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(second > first);
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let guard = RefreshGuard::new();
        let stale = guard.begin();
        let fresh = guard.begin();
        assert!(!guard.is_current(stale));
        assert!(guard.is_current(fresh));
    }

    #[tokio::test]
    async fn refresher_commits_loader_results() {
        let state = Arc::new(RwLock::new(0u32));
        let counter = Arc::new(AtomicU64::new(0));

        let loader_counter = Arc::clone(&counter);
        let refresher = Refresher::spawn(Duration::from_millis(10), Arc::clone(&state), move || {
            let n = loader_counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok::<u32, String>(n as u32) }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        refresher.stop();

        let value = *state.read().await;
        assert!(value >= 1, "state never updated");
    }

    #[tokio::test]
    async fn refresher_keeps_state_on_loader_error() {
        let state = Arc::new(RwLock::new(7u32));
        let refresher = Refresher::spawn(Duration::from_millis(10), Arc::clone(&state), || async {
            Err::<u32, String>("backend down".to_string())
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        refresher.stop();

        assert_eq!(*state.read().await, 7);
    }
}
