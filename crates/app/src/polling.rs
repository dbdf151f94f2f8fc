use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

struct CellState<T> {
    value: Option<T>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// One polled data dependency.
///
/// A spawned loop re-fetches on a fixed interval, also while the rest of
/// the app is idle, and immediately on [`invalidate`](Self::invalidate).
/// `get` returns `None` until the first fetch completes; that is the
/// loading indicator. Fetchers are infallible by construction: reads fail
/// open to a default value and the next poll retries, so a flaky backend
/// never poisons the cell. Superseded results simply overwrite
/// (last write wins); in-flight requests are not cancelled.
pub struct PollingCell<T> {
    state: Arc<RwLock<CellState<T>>>,
    refresh: Arc<Notify>,
    task: JoinHandle<()>,
}

impl<T: Clone + Send + Sync + 'static> PollingCell<T> {
    pub fn spawn<F, Fut>(label: &'static str, every: Duration, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send,
    {
        let state = Arc::new(RwLock::new(CellState {
            value: None,
            refreshed_at: None,
        }));
        let refresh = Arc::new(Notify::new());

        let task = tokio::spawn({
            let state = Arc::clone(&state);
            let refresh = Arc::clone(&refresh);
            async move {
                let mut ticker = tokio::time::interval(every);
                loop {
                    tokio::select! {
                        _ = ticker.tick() => {}
                        _ = refresh.notified() => {
                            // A forced refresh restarts the interval so the
                            // next timed fetch is a full period away.
                            ticker.reset();
                        }
                    }
                    let value = fetch().await;
                    let mut guard = state.write().await;
                    guard.value = Some(value);
                    guard.refreshed_at = Some(Utc::now());
                    drop(guard);
                    debug!(cell = label, "refreshed");
                }
            }
        });

        Self {
            state,
            refresh,
            task,
        }
    }

    /// Latest fetched value; `None` while the first fetch is outstanding.
    pub async fn get(&self) -> Option<T> {
        self.state.read().await.value.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.value.is_none()
    }

    pub async fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.refreshed_at
    }

    /// Schedules an immediate re-fetch. Doubles as the window-refocus
    /// hook. The stale value keeps serving until the new one lands.
    pub fn invalidate(&self) {
        self.refresh.notify_one();
    }
}

impl<T> Drop for PollingCell<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
