use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use slotbook_app::polling::PollingCell;

fn counting_cell(every: Duration) -> (PollingCell<u64>, Arc<AtomicU64>) {
    let fetches = Arc::new(AtomicU64::new(0));
    let cell = PollingCell::spawn("test", every, {
        let fetches = Arc::clone(&fetches);
        move || {
            let fetches = Arc::clone(&fetches);
            async move { fetches.fetch_add(1, Ordering::SeqCst) + 1 }
        }
    });
    (cell, fetches)
}

/// Lets the spawned refresh task run on the current-thread test runtime.
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_loading_until_the_first_fetch_lands() {
    let (cell, _) = counting_cell(Duration::from_secs(30));

    assert!(cell.is_loading().await);
    assert_eq!(cell.get().await, None);

    settle().await;

    assert!(!cell.is_loading().await);
    assert_eq!(cell.get().await, Some(1));
    assert!(cell.refreshed_at().await.is_some());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_interval_refreshes_keep_coming() {
    let (cell, fetches) = counting_cell(Duration::from_secs(30));
    settle().await;
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;
    assert_eq!(cell.get().await, Some(2));

    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;
    assert_eq!(cell.get().await, Some(3));
}

#[tokio::test(start_paused = true)]
async fn test_invalidate_refetches_without_waiting_for_the_interval() {
    let (cell, fetches) = counting_cell(Duration::from_secs(30));
    settle().await;
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    cell.invalidate();
    settle().await;

    // No virtual time passed; only the forced refresh ran.
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert_eq!(cell.get().await, Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_stale_value_keeps_serving_while_a_refresh_is_due() {
    let (cell, _) = counting_cell(Duration::from_secs(30));
    settle().await;

    cell.invalidate();
    // Before the refresh task gets a chance to run, reads still see the
    // previous value rather than flipping back to loading.
    assert_eq!(cell.get().await, Some(1));
    assert!(!cell.is_loading().await);
}
