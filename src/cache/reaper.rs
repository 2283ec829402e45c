//! Background expiry for the TTL cache
//!
//! The reaper wakes once per TTL, sweeps stale entries and goes back to sleep.
//! It runs under a supervisor that logs and restarts the sweep loop if it
//! panics, so a fault never leaves the cache growing without bound unnoticed.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{debug, error};

use super::ttl::Shared;

/// Shortest sweep period, used when the cache is built with a zero TTL
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Spawns the supervised reaper for `shared`
pub(super) fn spawn(shared: Arc<Shared>, shutdown_rx: watch::Receiver<bool>) {
    tokio::spawn(supervise(shutdown_rx, move |shutdown| {
        sweep_loop(Arc::clone(&shared), shutdown)
    }));
}

/// Runs `run` until it returns normally, restarting it after every panic.
pub(super) async fn supervise<F, Fut>(shutdown_rx: watch::Receiver<bool>, mut run: F)
where
    F: FnMut(watch::Receiver<bool>) -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        let result = AssertUnwindSafe(run(shutdown_rx.clone()))
            .catch_unwind()
            .await;

        match result {
            Ok(()) => break,
            Err(panic) => {
                error!(
                    panic = %panic_message(panic.as_ref()),
                    "cache reaper panicked, restarting"
                );
                if *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }
}

/// Sweeps `shared` once per TTL until told to stop or every cache handle is gone
async fn sweep_loop(shared: Arc<Shared>, mut shutdown_rx: watch::Receiver<bool>) {
    // `interval` panics on a zero period.
    let period = shared.ttl().max(MIN_PERIOD);
    let mut interval = time::interval(period);
    // Skip the first tick (immediate)
    interval.tick().await;

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            biased;

            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
            _ = interval.tick() => {
                let removed = shared.sweep(Instant::now());
                if removed > 0 {
                    debug!(removed, "cache sweep evicted stale entries");
                }
            }
        }
    }

    debug!("cache reaper stopped");
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
