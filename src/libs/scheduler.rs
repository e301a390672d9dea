//! Cancellable periodic task scheduler.
//!
//! Periodic work is registered through [`spawn_periodic`], which returns a
//! [`TaskHandle`] the owner must hold on to. Releasing (or dropping) the
//! handle aborts the task at its next await point, so no pending tick can
//! fire after cancellation. Missed ticks are skipped rather than bursted -
//! a suspended task does not catch up when it resumes.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owning handle for a periodic task. The task is aborted when the handle
/// is released or dropped.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Stops the task immediately.
    pub fn release(self) {
        // Drop aborts.
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns `f` to run every `period`, starting one period from now.
///
/// Must be called from within a tokio runtime.
pub fn spawn_periodic<F>(name: &'static str, period: Duration, mut f: F) -> TaskHandle
where
    F: FnMut() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // callback first fires a full period after registration.
        interval.tick().await;
        loop {
            interval.tick().await;
            f();
        }
    });

    TaskHandle { name, handle }
}
