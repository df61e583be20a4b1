//! Scoped handles for background work spawned on the tokio runtime.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A repeating job that runs until the handle is stopped or dropped.
///
/// The first run happens immediately, later runs every `period`. A slow run
/// delays the next one instead of bursting to catch up.
pub struct RepeatingTask {
    handle: JoinHandle<()>,
}

impl RepeatingTask {
    /// Spawn `job` on the current runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    pub fn spawn<F, Fut>(period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                job().await;
            }
        });

        Self { handle }
    }

    /// Whether the underlying task has exited (it only does so when aborted)
    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the task, including any run currently in flight
    pub fn stop(self) {
        // Drop does the abort
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
