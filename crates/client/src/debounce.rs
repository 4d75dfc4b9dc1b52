//! Cancellable quiet-period timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Arms at most one pending callback at a time; arming again cancels the
/// previous timer, so a burst of inputs collapses to one firing.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run after `quiet` of silence. Must be called
    /// from within a tokio runtime.
    pub fn arm<Fut>(&mut self, quiet: Duration, callback: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            callback.await;
        }));
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
