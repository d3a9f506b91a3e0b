//! Loading indicator for catalog batches.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::watch;

/// Tracks in-flight catalog loads.
///
/// A load holds a [`LoadingGuard`] for its whole batch; dropping the guard
/// clears the signal exactly once whether the batch succeeded or failed.
#[derive(Debug)]
pub struct LoadingIndicator {
    active: AtomicUsize,
    completed: AtomicU64,
    tx: watch::Sender<bool>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            active: AtomicUsize::new(0),
            completed: AtomicU64::new(0),
            tx,
        }
    }

    pub fn begin(&self) -> LoadingGuard<'_> {
        if self.active.fetch_add(1, Ordering::SeqCst) == 0 {
            self.tx.send_replace(true);
        }
        LoadingGuard { indicator: self }
    }

    pub fn is_loading(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }

    /// Number of batches that have finished, successfully or not.
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }

    /// Watch the loading flag (true while any batch is in flight).
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    fn finish(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        if self.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tx.send_replace(false);
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "dropping the guard immediately clears the loading signal"]
pub struct LoadingGuard<'a> {
    indicator: &'a LoadingIndicator,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.finish();
    }
}
