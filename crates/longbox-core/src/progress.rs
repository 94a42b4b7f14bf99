//! Progress reporting for server-driven batch operations.
//!
//! The library server reports batch progress (import, processing) as raw
//! counters over a status topic. This module holds those counters in a
//! thread-safe tracker and notifies observers via signals; the percentage is
//! derived on demand and is undefined while the total is zero.
//!
//! # Example
//!
//! ```
//! use longbox_core::progress::ProgressTracker;
//!
//! let tracker = ProgressTracker::new();
//!
//! tracker.on_updated().connect(|update| {
//!     match update.percentage() {
//!         Some(pct) => println!("{}: {:.0}%", update.step_name, pct),
//!         None => println!("{}: waiting", update.step_name),
//!     }
//! });
//!
//! tracker.update(true, "load-file-contents", 1700000000, 100, 25);
//! assert_eq!(tracker.percentage(), Some(25.0));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::signal::Signal;

/// A snapshot of batch progress counters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressUpdate {
    /// Whether a batch is currently running.
    pub active: bool,
    /// Name of the current batch step.
    pub step_name: String,
    /// Epoch timestamp (ms) when the batch started.
    pub started: i64,
    /// Total number of items in the current step.
    pub total: u64,
    /// Number of items processed so far.
    pub processed: u64,
}

impl ProgressUpdate {
    /// Derived completion percentage in `[0, 100]`.
    ///
    /// Returns `None` while `total` is zero: the percentage is undefined and
    /// observers are expected to hide their progress display rather than
    /// show 0%.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.processed as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Internal state shared between ProgressTracker handles.
struct ProgressTrackerInner {
    state: Mutex<ProgressUpdate>,
    /// Signal emitted after every state change.
    updated: Signal<ProgressUpdate>,
}

/// A thread-safe tracker for server-reported progress counters.
///
/// `ProgressTracker` is a cloneable handle over shared state. Feeding it a
/// status update stores the counters and emits the `updated` signal with the
/// new snapshot.
#[derive(Clone)]
pub struct ProgressTracker {
    inner: Arc<ProgressTrackerInner>,
}

impl ProgressTracker {
    /// Create a new tracker in the idle state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ProgressTrackerInner {
                state: Mutex::new(ProgressUpdate::default()),
                updated: Signal::new(),
            }),
        }
    }

    /// Store a full set of counters and notify observers.
    pub fn update(
        &self,
        active: bool,
        step_name: impl Into<String>,
        started: i64,
        total: u64,
        processed: u64,
    ) {
        let snapshot = ProgressUpdate {
            active,
            step_name: step_name.into(),
            started,
            total,
            processed,
        };
        tracing::trace!(
            target: "longbox_core::progress",
            step = %snapshot.step_name,
            total = snapshot.total,
            processed = snapshot.processed,
            "progress updated"
        );
        *self.inner.state.lock() = snapshot.clone();
        self.inner.updated.emit(snapshot);
    }

    /// Reset to the idle state and notify observers.
    pub fn reset(&self) {
        *self.inner.state.lock() = ProgressUpdate::default();
        self.inner.updated.emit(ProgressUpdate::default());
    }

    /// Get the current counters.
    pub fn snapshot(&self) -> ProgressUpdate {
        self.inner.state.lock().clone()
    }

    /// Whether a batch is currently running.
    pub fn is_active(&self) -> bool {
        self.inner.state.lock().active
    }

    /// Derived completion percentage, or `None` while the total is zero.
    pub fn percentage(&self) -> Option<f64> {
        self.inner.state.lock().percentage()
    }

    /// Get a reference to the update signal.
    ///
    /// Emitted after every call to [`update`](Self::update) or
    /// [`reset`](Self::reset) with the new snapshot.
    pub fn on_updated(&self) -> &Signal<ProgressUpdate> {
        &self.inner.updated
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.snapshot();
        f.debug_struct("ProgressTracker")
            .field("active", &state.active)
            .field("step_name", &state.step_name)
            .field("total", &state.total)
            .field("processed", &state.processed)
            .finish()
    }
}

// Ensure ProgressTracker is Send + Sync
static_assertions::assert_impl_all!(ProgressTracker: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_initial_state() {
        let tracker = ProgressTracker::new();
        assert!(!tracker.is_active());
        assert_eq!(tracker.snapshot().total, 0);
        assert_eq!(tracker.percentage(), None);
    }

    #[test]
    fn test_percentage() {
        let tracker = ProgressTracker::new();
        tracker.update(true, "load-file-contents", 0, 100, 25);
        assert_eq!(tracker.percentage(), Some(25.0));

        tracker.update(true, "load-file-contents", 0, 100, 100);
        assert_eq!(tracker.percentage(), Some(100.0));
    }

    #[test]
    fn test_percentage_undefined_for_zero_total() {
        let tracker = ProgressTracker::new();
        // A started batch may report its step before the total is known.
        tracker.update(true, "create-metadata-source", 0, 0, 0);
        assert_eq!(tracker.percentage(), None);
    }

    #[test]
    fn test_update_signal() {
        let tracker = ProgressTracker::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        tracker.on_updated().connect(move |update| {
            received_clone.lock().push(update.clone());
        });

        tracker.update(true, "step-one", 10, 4, 1);
        tracker.update(true, "step-one", 10, 4, 2);

        let updates = received.lock();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].processed, 1);
        assert_eq!(updates[1].processed, 2);
        assert!(updates[1].active);
    }

    #[test]
    fn test_reset() {
        let tracker = ProgressTracker::new();
        tracker.update(true, "step-one", 10, 4, 2);
        tracker.reset();

        assert!(!tracker.is_active());
        assert_eq!(tracker.snapshot(), ProgressUpdate::default());
    }

    #[test]
    fn test_tracker_clone_shares_state() {
        let tracker1 = ProgressTracker::new();
        let tracker2 = tracker1.clone();

        tracker1.update(true, "step-one", 0, 10, 5);
        assert_eq!(tracker2.percentage(), Some(50.0));
    }
}
