//! Processing-status monitoring.
//!
//! The library server publishes batch progress on a status topic as JSON
//! counter payloads. [`ProcessMonitor`] decodes those payloads into a
//! [`ProgressTracker`] so any number of observers can follow the current
//! batch. A payload marks the batch active; [`mark_idle`] clears it when the
//! topic reports completion or the subscription drops.
//!
//! [`mark_idle`]: ProcessMonitor::mark_idle

use longbox_core::{ConnectionGuard, ProgressTracker, ProgressUpdate, Signal};
use serde::{Deserialize, Serialize};

/// Wire payload of the processing-status topic.
///
/// Matches the server JSON field for field, camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatusMessage {
    /// Epoch timestamp (ms) when the batch started.
    pub started: i64,
    /// Name of the current batch step.
    pub step_name: String,
    /// Total number of items in the current step.
    pub total: u64,
    /// Number of items processed so far.
    pub processed: u64,
}

/// Mirrors server-reported batch progress for observers.
#[derive(Clone, Debug, Default)]
pub struct ProcessMonitor {
    tracker: ProgressTracker,
}

impl ProcessMonitor {
    pub fn new() -> Self {
        Self {
            tracker: ProgressTracker::new(),
        }
    }

    /// Feeds a decoded status payload into the tracker.
    ///
    /// Every payload marks the batch active; the server stops publishing
    /// when the batch ends and the caller reports that via
    /// [`mark_idle`](Self::mark_idle).
    pub fn handle_message(&self, message: ProcessStatusMessage) {
        tracing::trace!(
            target: "longbox::process",
            step = %message.step_name,
            processed = message.processed,
            total = message.total,
            "processing status received"
        );
        self.tracker.update(
            true,
            message.step_name,
            message.started,
            message.total,
            message.processed,
        );
    }

    /// Clears the counters and deactivates the batch display.
    pub fn mark_idle(&self) {
        tracing::trace!(target: "longbox::process", "processing idle");
        self.tracker.reset();
    }

    /// Whether a batch is currently running.
    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Current counters.
    pub fn snapshot(&self) -> ProgressUpdate {
        self.tracker.snapshot()
    }

    /// Derived completion percentage, or `None` while the total is zero.
    pub fn percentage(&self) -> Option<f64> {
        self.tracker.percentage()
    }

    /// Signal emitted with every new snapshot.
    pub fn on_updated(&self) -> &Signal<ProgressUpdate> {
        self.tracker.on_updated()
    }

    /// Subscribes an observer for the lifetime of the returned guard.
    ///
    /// Dropping the guard disconnects the observer; views use this to tie
    /// their subscription to their own lifetime.
    pub fn observe<F>(&self, observer: F) -> ConnectionGuard<ProgressUpdate>
    where
        F: Fn(&ProgressUpdate) + Send + Sync + 'static,
    {
        self.tracker.on_updated().connect_scoped(observer)
    }
}
