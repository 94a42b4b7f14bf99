//! Core systems for Longbox.
//!
//! This crate provides the foundational components of the Longbox model layer:
//!
//! - **Signal/Slot System**: Type-safe change notification with RAII
//!   connection guards for scoped subscriptions
//! - **Progress Tracking**: Server-reported batch counters with derived
//!   percentage
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use longbox_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod progress;
pub mod signal;

pub use error::{CoreError, Result, SignalError};
pub use progress::{ProgressTracker, ProgressUpdate};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
