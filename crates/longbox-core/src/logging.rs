//! Logging facilities for Longbox.
//!
//! Longbox uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Model mutations log at `trace` level; use the target constants below to
//! filter a single subsystem, e.g.
//! `RUST_LOG=longbox::model=trace cargo test`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "longbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "longbox_core::signal";
    /// Progress tracking target.
    pub const PROGRESS: &str = "longbox_core::progress";
    /// Model/view layer target (domain crate).
    pub const MODEL: &str = "longbox::model";
    /// Command dispatch target (domain crate).
    pub const DISPATCH: &str = "longbox::dispatch";
    /// Processing-status target (domain crate).
    pub const PROCESS: &str = "longbox::process";
}
