//! Logging facilities for Horizon Pager.
//!
//! Horizon Pager uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_pager=debug")
//!         .init();
//! }
//! ```
//!
//! Every event is emitted under one of the constants in [`targets`], so a
//! single subsystem can be enabled with an `EnvFilter` directive such as
//! `horizon_pager::pager=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_pager_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_pager_core::signal";
    /// Tab strip target.
    pub const MENU: &str = "horizon_pager::menu";
    /// Pager controller target.
    pub const PAGER: &str = "horizon_pager::pager";
    /// Geometry and invalidation target.
    pub const LAYOUT: &str = "horizon_pager::layout";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_pager::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_pager::perf";
}

/// A guard for performance tracing spans.
///
/// Creates an `info`-level span under [`targets::PERF`] that stays entered
/// until the guard is dropped.
///
/// # Example
///
/// ```
/// use horizon_pager_core::PerfSpan;
///
/// fn reload() {
///     let _span = PerfSpan::new("reload");
///     // ... work ...
/// }
/// # reload();
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_pager::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
