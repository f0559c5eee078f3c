//! Core systems for Horizon Pager.
//!
//! This crate provides the foundational pieces the pager widget is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Values with change detection
//! - **Logging**: Tracing targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_pager_core::Signal;
//!
//! let page_changed = Signal::<usize>::new();
//!
//! let conn_id = page_changed.connect(|index| {
//!     println!("Now showing page {}", index);
//! });
//!
//! page_changed.emit(2);
//! page_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_pager_core::{Property, Signal};
//!
//! struct Spacing {
//!     value: Property<f32>,
//!     value_changed: Signal<f32>,
//! }
//!
//! impl Spacing {
//!     fn set(&self, spacing: f32) {
//!         if self.value.set(spacing) {
//!             self.value_changed.emit(spacing);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
