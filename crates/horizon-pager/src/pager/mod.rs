//! The paged content controller.
//!
//! - [`PagerController`]: the synchronization authority between tabs and pages
//! - [`PagerDataSource`]: tabs and page content supplied by the host
//! - [`ScrollSurface`]: the host's scroll view, driven by the controller
//! - [`SelectionState`]: current/previous selection with commit tracking

mod controller;
mod selection;
mod source;
mod surface;

pub use controller::{DragPhase, PagerController};
pub use selection::SelectionState;
pub use source::PagerDataSource;
pub use surface::{
    DetachedSurface, PageLayout, RecordingSurface, ScrollPosition, ScrollSurface, SurfaceCommand,
};
