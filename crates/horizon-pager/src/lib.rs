//! Horizon Pager: a paged content widget with a synchronized tab strip.
//!
//! A [`PagerController`](pager::PagerController) owns a
//! [`MenuStrip`](menu::MenuStrip) and drives a host-provided
//! [`ScrollSurface`](pager::ScrollSurface). Whether the selection changes
//! programmatically, through a tab tap, or through a page drag, the
//! highlighted tab and the page the surface rests on stay in agreement,
//! including drags that are released before the page change completes.
//!
//! Rendering, text shaping and scroll physics belong to the host. The pager
//! consumes them as capabilities and produces render models, scroll
//! commands and signals.
//!
//! # Modules
//!
//! - [`menu`]: the tab strip
//! - [`pager`]: the controller, its data source and the scroll surface
//! - [`config`]: styles, loadable from TOML or JSON
//! - [`geometry`]: points, sizes, rects, insets, colors, fonts
//!
//! # Logging
//!
//! All events go through `tracing` under the targets in
//! [`horizon_pager_core::logging::targets`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod index;
pub mod invalidation;
pub mod menu;
pub mod pager;
pub mod prelude;
pub mod text;

pub use config::{MenuStyle, PageStyle, PagerConfig, ScrollDirection};
pub use error::{PagerError, PagerResult};
pub use geometry::{Color, EdgeInsets, Font, LayoutDirection, Point, Rect, Size};
pub use index::PageIndex;
pub use invalidation::{LayoutInvalidator, LayoutRegion};

pub use horizon_pager_core::{ConnectionGuard, ConnectionId, Property, Signal};
