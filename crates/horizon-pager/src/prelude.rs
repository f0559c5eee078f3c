//! Common imports for embedding the pager.
//!
//! ```
//! use horizon_pager::prelude::*;
//! ```

pub use crate::config::{MenuStyle, PageStyle, PagerConfig, ScrollDirection};
pub use crate::error::{PagerError, PagerResult};
pub use crate::geometry::{Color, EdgeInsets, Font, LayoutDirection, Point, Rect, Size};
pub use crate::index::PageIndex;
pub use crate::menu::{
    Icon, MenuDataSource, MenuItem, MenuStrip, MenuTile, TabAlignment, TabLayoutDelegate,
};
pub use crate::pager::{
    DragPhase, PagerController, PagerDataSource, RecordingSurface, ScrollPosition, ScrollSurface,
};
pub use crate::text::TextMeasure;

pub use horizon_pager_core::{ConnectionGuard, Signal};
