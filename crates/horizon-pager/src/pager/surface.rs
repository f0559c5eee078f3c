//! The page scrolling surface capability.
//!
//! The host's scroll view renders pages, reuses tiles and animates offsets.
//! The controller drives it through [`ScrollSurface`] and is told about
//! visibility and drag events through its own methods.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{PageStyle, ScrollDirection};
use crate::geometry::{LayoutDirection, Point, Rect, Size};
use crate::index::PageIndex;

/// Where the target page ends up after a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    CenteredHorizontally,
    CenteredVertically,
}

impl ScrollPosition {
    /// Centering along the scroll axis.
    pub fn for_direction(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::Horizontal => Self::CenteredHorizontally,
            ScrollDirection::Vertical => Self::CenteredVertically,
        }
    }
}

/// Page geometry pushed to the surface after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLayout {
    /// Surface frame in pager coordinates.
    pub frame: Rect,
    pub page_size: Size,
    pub page_count: usize,
    pub scroll_direction: ScrollDirection,
    pub line_spacing: f32,
    pub interitem_spacing: f32,
    /// Rtl puts the first horizontally scrolling page at the right end of
    /// the content.
    pub direction: LayoutDirection,
}

impl PageLayout {
    /// Accessibility identifier for the host's page scroll view.
    pub const ACCESSIBILITY_ID: &'static str = "horizon_pager.pages";

    /// Distance from one page origin to the next along the scroll axis.
    fn stride(&self) -> f32 {
        match self.scroll_direction {
            ScrollDirection::Horizontal => self.page_size.width + self.line_spacing,
            ScrollDirection::Vertical => self.page_size.height + self.line_spacing,
        }
    }

    /// Frame of the page at `index` in content coordinates.
    pub fn page_frame(&self, index: PageIndex) -> Rect {
        let offset = self.stride() * index.item() as f32;
        match self.scroll_direction {
            ScrollDirection::Horizontal => {
                let frame = Rect::new(offset, 0.0, self.page_size.width, self.page_size.height);
                let content = Rect::new(0.0, 0.0, self.content_size().width, self.page_size.height);
                self.direction.place(frame, content)
            }
            ScrollDirection::Vertical => {
                Rect::new(0.0, offset, self.page_size.width, self.page_size.height)
            }
        }
    }

    /// Total scrollable content size.
    pub fn content_size(&self) -> Size {
        if self.page_count == 0 {
            return Size::ZERO;
        }
        let extent = self.stride() * self.page_count as f32 - self.line_spacing;
        match self.scroll_direction {
            ScrollDirection::Horizontal => Size::new(extent, self.page_size.height),
            ScrollDirection::Vertical => Size::new(self.page_size.width, extent),
        }
    }

    /// Content offset that centers the page at `index` in the surface frame.
    ///
    /// Clamped so the offset never scrolls past either end of the content.
    pub fn centered_offset(&self, index: PageIndex) -> Point {
        let page = self.page_frame(index).center();
        let content = self.content_size();
        let clamp = |value: f32, max: f32| value.min(max).max(0.0);
        match self.scroll_direction {
            ScrollDirection::Horizontal => Point::new(
                clamp(page.x - self.frame.width() / 2.0, content.width - self.frame.width()),
                0.0,
            ),
            ScrollDirection::Vertical => Point::new(
                0.0,
                clamp(page.y - self.frame.height() / 2.0, content.height - self.frame.height()),
            ),
        }
    }
}

/// Commands the controller issues to the host's scroll view.
///
/// Only `scroll_to` and `reload_tiles` are required; layout and style
/// updates default to no-ops for hosts that size the surface themselves.
pub trait ScrollSurface: Send + Sync {
    /// Scroll so the page at `index` is centered.
    fn scroll_to(&mut self, index: PageIndex, position: ScrollPosition, animated: bool);

    /// Discard and re-request every rendered page tile.
    fn reload_tiles(&mut self);

    fn apply_layout(&mut self, _layout: &PageLayout) {}

    fn apply_style(&mut self, _style: &PageStyle) {}
}

/// Surface used until the host attaches one. Ignores every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl ScrollSurface for DetachedSurface {
    fn scroll_to(&mut self, _index: PageIndex, _position: ScrollPosition, _animated: bool) {}

    fn reload_tiles(&mut self) {}
}

/// A command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    ScrollTo {
        index: PageIndex,
        position: ScrollPosition,
        animated: bool,
    },
    ReloadTiles,
    ApplyLayout(PageLayout),
    ApplyStyle(PageStyle),
}

/// A surface that records every command it receives.
///
/// Clones share one log, so a test or headless host keeps a clone and
/// hands the other to the controller.
///
/// ```
/// use horizon_pager::pager::{RecordingSurface, ScrollSurface, SurfaceCommand};
///
/// let surface = RecordingSurface::new();
/// let mut attached = surface.clone();
/// attached.reload_tiles();
/// assert_eq!(surface.commands(), vec![SurfaceCommand::ReloadTiles]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<Vec<SurfaceCommand>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far.
    pub fn commands(&self) -> Vec<SurfaceCommand> {
        self.log.lock().clone()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut *self.log.lock())
    }

    /// The most recent scroll command as `(index, animated)`.
    pub fn last_scroll(&self) -> Option<(PageIndex, bool)> {
        self.log.lock().iter().rev().find_map(|command| match command {
            SurfaceCommand::ScrollTo { index, animated, .. } => Some((*index, *animated)),
            _ => None,
        })
    }

    /// The most recent layout pushed to the surface.
    pub fn last_layout(&self) -> Option<PageLayout> {
        self.log.lock().iter().rev().find_map(|command| match command {
            SurfaceCommand::ApplyLayout(layout) => Some(*layout),
            _ => None,
        })
    }

    fn record(&self, command: SurfaceCommand) {
        tracing::trace!(target: "horizon_pager::pager", ?command, "surface command");
        self.log.lock().push(command);
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to(&mut self, index: PageIndex, position: ScrollPosition, animated: bool) {
        self.record(SurfaceCommand::ScrollTo {
            index,
            position,
            animated,
        });
    }

    fn reload_tiles(&mut self) {
        self.record(SurfaceCommand::ReloadTiles);
    }

    fn apply_layout(&mut self, layout: &PageLayout) {
        self.record(SurfaceCommand::ApplyLayout(*layout));
    }

    fn apply_style(&mut self, style: &PageStyle) {
        self.record(SurfaceCommand::ApplyStyle(style.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(direction: ScrollDirection, count: usize) -> PageLayout {
        PageLayout {
            frame: Rect::new(0.0, 62.0, 320.0, 400.0),
            page_size: Size::new(320.0, 400.0),
            page_count: count,
            scroll_direction: direction,
            line_spacing: 10.0,
            interitem_spacing: 0.0,
            direction: LayoutDirection::Ltr,
        }
    }

    #[test]
    fn test_page_frames_horizontal() {
        let layout = layout(ScrollDirection::Horizontal, 3);
        assert_eq!(layout.page_frame(PageIndex::new(2)), Rect::new(660.0, 0.0, 320.0, 400.0));
        assert_eq!(layout.content_size(), Size::new(980.0, 400.0));
    }

    #[test]
    fn test_page_frames_vertical() {
        let layout = layout(ScrollDirection::Vertical, 2);
        assert_eq!(layout.page_frame(PageIndex::new(1)), Rect::new(0.0, 410.0, 320.0, 400.0));
        assert_eq!(layout.content_size(), Size::new(320.0, 810.0));
    }

    #[test]
    fn test_centered_offset_is_clamped() {
        let layout = layout(ScrollDirection::Horizontal, 3);
        assert_eq!(layout.centered_offset(PageIndex::new(0)), Point::ZERO);
        assert_eq!(layout.centered_offset(PageIndex::new(1)), Point::new(330.0, 0.0));
        assert_eq!(layout.centered_offset(PageIndex::new(2)), Point::new(660.0, 0.0));
    }

    #[test]
    fn test_rtl_pages_run_from_the_right() {
        let rtl = PageLayout {
            direction: LayoutDirection::Rtl,
            ..layout(ScrollDirection::Horizontal, 3)
        };
        assert_eq!(rtl.page_frame(PageIndex::new(0)), Rect::new(660.0, 0.0, 320.0, 400.0));
        assert_eq!(rtl.page_frame(PageIndex::new(2)), Rect::new(0.0, 0.0, 320.0, 400.0));
        assert_eq!(rtl.content_size(), Size::new(980.0, 400.0));
        assert_eq!(rtl.centered_offset(PageIndex::new(0)), Point::new(660.0, 0.0));

        // Vertical paging has no horizontal order to mirror.
        let vertical = PageLayout {
            direction: LayoutDirection::Rtl,
            ..layout(ScrollDirection::Vertical, 2)
        };
        assert_eq!(vertical.page_frame(PageIndex::new(1)), Rect::new(0.0, 410.0, 320.0, 400.0));
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(ScrollDirection::Horizontal, 0);
        assert_eq!(layout.content_size(), Size::ZERO);
    }

    #[test]
    fn test_recording_surface_shares_log() {
        let surface = RecordingSurface::new();
        let mut attached: Box<dyn ScrollSurface> = Box::new(surface.clone());

        attached.scroll_to(PageIndex::new(1), ScrollPosition::CenteredHorizontally, true);
        attached.reload_tiles();

        assert_eq!(surface.last_scroll(), Some((PageIndex::new(1), true)));
        assert_eq!(surface.take().len(), 2);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_scroll_position_follows_direction() {
        assert_eq!(
            ScrollPosition::for_direction(ScrollDirection::Vertical),
            ScrollPosition::CenteredVertically
        );
    }
}
