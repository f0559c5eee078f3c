//! Render model of a single tab.

use crate::geometry::{Color, Font, LayoutDirection, Rect, Size};
use crate::index::PageIndex;

use super::item::Icon;

/// Everything a host needs to draw one tab.
///
/// `frame` is in strip coordinates. `content_frame` and `indicator` are
/// relative to the tile's own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTile {
    pub index: PageIndex,
    pub frame: Rect,
    /// Icon and label block, centered horizontally in the tile.
    pub content_frame: Rect,
    pub title: Option<String>,
    pub font: Font,
    pub label_color: Color,
    pub icon: Option<Icon>,
    pub icon_size: Size,
    /// Gap between icon and label.
    pub icon_spacing: f32,
    /// Tint to apply to the icon. `None` when the tab has no icon.
    pub icon_tint: Option<Color>,
    pub selected: bool,
    /// Indicator bar, present only on the selected tile when enabled.
    pub indicator: Option<Rect>,
    pub indicator_color: Color,
    /// Rtl puts the icon after the label.
    pub direction: LayoutDirection,
}

impl MenuTile {
    /// Indicator bar flush with the bottom of a tile of `tile_size`,
    /// spanning its full width.
    pub fn indicator_rect(tile_size: Size, thickness: f32) -> Rect {
        Rect::new(
            0.0,
            tile_size.height - thickness,
            tile_size.width,
            thickness,
        )
    }

    /// Stable accessibility identifier of the tile, by position.
    pub fn accessibility_id(&self) -> String {
        format!("horizon_pager.menu.tab.{}", self.index.item())
    }

    /// Frame of the icon inside the tile, if the tab has one.
    pub fn icon_frame(&self) -> Option<Rect> {
        self.icon.as_ref()?;
        let y = self.content_frame.top() + (self.content_frame.height() - self.icon_size.height) / 2.0;
        let frame = Rect::new(
            self.content_frame.left(),
            y,
            self.icon_size.width,
            self.icon_size.height,
        );
        Some(self.direction.place(frame, self.content_frame))
    }

    /// Frame of the label inside the tile.
    pub fn label_frame(&self) -> Rect {
        let offset = if self.icon.is_some() {
            self.icon_size.width + self.icon_spacing
        } else {
            0.0
        };
        let frame = Rect::new(
            self.content_frame.left() + offset,
            self.content_frame.top(),
            (self.content_frame.width() - offset).max(0.0),
            self.content_frame.height(),
        );
        self.direction.place(frame, self.content_frame)
    }
}
