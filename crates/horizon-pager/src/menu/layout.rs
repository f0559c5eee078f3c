//! Tab geometry: sizes, spacing and alignment.

use serde::{Deserialize, Serialize};

use crate::geometry::{LayoutDirection, Rect, Size};

/// Spacing between tabs when no layout delegate provides one.
pub const DEFAULT_TAB_SPACING: f32 = 24.0;

/// Horizontal placement of the tab block inside the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    /// Packed from the leading edge.
    Left,
    /// Centered as a block. Falls back to leading-edge packing on overflow.
    #[default]
    Center,
}

/// Leading inset of the first tab.
///
/// For [`TabAlignment::Center`] this is
/// `max(0, (container_width - sum(widths) - spacing * (n - 1)) / 2)`.
///
/// ```
/// use horizon_pager::menu::{TabAlignment, leading_inset};
///
/// let inset = leading_inset(TabAlignment::Center, 300.0, &[40.0, 60.0, 30.0], 8.0);
/// assert_eq!(inset, 77.0);
/// ```
pub fn leading_inset(alignment: TabAlignment, container_width: f32, widths: &[f32], spacing: f32) -> f32 {
    match alignment {
        TabAlignment::Left => 0.0,
        TabAlignment::Center if widths.is_empty() => 0.0,
        TabAlignment::Center => {
            let total_width: f32 = widths.iter().sum();
            let total_spacing = spacing * (widths.len() - 1) as f32;
            ((container_width - total_width - total_spacing) / 2.0).max(0.0)
        }
    }
}

/// Computed frames of every tab, in strip coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabGeometry {
    frames: Vec<Rect>,
    leading_inset: f32,
    spacing: f32,
    content_width: f32,
    direction: LayoutDirection,
}

impl TabGeometry {
    /// Lay out tiles of the given sizes inside `area`, starting from the
    /// leading edge of `direction`.
    ///
    /// Tiles shorter than the area are centered vertically. In
    /// [`LayoutDirection::Rtl`] the frames are the mirror image of the Ltr
    /// frames, so the first tab sits at the right.
    pub fn compute(
        area: Rect,
        sizes: &[Size],
        spacing: f32,
        alignment: TabAlignment,
        direction: LayoutDirection,
    ) -> Self {
        let widths: Vec<f32> = sizes.iter().map(|size| size.width).collect();
        let inset = leading_inset(alignment, area.width(), &widths, spacing);

        let mut x = area.left() + inset;
        let frames: Vec<Rect> = sizes
            .iter()
            .map(|size| {
                let y = area.top() + ((area.height() - size.height) / 2.0).max(0.0);
                let frame = Rect::new(x, y, size.width, size.height);
                x += size.width + spacing;
                frame
            })
            .collect();
        let content_width = frames.last().map_or(0.0, Rect::right);

        Self {
            frames: frames.into_iter().map(|frame| direction.place(frame, area)).collect(),
            leading_inset: inset,
            spacing,
            content_width,
            direction,
        }
    }

    #[inline]
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    #[inline]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    #[inline]
    pub fn leading_inset(&self) -> f32 {
        self.leading_inset
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Distance from the strip's leading edge to the far edge of the last
    /// tile, i.e. the scrollable content width when the tiles overflow.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Index of the tile containing the horizontal position `x`.
    pub fn tab_at(&self, x: f32) -> Option<usize> {
        self.frames
            .iter()
            .position(|frame| x >= frame.left() && x < frame.right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(widths: &[f32]) -> Vec<Size> {
        widths.iter().map(|&w| Size::new(w, 42.0)).collect()
    }

    #[test]
    fn test_center_inset() {
        let inset = leading_inset(TabAlignment::Center, 300.0, &[40.0, 60.0, 30.0], 8.0);
        assert_eq!(inset, 77.0);
    }

    #[test]
    fn test_center_inset_never_negative() {
        let inset = leading_inset(TabAlignment::Center, 100.0, &[80.0, 80.0], 24.0);
        assert_eq!(inset, 0.0);
    }

    #[test]
    fn test_left_and_empty_insets() {
        assert_eq!(leading_inset(TabAlignment::Left, 300.0, &[40.0], 8.0), 0.0);
        assert_eq!(leading_inset(TabAlignment::Center, 300.0, &[], 8.0), 0.0);
    }

    #[test]
    fn test_single_tab_centered() {
        assert_eq!(leading_inset(TabAlignment::Center, 300.0, &[100.0], 24.0), 100.0);
    }

    #[test]
    fn test_compute_frames() {
        let area = Rect::new(10.0, 0.0, 300.0, 42.0);
        let geometry = TabGeometry::compute(area, &sizes(&[40.0, 60.0, 30.0]), 8.0, TabAlignment::Center, LayoutDirection::Ltr);

        assert_eq!(geometry.leading_inset(), 77.0);
        assert_eq!(geometry.frame(0), Some(Rect::new(87.0, 0.0, 40.0, 42.0)));
        assert_eq!(geometry.frame(1), Some(Rect::new(135.0, 0.0, 60.0, 42.0)));
        assert_eq!(geometry.frame(2), Some(Rect::new(203.0, 0.0, 30.0, 42.0)));
        assert_eq!(geometry.frame(3), None);
        assert_eq!(geometry.content_width(), 233.0);
    }

    #[test]
    fn test_short_tiles_centered_vertically() {
        let area = Rect::new(0.0, 0.0, 200.0, 40.0);
        let geometry = TabGeometry::compute(area, &[Size::new(50.0, 20.0)], 0.0, TabAlignment::Left, LayoutDirection::Ltr);
        assert_eq!(geometry.frame(0), Some(Rect::new(0.0, 10.0, 50.0, 20.0)));
    }

    #[test]
    fn test_tab_at() {
        let area = Rect::new(0.0, 0.0, 300.0, 42.0);
        let geometry = TabGeometry::compute(area, &sizes(&[40.0, 60.0]), 10.0, TabAlignment::Left, LayoutDirection::Ltr);

        assert_eq!(geometry.tab_at(0.0), Some(0));
        assert_eq!(geometry.tab_at(45.0), None);
        assert_eq!(geometry.tab_at(50.0), Some(1));
        assert_eq!(geometry.tab_at(110.0), None);
    }

    #[test]
    fn test_rtl_frames_start_at_the_right() {
        let area = Rect::new(10.0, 0.0, 300.0, 42.0);
        let geometry = TabGeometry::compute(
            area,
            &sizes(&[40.0, 60.0]),
            10.0,
            TabAlignment::Left,
            LayoutDirection::Rtl,
        );

        assert_eq!(geometry.frame(0), Some(Rect::new(270.0, 0.0, 40.0, 42.0)));
        assert_eq!(geometry.frame(1), Some(Rect::new(200.0, 0.0, 60.0, 42.0)));
        assert_eq!(geometry.content_width(), 120.0);
        assert_eq!(geometry.tab_at(280.0), Some(0));
        assert_eq!(geometry.tab_at(265.0), None);
        assert_eq!(geometry.tab_at(200.0), Some(1));
    }
}
