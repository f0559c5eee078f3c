//! The tab strip widget.

use std::sync::Arc;

use horizon_pager_core::{PerfSpan, Property, Signal};

use crate::config::MenuStyle;
use crate::error::{PagerResult, check_index};
use crate::geometry::{Color, EdgeInsets, Font, LayoutDirection, Rect, Size};
use crate::index::PageIndex;
use crate::invalidation::{LayoutInvalidator, LayoutRegion};
use crate::text::{EstimatedTextMeasure, TextMeasure};

use super::item::MenuItem;
use super::layout::{DEFAULT_TAB_SPACING, TabAlignment, TabGeometry};
use super::source::{MenuDataSource, StaticMenuSource, TabLayoutDelegate};
use super::tile::MenuTile;

/// A selection transition performed by the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    /// The tab that lost the highlight, if any was highlighted.
    pub previous: Option<PageIndex>,
    /// The newly highlighted tab.
    pub current: PageIndex,
}

/// A horizontal strip of selectable tabs.
///
/// `MenuStrip` knows nothing about pages. It owns the tab sequence, the
/// highlighted index and the tab geometry, and reports selection changes
/// through its signals. Drawing is left to the host, which asks for a
/// [`MenuTile`] per visible tab and redraws whatever `tiles_changed` names.
///
/// # Signals
///
/// - `tab_will_display((MenuItem, PageIndex))`: A tab is about to become visible
/// - `tab_selected(PageIndex)`: A tab became highlighted
/// - `tab_deselected(PageIndex)`: A tab lost the highlight
/// - `tiles_changed(Vec<PageIndex>)`: Tiles whose appearance changed
///
/// # Example
///
/// ```
/// use horizon_pager::menu::{MenuItem, MenuStrip, StaticMenuSource};
/// use horizon_pager::Rect;
/// use std::sync::Arc;
///
/// let source = StaticMenuSource::new(vec!["Inbox".into(), "Sent".into()], 0);
/// let mut strip = MenuStrip::new().with_data_source(Arc::new(source));
/// strip.set_frame(Rect::new(0.0, 0.0, 320.0, 42.0));
/// strip.reload();
///
/// strip.tab_selected.connect(|index| println!("selected {}", index));
/// let change = strip.handle_tap(1).unwrap();
/// assert!(change.is_some());
/// assert_eq!(strip.highlighted_index(), Some(1));
/// ```
pub struct MenuStrip {
    items: Vec<MenuItem>,
    current: Option<PageIndex>,

    data_source: Option<Arc<dyn MenuDataSource>>,
    layout_delegate: Option<Arc<dyn TabLayoutDelegate>>,
    text_measure: Arc<dyn TextMeasure>,

    style: Property<MenuStyle>,
    frame: Rect,
    geometry: TabGeometry,
    invalidator: LayoutInvalidator,

    /// Signal emitted when a tab is about to become visible.
    pub tab_will_display: Signal<(MenuItem, PageIndex)>,

    /// Signal emitted when a tab becomes highlighted.
    pub tab_selected: Signal<PageIndex>,

    /// Signal emitted when a tab loses the highlight.
    pub tab_deselected: Signal<PageIndex>,

    /// Signal emitted with the tiles that must be redrawn.
    pub tiles_changed: Signal<Vec<PageIndex>>,
}

impl Default for MenuStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStrip {
    /// Accessibility identifier of the strip's scrolling tab container.
    pub const ACCESSIBILITY_ID: &'static str = "horizon_pager.menu";
    /// Accessibility identifier of the indicator bar.
    pub const INDICATOR_ACCESSIBILITY_ID: &'static str = "horizon_pager.menu.indicator";

    /// Create an empty strip with the default style.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            data_source: None,
            layout_delegate: None,
            text_measure: Arc::new(EstimatedTextMeasure),
            style: Property::new(MenuStyle::default()),
            frame: Rect::ZERO,
            geometry: TabGeometry::default(),
            invalidator: LayoutInvalidator::new(),
            tab_will_display: Signal::new(),
            tab_selected: Signal::new(),
            tab_deselected: Signal::new(),
            tiles_changed: Signal::new(),
        }
    }

    /// Set the data source using builder pattern.
    pub fn with_data_source(mut self, source: Arc<dyn MenuDataSource>) -> Self {
        self.data_source = Some(source);
        self
    }

    /// Set the layout delegate using builder pattern.
    pub fn with_layout_delegate(mut self, delegate: Arc<dyn TabLayoutDelegate>) -> Self {
        self.layout_delegate = Some(delegate);
        self
    }

    /// Set the text measurement capability using builder pattern.
    pub fn with_text_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.text_measure = measure;
        self
    }

    /// Set the style using builder pattern.
    pub fn with_style(self, style: MenuStyle) -> Self {
        self.style.set_silent(style);
        self
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Replace the data source. Takes effect on the next reload.
    pub fn set_data_source(&mut self, source: Option<Arc<dyn MenuDataSource>>) {
        self.data_source = source;
    }

    /// Replace the layout delegate and recompute tab geometry.
    pub fn set_layout_delegate(&mut self, delegate: Option<Arc<dyn TabLayoutDelegate>>) {
        self.layout_delegate = delegate;
        self.invalidator.invalidate(LayoutRegion::MenuGeometry);
        self.layout_if_needed();
    }

    /// Replace the text measurement capability and recompute tab geometry.
    pub fn set_text_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.text_measure = measure;
        self.invalidator.invalidate(LayoutRegion::MenuGeometry);
        self.layout_if_needed();
    }

    // =========================================================================
    // Items and Selection
    // =========================================================================

    /// Re-fetch the tab sequence from the data source.
    ///
    /// Without a data source the strip becomes empty. The highlighted tab is
    /// seeded from the source's starting index only if nothing was ever
    /// highlighted; otherwise it is kept, clamped to the new length.
    pub fn reload(&mut self) {
        match self.data_source.clone() {
            Some(source) => self.reload_from(source.as_ref()),
            None => self.reload_from(&StaticMenuSource::default()),
        }
    }

    /// Reload from an explicit source, bypassing the configured one.
    pub fn reload_from(&mut self, source: &dyn MenuDataSource) {
        let _span = PerfSpan::new("menu_reload");

        if self.current.is_none() {
            let start = PageIndex::new(source.starting_index());
            tracing::debug!(target: "horizon_pager::menu", index = start.item(), "seeding highlighted tab");
            self.current = Some(start);
        }
        self.items = source.items();

        if let Some(current) = self.current
            && !self.items.is_empty()
            && !current.is_within(self.items.len())
        {
            let clamped = PageIndex::new(self.items.len() - 1);
            tracing::debug!(
                target: "horizon_pager::menu",
                from = current.item(),
                to = clamped.item(),
                "clamping highlighted tab"
            );
            self.current = Some(clamped);
        }

        tracing::debug!(target: "horizon_pager::menu", count = self.items.len(), "reloaded tabs");
        self.invalidator.invalidate(LayoutRegion::MenuGeometry);
        self.layout_if_needed();
    }

    /// The current tab sequence.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of tabs.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The tab at `index`.
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// The highlighted tab, if any.
    pub fn current_index(&self) -> Option<PageIndex> {
        self.current
    }

    /// Position of the highlighted tab, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.current.map(|index| index.item())
    }

    /// Highlight the tab at `index` programmatically.
    ///
    /// Does nothing and returns `Ok(None)` if the tab is already highlighted.
    /// Otherwise performs the same transition as a tap.
    pub fn select_item(&mut self, index: usize) -> PagerResult<Option<TabChange>> {
        let index = self.validate(index, "select_item")?;
        if self.current == Some(index) {
            return Ok(None);
        }
        Ok(Some(self.apply_selection(index)))
    }

    /// Handle a tap on the tab at `index`.
    ///
    /// Tapping the highlighted tab is a no-op.
    pub fn handle_tap(&mut self, index: usize) -> PagerResult<Option<TabChange>> {
        let index = self.validate(index, "handle_tap")?;
        tracing::trace!(target: "horizon_pager::menu", index = index.item(), "tab tapped");
        if self.current == Some(index) {
            return Ok(None);
        }
        Ok(Some(self.apply_selection(index)))
    }

    /// Report that the host is about to show the tab at `index`.
    pub fn will_display_tab(&self, index: usize) -> PagerResult<()> {
        let index = self.validate(index, "will_display_tab")?;
        let item = self.items[index.item()].clone();
        self.tab_will_display.emit((item, index));
        Ok(())
    }

    /// Tab under a horizontal position in strip coordinates.
    pub fn tab_at(&self, x: f32) -> Option<usize> {
        self.geometry.tab_at(x)
    }

    fn validate(&self, index: usize, operation: &'static str) -> PagerResult<PageIndex> {
        check_index(index, self.items.len()).inspect_err(|err| {
            tracing::warn!(target: "horizon_pager::menu", operation, %err, "rejected tab index");
        })?;
        Ok(PageIndex::new(index))
    }

    fn apply_selection(&mut self, index: PageIndex) -> TabChange {
        let previous = self.current.replace(index);
        tracing::debug!(
            target: "horizon_pager::menu",
            from = previous.map(|p| p.item()),
            to = index.item(),
            "tab selection changed"
        );

        if let Some(previous) = previous {
            self.tab_deselected.emit(previous);
        }
        self.tab_selected.emit(index);

        let changed = previous.into_iter().chain(Some(index)).collect();
        self.tiles_changed.emit(changed);

        TabChange {
            previous,
            current: index,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render model for the tab at `index`.
    ///
    /// Building a tile has no side effects; only the highlighted tile
    /// carries the indicator.
    pub fn tile(&self, index: usize) -> Option<MenuTile> {
        let item = self.items.get(index)?;
        let frame = self.geometry.frame(index)?;
        let selected = self.highlighted_index() == Some(index);

        Some(self.style.with(|style| {
            let color = if selected {
                style.selected_color
            } else {
                style.deselected_color
            };
            let content_width = self.natural_width(item, style);

            MenuTile {
                index: PageIndex::new(index),
                frame,
                content_frame: Rect::new(
                    (frame.width() - content_width) / 2.0,
                    0.0,
                    content_width,
                    frame.height(),
                ),
                title: item.title.clone(),
                font: style.font.clone(),
                label_color: color,
                icon: item.icon.clone(),
                icon_size: item.icon_size.unwrap_or(Size::ZERO),
                icon_spacing: item.spacing.unwrap_or(0.0),
                icon_tint: item.has_icon().then_some(color),
                selected,
                indicator: (selected && style.has_indicator)
                    .then(|| MenuTile::indicator_rect(frame.size, style.indicator_thickness)),
                indicator_color: style.indicator_color,
                direction: style.layout_direction,
            }
        }))
    }

    /// Render models for every tab.
    pub fn tiles(&self) -> Vec<MenuTile> {
        (0..self.items.len()).filter_map(|i| self.tile(i)).collect()
    }

    /// Indicator bar under the highlighted tab, in strip coordinates.
    pub fn indicator_frame(&self) -> Option<Rect> {
        let index = self.highlighted_index()?;
        let frame = self.geometry.frame(index)?;
        self.style.with(|style| {
            style.has_indicator.then(|| {
                let bar = MenuTile::indicator_rect(frame.size, style.indicator_thickness);
                Rect::new(
                    frame.left() + bar.left(),
                    frame.top() + bar.top(),
                    bar.width(),
                    bar.height(),
                )
            })
        })
    }

    /// Current tab geometry.
    pub fn geometry(&self) -> &TabGeometry {
        &self.geometry
    }

    // =========================================================================
    // Style and Layout
    // =========================================================================

    /// Get a copy of the current style.
    pub fn style(&self) -> MenuStyle {
        self.style.get()
    }

    /// Replace the style.
    ///
    /// Returns every layout region the change affects. Tile and geometry
    /// passes run here; frame and page regions are left to the owner.
    pub fn set_style(&mut self, style: MenuStyle) -> Vec<LayoutRegion> {
        let regions = self.style.with(|old| old.diff(&style));
        if regions.is_empty() {
            return regions;
        }

        tracing::trace!(target: "horizon_pager::layout", ?regions, "menu style changed");
        self.style.set_silent(style);
        for region in &regions {
            if matches!(region, LayoutRegion::MenuGeometry | LayoutRegion::MenuTiles) {
                self.invalidator.invalidate(*region);
            }
        }
        self.layout_if_needed();
        regions
    }

    /// Modify the style in place. See [`set_style`](Self::set_style).
    pub fn update_style(&mut self, f: impl FnOnce(&mut MenuStyle)) -> Vec<LayoutRegion> {
        let mut style = self.style.get();
        f(&mut style);
        self.set_style(style)
    }

    pub fn set_font(&mut self, font: Font) {
        self.update_style(|style| style.font = font);
    }

    pub fn set_deselected_color(&mut self, color: Color) {
        self.update_style(|style| style.deselected_color = color);
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.update_style(|style| style.selected_color = color);
    }

    pub fn set_indicator_color(&mut self, color: Color) {
        self.update_style(|style| style.indicator_color = color);
    }

    /// Show or hide the indicator bar.
    pub fn set_has_indicator(&mut self, has_indicator: bool) {
        self.update_style(|style| style.has_indicator = has_indicator);
    }

    pub fn set_indicator_thickness(&mut self, thickness: f32) {
        self.update_style(|style| style.indicator_thickness = thickness);
    }

    /// Set the alignment used when the layout delegate does not override it.
    pub fn set_alignment(&mut self, alignment: TabAlignment) {
        self.update_style(|style| style.alignment = alignment);
    }

    /// Set the tile area insets inside the strip.
    pub fn set_content_insets(&mut self, insets: EdgeInsets) {
        self.update_style(|style| style.content_insets = insets);
    }

    /// Lay tabs out from the right with [`LayoutDirection::Rtl`].
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.update_style(|style| style.layout_direction = direction);
    }

    /// The strip's frame in its owner's coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the strip. Tab geometry is recomputed if the size changed.
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame == frame {
            return;
        }
        let resized = self.frame.size != frame.size;
        self.frame = frame;
        if resized {
            self.invalidator.invalidate(LayoutRegion::MenuGeometry);
            self.layout_if_needed();
        }
    }

    /// Apply several changes with a single layout pass at the end.
    pub fn batch_update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.suspend_layout();
        f(self);
        self.resume_layout();
    }

    pub(crate) fn suspend_layout(&mut self) {
        self.invalidator.suspend();
    }

    pub(crate) fn resume_layout(&mut self) {
        self.invalidator.resume();
        self.layout_if_needed();
    }

    /// Run any pending layout passes.
    ///
    /// Does nothing while a batch update is in progress.
    pub fn layout_if_needed(&mut self) {
        let regions = self.invalidator.take_dirty();
        if regions.is_empty() {
            return;
        }

        if regions.contains(&LayoutRegion::MenuGeometry) {
            self.relayout();
        }
        // Both passes change how every tile looks.
        let all = (0..self.items.len()).map(PageIndex::new).collect();
        self.tiles_changed.emit(all);
    }

    fn relayout(&mut self) {
        let _span = PerfSpan::new("menu_layout");

        let delegate = self.layout_delegate.clone();
        let spacing = delegate
            .as_ref()
            .and_then(|d| d.spacing_between_tabs())
            .unwrap_or(DEFAULT_TAB_SPACING);

        let geometry = self.style.with(|style| {
            let area = Rect::new(0.0, 0.0, self.frame.width(), self.frame.height())
                .inset_by(style.content_insets);
            let alignment = delegate
                .as_ref()
                .and_then(|d| d.alignment())
                .unwrap_or(style.alignment);

            let sizes: Vec<Size> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    delegate
                        .as_ref()
                        .and_then(|d| d.size_for_tab(PageIndex::new(i)))
                        .unwrap_or_else(|| Size::new(self.natural_width(item, style), area.height()))
                })
                .collect();

            TabGeometry::compute(area, &sizes, spacing, alignment, style.layout_direction)
        });

        tracing::trace!(
            target: "horizon_pager::layout",
            tabs = self.items.len(),
            leading_inset = geometry.leading_inset(),
            content_width = geometry.content_width(),
            "menu geometry updated"
        );
        self.geometry = geometry;
    }

    /// Icon width, icon gap and measured label width.
    fn natural_width(&self, item: &MenuItem, style: &MenuStyle) -> f32 {
        let label = item
            .title
            .as_deref()
            .map_or(0.0, |title| self.text_measure.text_width(title, &style.font));
        item.icon_extent() + label
    }
}

static_assertions::assert_impl_all!(MenuStrip: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Icon;
    use parking_lot::Mutex;

    struct FixedWidths(Vec<f32>, f32);

    impl TabLayoutDelegate for FixedWidths {
        fn spacing_between_tabs(&self) -> Option<f32> {
            Some(self.1)
        }

        fn size_for_tab(&self, index: PageIndex) -> Option<Size> {
            self.0.get(index.item()).map(|&w| Size::new(w, 42.0))
        }
    }

    fn strip_with(titles: &[&str], start: usize) -> MenuStrip {
        let items = titles.iter().map(|&t| MenuItem::from(t)).collect();
        let mut strip = MenuStrip::new().with_data_source(Arc::new(StaticMenuSource::new(items, start)));
        strip.set_frame(Rect::new(0.0, 0.0, 300.0, 42.0));
        strip.reload();
        strip
    }

    #[test]
    fn test_reload_without_source_is_empty() {
        let mut strip = MenuStrip::new();
        strip.reload();
        assert_eq!(strip.count(), 0);
        assert!(strip.tiles().is_empty());
        assert!(strip.indicator_frame().is_none());
    }

    #[test]
    fn test_reload_seeds_once() {
        let mut strip = strip_with(&["A", "B", "C"], 2);
        assert_eq!(strip.highlighted_index(), Some(2));

        strip.select_item(0).unwrap();
        strip.reload();
        assert_eq!(strip.highlighted_index(), Some(0));
    }

    #[test]
    fn test_reload_clamps_highlight() {
        let mut strip = strip_with(&["A", "B", "C"], 2);
        strip.set_data_source(Some(Arc::new(StaticMenuSource::new(vec!["A".into()], 0))));
        strip.reload();
        assert_eq!(strip.highlighted_index(), Some(0));
    }

    #[test]
    fn test_select_emits_deselect_then_select() {
        let mut strip = strip_with(&["A", "B", "C"], 0);
        let events = Arc::new(Mutex::new(Vec::new()));

        let e = events.clone();
        strip.tab_deselected.connect(move |i| e.lock().push(format!("deselect {}", i.item())));
        let e = events.clone();
        strip.tab_selected.connect(move |i| e.lock().push(format!("select {}", i.item())));

        let change = strip.select_item(2).unwrap().unwrap();
        assert_eq!(change.previous, Some(PageIndex::new(0)));
        assert_eq!(change.current, PageIndex::new(2));
        assert_eq!(*events.lock(), vec!["deselect 0", "select 2"]);
    }

    #[test]
    fn test_select_current_is_noop() {
        let mut strip = strip_with(&["A", "B"], 1);
        let fired = Arc::new(Mutex::new(0));
        let f = fired.clone();
        strip.tab_selected.connect(move |_| *f.lock() += 1);

        assert_eq!(strip.select_item(1).unwrap(), None);
        assert_eq!(strip.handle_tap(1).unwrap(), None);
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut strip = strip_with(&["A", "B"], 0);
        assert!(strip.select_item(2).is_err());
        assert!(strip.handle_tap(7).is_err());
        assert!(strip.will_display_tab(2).is_err());
        assert_eq!(strip.highlighted_index(), Some(0));
    }

    #[test]
    fn test_tiles_changed_names_old_and_new() {
        let mut strip = strip_with(&["A", "B", "C"], 0);
        let changed = Arc::new(Mutex::new(Vec::new()));
        let c = changed.clone();
        strip.tiles_changed.connect(move |tiles| *c.lock() = tiles.clone());

        strip.handle_tap(1).unwrap();
        assert_eq!(*changed.lock(), vec![PageIndex::new(0), PageIndex::new(1)]);
    }

    #[test]
    fn test_will_display_tab() {
        let strip = strip_with(&["A", "B"], 0);
        let seen = Arc::new(Mutex::new(None));
        let s = seen.clone();
        strip.tab_will_display.connect(move |(item, index)| {
            *s.lock() = Some((item.title.clone(), index.item()));
        });

        strip.will_display_tab(1).unwrap();
        assert_eq!(*seen.lock(), Some((Some("B".to_string()), 1)));
    }

    #[test]
    fn test_delegate_geometry_centered() {
        let mut strip = strip_with(&["A", "B", "C"], 0);
        strip.set_layout_delegate(Some(Arc::new(FixedWidths(vec![40.0, 60.0, 30.0], 8.0))));

        assert_eq!(strip.geometry().leading_inset(), 77.0);
        assert_eq!(strip.tile(1).unwrap().frame, Rect::new(125.0, 0.0, 60.0, 42.0));
    }

    #[test]
    fn test_left_alignment() {
        let mut strip = strip_with(&["A", "B"], 0);
        strip.set_alignment(TabAlignment::Left);
        assert_eq!(strip.geometry().leading_inset(), 0.0);
        assert_eq!(strip.tile(0).unwrap().frame.left(), 0.0);
    }

    #[test]
    fn test_fallback_width_includes_icon() {
        let items = vec![
            MenuItem::new("Mail")
                .with_icon(Icon::new("mail"), Size::new(18.0, 18.0))
                .with_spacing(6.0),
        ];
        let measure = |text: &str, _: &Font| text.len() as f32 * 10.0;
        let mut strip = MenuStrip::new()
            .with_text_measure(Arc::new(measure))
            .with_data_source(Arc::new(StaticMenuSource::new(items, 0)));
        strip.set_frame(Rect::new(0.0, 0.0, 200.0, 42.0));
        strip.reload();

        let tile = strip.tile(0).unwrap();
        assert_eq!(tile.frame.width(), 64.0);
        assert_eq!(tile.icon_frame(), Some(Rect::new(0.0, 12.0, 18.0, 18.0)));
        assert_eq!(tile.label_frame().left(), 24.0);
    }

    #[test]
    fn test_tile_colors_and_indicator() {
        let strip = strip_with(&["A", "B"], 1);
        let style = strip.style();

        let selected = strip.tile(1).unwrap();
        assert!(selected.selected);
        assert_eq!(selected.label_color, style.selected_color);
        assert_eq!(selected.icon_tint, None);
        let bar = selected.indicator.unwrap();
        assert_eq!(bar.height(), 2.0);
        assert_eq!(bar.width(), selected.frame.width());
        assert_eq!(bar.bottom(), selected.frame.height());

        let other = strip.tile(0).unwrap();
        assert!(!other.selected);
        assert_eq!(other.label_color, style.deselected_color);
        assert!(other.indicator.is_none());

        let in_strip = strip.indicator_frame().unwrap();
        assert_eq!(in_strip.left(), selected.frame.left());
        assert_eq!(in_strip.bottom(), selected.frame.bottom());
    }

    #[test]
    fn test_hidden_indicator() {
        let mut strip = strip_with(&["A", "B"], 0);
        strip.set_has_indicator(false);
        assert!(strip.indicator_frame().is_none());
        assert!(strip.tile(0).unwrap().indicator.is_none());
    }

    #[test]
    fn test_color_change_keeps_geometry_and_selection() {
        let mut strip = strip_with(&["A", "B", "C"], 1);
        let before = strip.geometry().clone();

        let regions = strip.update_style(|s| s.selected_color = Color::BLACK);
        assert_eq!(regions, vec![LayoutRegion::MenuTiles]);
        assert_eq!(strip.geometry(), &before);
        assert_eq!(strip.highlighted_index(), Some(1));
        assert_eq!(strip.count(), 3);
    }

    #[test]
    fn test_batch_update_emits_once() {
        let mut strip = strip_with(&["A", "B"], 0);
        let passes = Arc::new(Mutex::new(0));
        let p = passes.clone();
        strip.tiles_changed.connect(move |_| *p.lock() += 1);

        strip.batch_update(|strip| {
            strip.set_font(Font::system(20.0));
            strip.set_alignment(TabAlignment::Left);
            strip.set_indicator_color(Color::WHITE);
        });
        assert_eq!(*passes.lock(), 1);
        assert_eq!(strip.geometry().leading_inset(), 0.0);
    }
}
