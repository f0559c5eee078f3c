//! The pager controller: keeps tab highlight, visible page and geometry in sync.

use std::collections::BTreeMap;
use std::sync::Arc;

use horizon_pager_core::{PerfSpan, Property, Signal};

use crate::config::{MenuStyle, PageStyle, PagerConfig, ScrollDirection};
use crate::error::{PagerResult, check_index};
use crate::geometry::{Color, EdgeInsets, Font, LayoutDirection, Rect, Size};
use crate::index::PageIndex;
use crate::invalidation::{LayoutInvalidator, LayoutRegion};
use crate::menu::{MenuItem, MenuStrip, StaticMenuSource, TabAlignment, TabLayoutDelegate};
use crate::text::TextMeasure;

use super::selection::SelectionState;
use super::source::PagerDataSource;
use super::surface::{DetachedSurface, PageLayout, ScrollPosition, ScrollSurface};

/// Where the page surface is in a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The user's finger is down and moving the pages.
    Dragging,
    /// The finger lifted and the surface is still coasting.
    Decelerating,
}

/// Owns a [`MenuStrip`] and a page surface and keeps them in agreement.
///
/// The controller is the only writer of the selection. Selection can
/// change three ways:
///
/// - programmatically through [`select_index`](Self::select_index)
/// - by a tab tap reported through [`tab_tapped`](Self::tab_tapped)
/// - by a page drag, reported as [`drag_will_begin`](Self::drag_will_begin),
///   [`will_display_page`](Self::will_display_page),
///   [`did_end_displaying_page`](Self::did_end_displaying_page) and the drag
///   end callbacks
///
/// While no drag is in progress the paging guard is armed: visibility events
/// caused by reloads or programmatic scrolls snap the surface back to the
/// current page instead of changing the selection. A drag disarms it. If the
/// current page leaves view before the drag settles, the selection rolls
/// back to the previous page, so the highlighted tab always matches the page
/// the surface actually rests on.
///
/// # Signals
///
/// - `page_will_display((P, PageIndex))`: A drag brought a new page into view
/// - `page_did_end_displaying((P, PageIndex))`: A page left view
/// - `current_changed(PageIndex)`: The authoritative current page changed
///
/// # Example
///
/// ```
/// use horizon_pager::menu::MenuItem;
/// use horizon_pager::pager::{PagerController, PagerDataSource, RecordingSurface};
/// use horizon_pager::{PageIndex, Size};
/// use std::sync::Arc;
///
/// struct Mailboxes;
///
/// impl PagerDataSource for Mailboxes {
///     type Page = String;
///
///     fn menu_items(&self) -> Vec<MenuItem> {
///         vec!["Inbox".into(), "Sent".into(), "Drafts".into()]
///     }
///
///     fn page(&self, index: PageIndex) -> String {
///         format!("mailbox {}", index.item())
///     }
/// }
///
/// let surface = RecordingSurface::new();
/// let mut pager = PagerController::new()
///     .with_data_source(Arc::new(Mailboxes))
///     .with_surface(Box::new(surface.clone()));
/// pager.set_bounds(Size::new(320.0, 480.0));
/// pager.reload();
///
/// pager.select_index(2).unwrap();
/// assert_eq!(pager.current_index(), Some(2));
/// assert_eq!(pager.menu().highlighted_index(), Some(2));
/// assert_eq!(surface.last_scroll(), Some((PageIndex::new(2), true)));
/// ```
pub struct PagerController<P: Clone + Send + 'static> {
    items: Vec<MenuItem>,
    selection: SelectionState,

    data_source: Option<Arc<dyn PagerDataSource<Page = P>>>,
    surface: Box<dyn ScrollSurface>,
    menu: MenuStrip,

    /// Pages configured by the host and not yet scrolled out of view.
    pages: BTreeMap<usize, P>,

    /// Armed: visibility events snap back to the current page.
    paging_guard: bool,
    drag_phase: DragPhase,
    /// Whether the first page visibility event has been handled.
    initialized: bool,

    page_style: Property<PageStyle>,
    bounds: Size,
    page_layout: PageLayout,
    invalidator: LayoutInvalidator,

    /// Signal emitted when a drag brings a new page into view.
    pub page_will_display: Signal<(P, PageIndex)>,

    /// Signal emitted when a page leaves view.
    pub page_did_end_displaying: Signal<(P, PageIndex)>,

    /// Signal emitted when the current page changes.
    pub current_changed: Signal<PageIndex>,
}

impl<P: Clone + Send + 'static> Default for PagerController<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone + Send + 'static> PagerController<P> {
    /// Create an empty pager with no data source and a detached surface.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: SelectionState::new(),
            data_source: None,
            surface: Box::new(DetachedSurface),
            menu: MenuStrip::new(),
            pages: BTreeMap::new(),
            paging_guard: true,
            drag_phase: DragPhase::Idle,
            initialized: false,
            page_style: Property::new(PageStyle::default()),
            bounds: Size::ZERO,
            page_layout: PageLayout::default(),
            invalidator: LayoutInvalidator::new(),
            page_will_display: Signal::new(),
            page_did_end_displaying: Signal::new(),
            current_changed: Signal::new(),
        }
    }

    /// Set the data source using builder pattern.
    pub fn with_data_source(mut self, source: Arc<dyn PagerDataSource<Page = P>>) -> Self {
        self.data_source = Some(source);
        self
    }

    /// Attach the scroll surface using builder pattern.
    pub fn with_surface(mut self, surface: Box<dyn ScrollSurface>) -> Self {
        self.set_surface(surface);
        self
    }

    /// Apply a configuration using builder pattern.
    pub fn with_config(mut self, config: PagerConfig) -> Self {
        self.apply_config(config);
        self
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Replace the data source. Takes effect on the next reload.
    pub fn set_data_source(&mut self, source: Option<Arc<dyn PagerDataSource<Page = P>>>) {
        self.data_source = source;
    }

    /// Attach the host's scroll surface and push the current style and layout to it.
    pub fn set_surface(&mut self, surface: Box<dyn ScrollSurface>) {
        self.surface = surface;
        let style = self.page_style.get();
        self.surface.apply_style(&style);
        self.surface.apply_layout(&self.page_layout);
        tracing::debug!(target: "horizon_pager::pager", "scroll surface attached");
    }

    /// Override tab sizes, spacing or alignment.
    pub fn set_layout_delegate(&mut self, delegate: Option<Arc<dyn TabLayoutDelegate>>) {
        self.menu.set_layout_delegate(delegate);
    }

    /// Measure tab labels with the host's text engine.
    pub fn set_text_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.menu.set_text_measure(measure);
    }

    /// The owned tab strip. Connect to its signals here; selection changes go
    /// through the controller.
    pub fn menu(&self) -> &MenuStrip {
        &self.menu
    }

    // =========================================================================
    // Data and Selection
    // =========================================================================

    /// Re-fetch tabs from the data source and refresh every page tile.
    ///
    /// The starting index is used only if nothing was ever selected; a live
    /// selection survives, clamped to the new length. Without a data source
    /// the pager becomes empty.
    pub fn reload(&mut self) {
        let _span = PerfSpan::new("pager_reload");

        let (items, starting_index) = match &self.data_source {
            Some(source) => (source.menu_items(), source.starting_index()),
            None => (Vec::new(), 0),
        };
        // Only an index that addressed a real page counts as previously shown.
        let before = self
            .selection
            .current()
            .filter(|current| current.is_within(self.items.len()));

        if self.selection.seed(PageIndex::new(starting_index)) {
            tracing::debug!(target: "horizon_pager::pager", index = starting_index, "seeded selection");
        }
        self.items = items;
        self.selection.clamp(self.items.len());
        // A gesture in flight still needs its rollback target.
        if self.drag_phase == DragPhase::Idle {
            self.selection.clear_previous();
        }
        self.pages.clear();

        let current = self.selection.current().map_or(starting_index, |c| c.item());
        self.menu
            .reload_from(&StaticMenuSource::new(self.items.clone(), current));
        if let Some(current) = self.selection.current()
            && current.is_within(self.items.len())
        {
            self.sync_menu(current);
        }

        tracing::debug!(target: "horizon_pager::pager", count = self.items.len(), ?current, "reloaded pages");
        self.invalidator.invalidate(LayoutRegion::PageGeometry);
        self.layout_if_needed();
        self.surface.reload_tiles();

        if let Some(after) = self.selection.current()
            && after.is_within(self.items.len())
            && before != Some(after)
        {
            self.current_changed.emit(after);
        }
    }

    /// The tab sequence fetched by the last reload.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Position of the current page, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.selection.current().map(|index| index.item())
    }

    /// The current page, if any.
    pub fn current(&self) -> Option<PageIndex> {
        self.selection.current()
    }

    /// Snapshot of the selection state.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Jump to the page at `index`.
    ///
    /// Scrolls with animation and moves the tab highlight. Selecting the
    /// current page does nothing.
    pub fn select_index(&mut self, index: usize) -> PagerResult<()> {
        let index = self.validate(index, "select_index")?;
        if self.selection.current() == Some(index) {
            return Ok(());
        }

        self.selection.commit_to(index);
        tracing::debug!(target: "horizon_pager::pager", index = index.item(), "selected page");
        self.scroll_to(index, true);
        self.sync_menu(index);
        self.initialized = true;
        self.current_changed.emit(index);
        Ok(())
    }

    /// Handle a tap on the tab at `index`.
    ///
    /// The strip updates its own highlight; the controller commits the
    /// selection and scrolls the pages.
    pub fn tab_tapped(&mut self, index: usize) -> PagerResult<()> {
        let index = self.validate(index, "tab_tapped")?;
        let Some(change) = self.menu.handle_tap(index.item())? else {
            return Ok(());
        };

        if self.selection.current() != Some(change.current) {
            self.selection.commit_to(change.current);
            tracing::debug!(target: "horizon_pager::pager", index = change.current.item(), "tab selected page");
            self.scroll_to(change.current, true);
            self.current_changed.emit(change.current);
        }
        Ok(())
    }

    /// Report that the host is about to show the tab at `index`.
    pub fn will_display_tab(&self, index: usize) -> PagerResult<()> {
        self.menu.will_display_tab(index)
    }

    // =========================================================================
    // Page Surface Events
    // =========================================================================

    /// Produce the content for the page tile at `index`.
    ///
    /// The page is cached until it leaves view or the pager reloads. Returns
    /// `None` when no data source is set.
    pub fn configure_page(&mut self, index: usize) -> PagerResult<Option<P>> {
        let index = self.validate(index, "configure_page")?;
        let Some(source) = &self.data_source else {
            return Ok(None);
        };

        let page = source.page(index);
        self.pages.insert(index.item(), page.clone());
        Ok(Some(page))
    }

    /// A cached page produced by [`configure_page`](Self::configure_page).
    pub fn cached_page(&self, index: usize) -> Option<&P> {
        self.pages.get(&index)
    }

    /// The user started dragging the pages.
    ///
    /// Always disarms the paging guard, even if a previous gesture is still
    /// decelerating; the new gesture takes over.
    pub fn drag_will_begin(&mut self) {
        if self.drag_phase != DragPhase::Idle {
            tracing::trace!(target: "horizon_pager::pager", phase = ?self.drag_phase, "drag superseded");
        }
        self.paging_guard = false;
        self.drag_phase = DragPhase::Dragging;
        tracing::trace!(target: "horizon_pager::pager", "paging guard disarmed");
    }

    /// The user lifted their finger.
    ///
    /// Without deceleration the gesture settles now; otherwise it settles in
    /// [`deceleration_did_end`](Self::deceleration_did_end).
    pub fn drag_did_end(&mut self, will_decelerate: bool) {
        if will_decelerate {
            self.drag_phase = DragPhase::Decelerating;
        } else {
            self.settle();
        }
    }

    /// The surface stopped moving after a drag.
    pub fn deceleration_did_end(&mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        self.paging_guard = true;
        self.drag_phase = DragPhase::Idle;
        self.selection.settle();
        tracing::trace!(
            target: "horizon_pager::pager",
            current = ?self.current_index(),
            "paging guard armed"
        );
    }

    /// Whether visibility events are currently pinned to the current page.
    pub fn is_paging_guard_armed(&self) -> bool {
        self.paging_guard
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag_phase
    }

    /// The page tile at `index` is about to become visible.
    pub fn will_display_page(&mut self, index: usize) -> PagerResult<()> {
        let index = self.validate(index, "will_display_page")?;
        let Some(current) = self.selection.current() else {
            return Ok(());
        };

        if !self.initialized {
            tracing::debug!(target: "horizon_pager::pager", index = current.item(), "initial page alignment");
            self.sync_menu(current);
            self.scroll_to(current, false);
            self.initialized = true;
            return Ok(());
        }

        if self.paging_guard {
            tracing::trace!(
                target: "horizon_pager::pager",
                index = index.item(),
                current = current.item(),
                "paging guard holding current page"
            );
            self.scroll_to(current, false);
            return Ok(());
        }

        if index != current {
            self.selection.propose(index);
            tracing::debug!(
                target: "horizon_pager::pager",
                from = current.item(),
                to = index.item(),
                "drag candidate page"
            );
            self.sync_menu(index);
        }

        if let Some(page) = self.page_for(index) {
            self.page_will_display.emit((page, index));
        }
        if index != current {
            self.current_changed.emit(index);
        }
        Ok(())
    }

    /// The page tile at `index` stopped being visible.
    ///
    /// If it was the current page, the transition towards it did not
    /// complete and the selection rolls back to the previous page.
    pub fn did_end_displaying_page(&mut self, index: usize) -> PagerResult<()> {
        let index = self.validate(index, "did_end_displaying_page")?;

        if let Some(restored) = self.selection.rollback_if_current(index) {
            tracing::debug!(
                target: "horizon_pager::pager",
                from = index.item(),
                to = restored.item(),
                "rolled back interrupted transition"
            );
            self.sync_menu(restored);
            self.current_changed.emit(restored);
        }

        let page = match self.pages.remove(&index.item()) {
            Some(page) => Some(page),
            None => self.fetch_page(index),
        };
        if let Some(page) = page {
            self.page_did_end_displaying.emit((page, index));
        }
        Ok(())
    }

    fn page_for(&self, index: PageIndex) -> Option<P> {
        match self.pages.get(&index.item()) {
            Some(page) => Some(page.clone()),
            None => self.fetch_page(index),
        }
    }

    fn fetch_page(&self, index: PageIndex) -> Option<P> {
        self.data_source.as_ref().map(|source| source.page(index))
    }

    fn validate(&self, index: usize, operation: &'static str) -> PagerResult<PageIndex> {
        check_index(index, self.items.len()).inspect_err(|err| {
            tracing::warn!(target: "horizon_pager::pager", operation, %err, "rejected page index");
        })?;
        Ok(PageIndex::new(index))
    }

    fn scroll_to(&mut self, index: PageIndex, animated: bool) {
        let position = ScrollPosition::for_direction(self.page_style.with(|s| s.scroll_direction));
        tracing::trace!(target: "horizon_pager::pager", index = index.item(), animated, "scrolling surface");
        self.surface.scroll_to(index, position, animated);
    }

    /// Push the highlight to the strip.
    fn sync_menu(&mut self, index: PageIndex) {
        if let Err(err) = self.menu.select_item(index.item()) {
            tracing::warn!(target: "horizon_pager::pager", %err, "tab strip out of sync with pages");
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Resize the pager. Lays out the strip and the page surface.
    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.invalidator
            .invalidate_all([LayoutRegion::MenuFrame, LayoutRegion::PageGeometry]);
        self.layout_if_needed();
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The strip's frame in pager coordinates.
    pub fn menu_frame(&self) -> Rect {
        self.menu.frame()
    }

    /// Page geometry from the last layout pass.
    pub fn page_layout(&self) -> PageLayout {
        self.page_layout
    }

    /// Run any pending layout passes.
    ///
    /// Does nothing while a batch update is in progress.
    pub fn layout_if_needed(&mut self) {
        let regions = self.invalidator.take_dirty();
        if regions.is_empty() {
            return;
        }
        let _span = PerfSpan::new("pager_layout");

        if regions
            .iter()
            .any(|r| matches!(r, LayoutRegion::MenuFrame | LayoutRegion::PageGeometry))
        {
            self.layout_frames();
        }
        if regions.contains(&LayoutRegion::PageSurface) {
            let style = self.page_style.get();
            self.surface.apply_style(&style);
        }
    }

    fn layout_frames(&mut self) {
        let menu_style = self.menu.style();
        let page_style = self.page_style.get();

        let bounds = Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height);

        // Leading insets sit on the right in Rtl.
        let menu_insets = menu_style.edge_insets;
        let menu_frame = menu_style.layout_direction.place(
            Rect::new(
                menu_insets.left,
                menu_insets.top,
                (self.bounds.width - menu_insets.horizontal()).max(0.0),
                menu_style.height,
            ),
            bounds,
        );
        self.menu.set_frame(menu_frame);

        let insets = page_style.edge_insets;
        let top = menu_frame.bottom() + insets.top;
        let page_frame = page_style.layout_direction.place(
            Rect::new(
                insets.left,
                top,
                (self.bounds.width - insets.horizontal()).max(0.0),
                (self.bounds.height - top - insets.bottom).max(0.0),
            ),
            bounds,
        );

        self.page_layout = PageLayout {
            frame: page_frame,
            page_size: page_style.page_size.unwrap_or(page_frame.size),
            page_count: self.items.len(),
            scroll_direction: page_style.scroll_direction,
            line_spacing: page_style.line_spacing,
            interitem_spacing: page_style.interitem_spacing,
            direction: page_style.layout_direction,
        };
        tracing::trace!(
            target: "horizon_pager::layout",
            ?menu_frame,
            ?page_frame,
            "pager frames updated"
        );
        self.surface.apply_layout(&self.page_layout);
    }

    /// Apply several style changes with a single layout pass at the end.
    pub fn batch_update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.invalidator.suspend();
        self.menu.suspend_layout();

        f(self);

        // Frames first, so the strip lays out its tabs once at its final size.
        self.invalidator.resume();
        self.layout_if_needed();
        self.menu.resume_layout();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current configuration of both strip and pages.
    pub fn config(&self) -> PagerConfig {
        PagerConfig {
            menu: self.menu.style(),
            pages: self.page_style.get(),
        }
    }

    /// Replace the whole configuration in one layout pass.
    pub fn apply_config(&mut self, config: PagerConfig) {
        self.batch_update(|pager| {
            pager.set_menu_style(config.menu);
            pager.set_page_style(config.pages);
        });
    }

    pub fn page_style(&self) -> PageStyle {
        self.page_style.get()
    }

    /// Replace the page style, rerunning only the affected passes.
    pub fn set_page_style(&mut self, style: PageStyle) {
        let regions = self.page_style.with(|old| old.diff(&style));
        if regions.is_empty() {
            return;
        }
        tracing::trace!(target: "horizon_pager::layout", ?regions, "page style changed");
        self.page_style.set_silent(style);
        self.invalidator.invalidate_all(regions);
        self.layout_if_needed();
    }

    /// Modify the page style in place.
    pub fn update_page_style(&mut self, f: impl FnOnce(&mut PageStyle)) {
        let mut style = self.page_style.get();
        f(&mut style);
        self.set_page_style(style);
    }

    pub fn set_scroll_direction(&mut self, direction: ScrollDirection) {
        self.update_page_style(|style| style.scroll_direction = direction);
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.update_page_style(|style| style.line_spacing = spacing);
    }

    pub fn set_interitem_spacing(&mut self, spacing: f32) {
        self.update_page_style(|style| style.interitem_spacing = spacing);
    }

    /// Set an explicit page size. `None` fills the page frame.
    pub fn set_page_size(&mut self, size: Option<Size>) {
        self.update_page_style(|style| style.page_size = size);
    }

    pub fn set_page_background(&mut self, color: Color) {
        self.update_page_style(|style| style.background_color = color);
    }

    pub fn set_bounces(&mut self, bounces: bool) {
        self.update_page_style(|style| style.bounces = bounces);
    }

    pub fn set_shows_scroll_indicators(&mut self, shows: bool) {
        self.update_page_style(|style| style.shows_scroll_indicators = shows);
    }

    /// Set the page area insets below the strip.
    pub fn set_page_edge_insets(&mut self, insets: EdgeInsets) {
        self.update_page_style(|style| style.edge_insets = insets);
    }

    pub fn menu_style(&self) -> MenuStyle {
        self.menu.style()
    }

    /// Replace the strip style, rerunning only the affected passes.
    pub fn set_menu_style(&mut self, style: MenuStyle) {
        let regions = self.menu.set_style(style);
        self.absorb_menu_regions(regions);
    }

    /// Modify the strip style in place.
    pub fn update_menu_style(&mut self, f: impl FnOnce(&mut MenuStyle)) {
        let regions = self.menu.update_style(f);
        self.absorb_menu_regions(regions);
    }

    fn absorb_menu_regions(&mut self, regions: Vec<LayoutRegion>) {
        let owned = regions
            .into_iter()
            .filter(|r| matches!(r, LayoutRegion::MenuFrame | LayoutRegion::PageGeometry));
        self.invalidator.invalidate_all(owned);
        self.layout_if_needed();
    }

    pub fn set_menu_height(&mut self, height: f32) {
        self.update_menu_style(|style| style.height = height);
    }

    /// Set the strip position inside the pager bounds.
    pub fn set_menu_edge_insets(&mut self, insets: EdgeInsets) {
        self.update_menu_style(|style| style.edge_insets = insets);
    }

    pub fn set_menu_content_insets(&mut self, insets: EdgeInsets) {
        self.update_menu_style(|style| style.content_insets = insets);
    }

    pub fn set_menu_font(&mut self, font: Font) {
        self.update_menu_style(|style| style.font = font);
    }

    pub fn set_menu_deselected_color(&mut self, color: Color) {
        self.update_menu_style(|style| style.deselected_color = color);
    }

    pub fn set_menu_selected_color(&mut self, color: Color) {
        self.update_menu_style(|style| style.selected_color = color);
    }

    pub fn set_menu_indicator_color(&mut self, color: Color) {
        self.update_menu_style(|style| style.indicator_color = color);
    }

    pub fn set_menu_has_indicator(&mut self, has_indicator: bool) {
        self.update_menu_style(|style| style.has_indicator = has_indicator);
    }

    pub fn set_menu_alignment(&mut self, alignment: TabAlignment) {
        self.update_menu_style(|style| style.alignment = alignment);
    }

    /// Switch strip and pages to `direction` in one layout pass.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.batch_update(|pager| {
            pager.update_menu_style(|style| style.layout_direction = direction);
            pager.update_page_style(|style| style.layout_direction = direction);
        });
    }
}

static_assertions::assert_impl_all!(PagerController<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::{RecordingSurface, SurfaceCommand};

    struct Letters(Vec<&'static str>, usize);

    impl PagerDataSource for Letters {
        type Page = String;

        fn starting_index(&self) -> usize {
            self.1
        }

        fn menu_items(&self) -> Vec<MenuItem> {
            self.0.iter().map(|&t| MenuItem::from(t)).collect()
        }

        fn page(&self, index: PageIndex) -> String {
            format!("page-{}", self.0[index.item()])
        }
    }

    fn pager(start: usize) -> (PagerController<String>, RecordingSurface) {
        let surface = RecordingSurface::new();
        let mut pager = PagerController::new()
            .with_data_source(Arc::new(Letters(vec!["A", "B", "C"], start)))
            .with_surface(Box::new(surface.clone()));
        pager.set_bounds(Size::new(320.0, 480.0));
        pager.reload();
        surface.take();
        (pager, surface)
    }

    #[test]
    fn test_new_pager_is_empty() {
        let mut pager: PagerController<String> = PagerController::new();
        pager.reload();
        assert_eq!(pager.count(), 0);
        assert_eq!(pager.current_index(), Some(0));
        assert!(pager.select_index(0).is_err());
        assert!(pager.is_paging_guard_armed());
    }

    #[test]
    fn test_reload_seeds_and_notifies_surface() {
        let surface = RecordingSurface::new();
        let mut pager = PagerController::new()
            .with_data_source(Arc::new(Letters(vec!["A", "B", "C"], 1)))
            .with_surface(Box::new(surface.clone()));
        surface.take();

        pager.reload();
        assert_eq!(pager.current_index(), Some(1));
        assert_eq!(pager.menu().highlighted_index(), Some(1));
        assert_eq!(pager.menu().count(), 3);
        assert!(surface.commands().contains(&SurfaceCommand::ReloadTiles));
    }

    #[test]
    fn test_select_index_scrolls_animated() {
        let (mut pager, surface) = pager(0);
        pager.select_index(2).unwrap();

        assert_eq!(
            surface.commands(),
            vec![SurfaceCommand::ScrollTo {
                index: PageIndex::new(2),
                position: ScrollPosition::CenteredHorizontally,
                animated: true,
            }]
        );
        assert_eq!(pager.selection().previous(), Some(PageIndex::new(0)));
        assert!(pager.selection().is_committed());
    }

    #[test]
    fn test_vertical_pager_centers_vertically() {
        let (mut pager, surface) = pager(0);
        pager.set_scroll_direction(ScrollDirection::Vertical);
        surface.take();

        pager.select_index(1).unwrap();
        assert!(matches!(
            surface.commands().as_slice(),
            [SurfaceCommand::ScrollTo {
                position: ScrollPosition::CenteredVertically,
                ..
            }]
        ));
    }

    #[test]
    fn test_out_of_range_leaves_state_alone() {
        let (mut pager, surface) = pager(1);

        assert!(pager.select_index(3).is_err());
        assert!(pager.tab_tapped(9).is_err());
        assert!(pager.will_display_page(3).is_err());
        assert!(pager.did_end_displaying_page(3).is_err());
        assert!(pager.configure_page(3).is_err());

        assert_eq!(pager.current_index(), Some(1));
        assert_eq!(pager.menu().highlighted_index(), Some(1));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_drag_phases() {
        let (mut pager, _) = pager(0);

        pager.drag_will_begin();
        assert_eq!(pager.drag_phase(), DragPhase::Dragging);
        assert!(!pager.is_paging_guard_armed());

        pager.drag_did_end(true);
        assert_eq!(pager.drag_phase(), DragPhase::Decelerating);
        assert!(!pager.is_paging_guard_armed());

        pager.deceleration_did_end();
        assert_eq!(pager.drag_phase(), DragPhase::Idle);
        assert!(pager.is_paging_guard_armed());

        pager.drag_will_begin();
        pager.drag_did_end(false);
        assert!(pager.is_paging_guard_armed());
    }

    #[test]
    fn test_new_drag_supersedes_deceleration() {
        let (mut pager, _) = pager(0);
        pager.drag_will_begin();
        pager.drag_did_end(true);
        pager.drag_will_begin();

        assert_eq!(pager.drag_phase(), DragPhase::Dragging);
        assert!(!pager.is_paging_guard_armed());
    }

    #[test]
    fn test_configure_page_caches_until_end_displaying() {
        let (mut pager, _) = pager(0);
        assert_eq!(pager.configure_page(1).unwrap().as_deref(), Some("page-B"));
        assert_eq!(pager.cached_page(1).map(String::as_str), Some("page-B"));

        pager.did_end_displaying_page(1).unwrap();
        assert!(pager.cached_page(1).is_none());
    }

    #[test]
    fn test_reload_drops_cached_pages() {
        let (mut pager, _) = pager(0);
        pager.configure_page(0).unwrap();
        pager.reload();
        assert!(pager.cached_page(0).is_none());
    }

    #[test]
    fn test_frames() {
        let (mut pager, surface) = pager(0);
        assert_eq!(pager.menu_frame(), Rect::new(0.0, 0.0, 320.0, 42.0));

        let layout = pager.page_layout();
        assert_eq!(layout.frame, Rect::new(0.0, 62.0, 320.0, 418.0));
        assert_eq!(layout.page_size, Size::new(320.0, 418.0));
        assert_eq!(layout.page_count, 3);

        pager.set_menu_edge_insets(EdgeInsets::new(10.0, 8.0, 0.0, 8.0));
        assert_eq!(pager.menu_frame(), Rect::new(8.0, 10.0, 304.0, 42.0));
        assert_eq!(surface.last_layout().map(|l| l.frame.top()), Some(72.0));
    }

    #[test]
    fn test_rtl_mirrors_frames_and_pages() {
        let (mut pager, surface) = pager(1);
        pager.set_menu_edge_insets(EdgeInsets::new(0.0, 16.0, 0.0, 0.0));
        surface.take();

        pager.set_layout_direction(LayoutDirection::Rtl);

        assert_eq!(pager.menu_frame(), Rect::new(0.0, 0.0, 304.0, 42.0));
        assert!(pager.menu_style().layout_direction.is_rtl());
        let layout = surface.last_layout().unwrap();
        assert_eq!(layout.direction, LayoutDirection::Rtl);
        assert_eq!(layout.page_frame(PageIndex::new(0)).left(), 640.0);
        assert_eq!(pager.current_index(), Some(1));
        assert_eq!(pager.menu().highlighted_index(), Some(1));
    }

    #[test]
    fn test_explicit_page_size() {
        let (mut pager, surface) = pager(0);
        pager.set_page_size(Some(Size::new(200.0, 300.0)));
        assert_eq!(surface.last_layout().map(|l| l.page_size), Some(Size::new(200.0, 300.0)));
    }

    #[test]
    fn test_surface_style_change_skips_geometry() {
        let (mut pager, surface) = pager(0);
        pager.set_bounces(false);

        let commands = surface.commands();
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], SurfaceCommand::ApplyStyle(style) if !style.bounces));
    }

    #[test]
    fn test_color_change_keeps_selection() {
        let (mut pager, surface) = pager(2);
        pager.set_menu_selected_color(Color::BLACK);

        assert_eq!(pager.current_index(), Some(2));
        assert_eq!(pager.count(), 3);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_apply_config_single_layout() {
        let (mut pager, surface) = pager(0);
        let mut config = pager.config();
        config.menu.height = 50.0;
        config.pages.edge_insets = EdgeInsets::ZERO;
        config.pages.shows_scroll_indicators = true;

        pager.apply_config(config.clone());

        let layouts = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::ApplyLayout(_)))
            .count();
        assert_eq!(layouts, 1);
        assert_eq!(pager.page_layout().frame.top(), 50.0);
        assert_eq!(pager.config(), config);
    }
}
