//! Scoped layout invalidation.
//!
//! Configuration changes never reset data; they only mark the layout passes
//! they affect as dirty:
//! - A style setter diffs old against new and invalidates [`LayoutRegion`]s
//! - The owner runs the dirty passes synchronously after the setter
//! - While suspended (a batch update), invalidations are deferred and the
//!   passes run once when the batch ends

use std::collections::HashSet;

/// A layout pass that can be invalidated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutRegion {
    /// Tile appearance: colors, font, indicator. No geometry change.
    MenuTiles,
    /// Tile widths, spacing, alignment and leading inset.
    MenuGeometry,
    /// The strip's own frame inside the pager.
    MenuFrame,
    /// Page frame, page size and item spacing.
    PageGeometry,
    /// Scroll surface behavior: background, bounce, scroll indicators.
    PageSurface,
}

impl LayoutRegion {
    /// Every region, in processing order.
    pub const ALL: [LayoutRegion; 5] = [
        LayoutRegion::MenuFrame,
        LayoutRegion::MenuGeometry,
        LayoutRegion::MenuTiles,
        LayoutRegion::PageGeometry,
        LayoutRegion::PageSurface,
    ];
}

/// Tracks which layout regions need to be recomputed.
#[derive(Debug, Default)]
pub struct LayoutInvalidator {
    dirty: HashSet<LayoutRegion>,

    /// Whether layout processing is currently suspended.
    suspended: bool,

    /// Invalidations received while suspended.
    deferred: Vec<LayoutRegion>,
}

impl LayoutInvalidator {
    /// Create a new invalidator with nothing dirty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a region dirty.
    ///
    /// If invalidation is suspended, this is deferred until resumed.
    pub fn invalidate(&mut self, region: LayoutRegion) {
        if self.suspended {
            self.deferred.push(region);
        } else {
            self.dirty.insert(region);
        }
    }

    /// Mark several regions dirty.
    pub fn invalidate_all<I: IntoIterator<Item = LayoutRegion>>(&mut self, regions: I) {
        for region in regions {
            self.invalidate(region);
        }
    }

    #[inline]
    pub fn is_dirty(&self, region: LayoutRegion) -> bool {
        self.dirty.contains(&region)
    }

    #[inline]
    pub fn has_dirty_regions(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Remove and return all dirty regions in processing order.
    ///
    /// Returns nothing while suspended, so passes wait for the batch to end.
    pub fn take_dirty(&mut self) -> Vec<LayoutRegion> {
        if self.suspended {
            return Vec::new();
        }
        let regions = LayoutRegion::ALL
            .into_iter()
            .filter(|region| self.dirty.contains(region))
            .collect();
        self.dirty.clear();
        regions
    }

    /// Suspend invalidation processing.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume invalidation processing, promoting deferred invalidations.
    pub fn resume(&mut self) {
        self.suspended = false;

        let deferred = std::mem::take(&mut self.deferred);
        self.dirty.extend(deferred);
    }

    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}
