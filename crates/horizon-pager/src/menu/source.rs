//! Capabilities the tab strip consumes.

use crate::geometry::Size;
use crate::index::PageIndex;

use super::item::MenuItem;
use super::layout::TabAlignment;

/// Supplies the tabs shown by a [`MenuStrip`](super::MenuStrip).
///
/// Every method has a default, so an unset or partial source yields an empty
/// strip rather than an error.
pub trait MenuDataSource: Send + Sync {
    /// The tab sequence, in display order.
    fn items(&self) -> Vec<MenuItem> {
        Vec::new()
    }

    /// Index selected on the first reload.
    fn starting_index(&self) -> usize {
        0
    }
}

/// Optional overrides for tab geometry.
///
/// Returning `None` falls back to the strip's own computation: the style's
/// alignment, the default spacing, and a width measured from icon and label.
pub trait TabLayoutDelegate: Send + Sync {
    fn spacing_between_tabs(&self) -> Option<f32> {
        None
    }

    /// Explicit size of the tab at `index`.
    fn size_for_tab(&self, _index: PageIndex) -> Option<Size> {
        None
    }

    fn alignment(&self) -> Option<TabAlignment> {
        None
    }
}

/// A fixed list of items, used when the strip is fed by its owner.
#[derive(Debug, Clone, Default)]
pub struct StaticMenuSource {
    pub items: Vec<MenuItem>,
    pub starting_index: usize,
}

impl StaticMenuSource {
    pub fn new(items: Vec<MenuItem>, starting_index: usize) -> Self {
        Self {
            items,
            starting_index,
        }
    }
}

impl MenuDataSource for StaticMenuSource {
    fn items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn starting_index(&self) -> usize {
        self.starting_index
    }
}
