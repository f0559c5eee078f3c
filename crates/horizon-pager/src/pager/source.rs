//! Page data capability.

use crate::index::PageIndex;
use crate::menu::MenuItem;

/// Supplies the tabs and page content of a [`PagerController`](super::PagerController).
///
/// `page` must be answerable for every index below `menu_items().len()`.
pub trait PagerDataSource: Send + Sync {
    /// Host-defined page content (a view handle, a model, an id).
    type Page: Clone + Send + 'static;

    /// Index shown on the first reload.
    fn starting_index(&self) -> usize {
        0
    }

    /// Tabs, one per page, in display order.
    fn menu_items(&self) -> Vec<MenuItem> {
        Vec::new()
    }

    /// Content of the page at `index`.
    fn page(&self, index: PageIndex) -> Self::Page;
}
