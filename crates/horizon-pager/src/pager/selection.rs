//! Authoritative selection state of the pager.

use crate::index::PageIndex;

/// Current and previous selection, plus whether the current one is settled.
///
/// `previous` is what a drag that ends without completing a page change
/// rolls back to. `committed` is `false` exactly while a drag-driven
/// candidate has not yet settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<PageIndex>,
    previous: Option<PageIndex>,
    committed: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
            committed: true,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Option<PageIndex> {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> Option<PageIndex> {
        self.previous
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Set `current` if nothing was ever selected. Returns whether it was set.
    pub fn seed(&mut self, index: PageIndex) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.current = Some(index);
        self.committed = true;
        true
    }

    /// Move to `index` as a settled selection.
    pub fn commit_to(&mut self, index: PageIndex) {
        self.previous = self.current;
        self.current = Some(index);
        self.committed = true;
    }

    /// Move to `index` as a drag candidate that may still roll back.
    pub fn propose(&mut self, index: PageIndex) {
        self.previous = self.current;
        self.current = Some(index);
        self.committed = false;
    }

    /// Roll back to `previous` if `leaving` is the current page.
    ///
    /// Returns the index rolled back to. Nothing happens if there is no
    /// previous index or it equals `leaving`.
    pub fn rollback_if_current(&mut self, leaving: PageIndex) -> Option<PageIndex> {
        if self.current != Some(leaving) {
            return None;
        }
        let previous = self.previous.filter(|&p| p != leaving)?;
        self.current = Some(previous);
        self.committed = true;
        Some(previous)
    }

    /// Mark the current selection as settled.
    pub fn settle(&mut self) {
        self.committed = true;
    }

    /// Keep both indices inside a sequence of `count` elements.
    ///
    /// `current` is clamped to the last element; a `previous` that no longer
    /// exists is dropped. An empty sequence leaves the state untouched.
    /// Returns whether `current` changed.
    pub fn clamp(&mut self, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        if self.previous.is_some_and(|p| !p.is_within(count)) {
            self.previous = None;
        }
        match self.current {
            Some(current) if !current.is_within(count) => {
                self.current = Some(PageIndex::new(count - 1));
                true
            }
            _ => false,
        }
    }

    pub fn clear_previous(&mut self) {
        self.previous = None;
    }
}
