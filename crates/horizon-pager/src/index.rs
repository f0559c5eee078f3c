//! Addressing for tabs and pages.

use std::fmt;

/// Position of a tab and its page.
///
/// Tabs and pages share one index space: tab `n` always belongs to page `n`.
/// The section is always `0`; it is kept so hosts backed by sectioned list
/// views can pass their index paths through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PageIndex {
    item: usize,
    section: usize,
}

impl PageIndex {
    /// Index of the given item in section zero.
    #[inline]
    pub const fn new(item: usize) -> Self {
        Self { item, section: 0 }
    }

    /// Zero-based position in the tab/page sequence.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }

    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Whether this index addresses an element of a sequence of length `count`.
    #[inline]
    pub const fn is_within(&self, count: usize) -> bool {
        self.item < count
    }
}

impl From<usize> for PageIndex {
    fn from(item: usize) -> Self {
        Self::new(item)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
