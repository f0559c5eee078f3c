//! Tab descriptions.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Size;

/// Opaque handle to an icon image.
///
/// Image decoding and drawing belong to the host. The pager carries the
/// handle through to the tile render model together with the tint color
/// the host should apply.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    source: Arc<str>,
}

impl Icon {
    /// Create an icon handle from a host-defined source (asset name, path, URI).
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            source: Arc::from(source.as_ref()),
        }
    }

    /// The host-defined source string.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Icon").field(&&*self.source).finish()
    }
}

/// A single entry of the tab strip.
///
/// Items are immutable values: to change a tab, return a new sequence from
/// the data source and reload.
///
/// # Example
///
/// ```
/// use horizon_pager::menu::{Icon, MenuItem};
/// use horizon_pager::Size;
///
/// let plain = MenuItem::from("Inbox");
/// assert!(!plain.has_icon());
///
/// let starred = MenuItem::new("Starred")
///     .with_icon(Icon::new("star"), Size::new(16.0, 16.0))
///     .with_spacing(6.0);
/// assert!(starred.has_icon());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    /// Label text.
    pub title: Option<String>,
    pub icon: Option<Icon>,
    /// Icon size. A missing size contributes no width.
    pub icon_size: Option<Size>,
    /// Gap between icon and label.
    pub spacing: Option<f32>,
}

impl MenuItem {
    /// Create an item with a title and no icon.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Create an icon-only item.
    pub fn icon_only(icon: Icon, icon_size: Size) -> Self {
        Self {
            icon: Some(icon),
            icon_size: Some(icon_size),
            ..Default::default()
        }
    }

    /// Set the icon and its size.
    pub fn with_icon(mut self, icon: Icon, icon_size: Size) -> Self {
        self.icon = Some(icon);
        self.icon_size = Some(icon_size);
        self
    }

    /// Set the gap between icon and label.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Whether the item carries an icon.
    #[inline]
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Horizontal space taken by the icon and its trailing gap.
    ///
    /// Zero for items without an icon, even if a size or spacing is set.
    pub fn icon_extent(&self) -> f32 {
        if self.has_icon() {
            self.icon_size.map_or(0.0, |size| size.width) + self.spacing.unwrap_or(0.0)
        } else {
            0.0
        }
    }
}

impl From<&str> for MenuItem {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for MenuItem {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_extent() {
        let item = MenuItem::new("Photos")
            .with_icon(Icon::new("photo"), Size::new(20.0, 20.0))
            .with_spacing(4.0);
        assert_eq!(item.icon_extent(), 24.0);

        let no_icon = MenuItem {
            icon_size: Some(Size::new(20.0, 20.0)),
            spacing: Some(4.0),
            ..MenuItem::new("Photos")
        };
        assert_eq!(no_icon.icon_extent(), 0.0);
    }

    #[test]
    fn test_icon_without_size() {
        let item = MenuItem {
            icon: Some(Icon::new("dot")),
            spacing: Some(3.0),
            ..Default::default()
        };
        assert!(item.has_icon());
        assert_eq!(item.icon_extent(), 3.0);
    }

    #[test]
    fn test_from_title() {
        let item: MenuItem = "Recent".into();
        assert_eq!(item.title.as_deref(), Some("Recent"));
        assert_eq!(MenuItem::from(String::from("Recent")), item);
    }
}
