//! Appearance and layout configuration.
//!
//! [`MenuStyle`] and [`PageStyle`] can be built in code, or loaded from TOML
//! or JSON through [`PagerConfig`]. Every field has a default, so a config
//! file only needs to name the values it changes:
//!
//! ```
//! use horizon_pager::config::PagerConfig;
//! use horizon_pager::menu::TabAlignment;
//!
//! let config = PagerConfig::from_toml_str(r##"
//!     [menu]
//!     alignment = "left"
//!     selected_color = "#FFCC00"
//!
//!     [pages]
//!     bounces = false
//! "##).unwrap();
//!
//! assert_eq!(config.menu.alignment, TabAlignment::Left);
//! assert_eq!(config.menu.height, 42.0);
//! assert!(!config.pages.bounces);
//! ```
//!
//! Changing a style on a live widget never resets items or selection. The
//! `diff` functions report which [`LayoutRegion`]s a change touches so only
//! those passes are rerun.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PagerResult;
use crate::geometry::{Color, EdgeInsets, Font, LayoutDirection, Size};
use crate::invalidation::LayoutRegion;
use crate::menu::TabAlignment;

/// Default height of the menu strip.
pub const DEFAULT_MENU_HEIGHT: f32 = 42.0;

/// Default thickness of the selection indicator bar.
pub const DEFAULT_INDICATOR_THICKNESS: f32 = 2.0;

/// Appearance of the menu strip and its tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyle {
    /// Label font.
    pub font: Font,
    /// Label and icon color of unselected tabs.
    pub deselected_color: Color,
    /// Label and icon color of the selected tab.
    pub selected_color: Color,
    /// Color of the indicator bar.
    pub indicator_color: Color,
    /// Whether the indicator bar is drawn under the selected tab.
    pub has_indicator: bool,
    pub indicator_thickness: f32,
    /// Alignment used when no layout delegate overrides it.
    pub alignment: TabAlignment,
    /// Height of the strip.
    pub height: f32,
    /// Position of the strip inside the pager bounds.
    pub edge_insets: EdgeInsets,
    /// Tile area inside the strip.
    pub content_insets: EdgeInsets,
    /// Rtl places the first tab at the trailing edge and puts icons after labels.
    pub layout_direction: LayoutDirection,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            deselected_color: Color::DARK_GRAY,
            selected_color: Color::WHITE,
            indicator_color: Color::ORANGE,
            has_indicator: true,
            indicator_thickness: DEFAULT_INDICATOR_THICKNESS,
            alignment: TabAlignment::Center,
            height: DEFAULT_MENU_HEIGHT,
            edge_insets: EdgeInsets::ZERO,
            content_insets: EdgeInsets::ZERO,
            layout_direction: LayoutDirection::Ltr,
        }
    }
}

impl MenuStyle {
    /// Layout regions affected by changing `self` into `new`.
    pub fn diff(&self, new: &MenuStyle) -> Vec<LayoutRegion> {
        let mut regions = Vec::new();

        let resized = self.height != new.height || self.edge_insets != new.edge_insets;
        if resized || self.layout_direction != new.layout_direction {
            regions.push(LayoutRegion::MenuFrame);
        }
        if resized {
            // The page area sits below the strip.
            regions.push(LayoutRegion::PageGeometry);
        }
        if self.font != new.font
            || self.alignment != new.alignment
            || self.content_insets != new.content_insets
            || self.height != new.height
            || self.layout_direction != new.layout_direction
        {
            regions.push(LayoutRegion::MenuGeometry);
        }
        if self.font != new.font
            || self.layout_direction != new.layout_direction
            || self.deselected_color != new.deselected_color
            || self.selected_color != new.selected_color
            || self.indicator_color != new.indicator_color
            || self.has_indicator != new.has_indicator
            || self.indicator_thickness != new.indicator_thickness
        {
            regions.push(LayoutRegion::MenuTiles);
        }

        regions
    }
}

/// Direction in which pages scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Layout and behavior of the page surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyle {
    pub scroll_direction: ScrollDirection,
    /// Spacing between rows (horizontal scrolling) or columns.
    pub line_spacing: f32,
    /// Spacing between consecutive pages.
    pub interitem_spacing: f32,
    /// Explicit page size. `None` fills the page frame.
    pub page_size: Option<Size>,
    pub background_color: Color,
    pub bounces: bool,
    pub shows_scroll_indicators: bool,
    /// Page area insets below the menu strip.
    pub edge_insets: EdgeInsets,
    /// Rtl orders horizontally scrolling pages from the right.
    pub layout_direction: LayoutDirection,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            scroll_direction: ScrollDirection::Horizontal,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
            page_size: None,
            background_color: Color::TRANSPARENT,
            bounces: true,
            shows_scroll_indicators: false,
            edge_insets: EdgeInsets::new(20.0, 0.0, 0.0, 0.0),
            layout_direction: LayoutDirection::Ltr,
        }
    }
}

impl PageStyle {
    /// Layout regions affected by changing `self` into `new`.
    pub fn diff(&self, new: &PageStyle) -> Vec<LayoutRegion> {
        let mut regions = Vec::new();

        if self.scroll_direction != new.scroll_direction
            || self.line_spacing != new.line_spacing
            || self.interitem_spacing != new.interitem_spacing
            || self.page_size != new.page_size
            || self.edge_insets != new.edge_insets
            || self.layout_direction != new.layout_direction
        {
            regions.push(LayoutRegion::PageGeometry);
        }
        if self.background_color != new.background_color
            || self.bounces != new.bounces
            || self.shows_scroll_indicators != new.shows_scroll_indicators
        {
            regions.push(LayoutRegion::PageSurface);
        }

        regions
    }
}

/// Complete pager configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    pub menu: MenuStyle,
    pub pages: PageStyle,
}

impl PagerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> PagerResult<Self> {
        let config = toml::from_str(source)?;
        tracing::debug!(target: "horizon_pager::config", "loaded configuration from TOML");
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> PagerResult<Self> {
        let config = serde_json::from_str(source)?;
        tracing::debug!(target: "horizon_pager::config", "loaded configuration from JSON");
        Ok(config)
    }

    /// Load a configuration file. Files ending in `.json` are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> PagerResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(target: "horizon_pager::config", path = %path.display(), "reading configuration");

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        }
    }

    /// Serialize as pretty-printed TOML.
    pub fn to_toml_string(&self) -> PagerResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> PagerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
