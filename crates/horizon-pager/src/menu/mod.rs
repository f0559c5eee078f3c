//! The tab strip.
//!
//! - [`MenuStrip`]: tab sequence, highlight, geometry and selection signals
//! - [`MenuItem`] / [`Icon`]: tab descriptions
//! - [`MenuDataSource`] / [`TabLayoutDelegate`]: capabilities the strip consumes
//! - [`MenuTile`]: per-tab render model handed to the host

mod item;
mod layout;
mod source;
mod strip;
mod tile;

pub use item::{Icon, MenuItem};
pub use layout::{DEFAULT_TAB_SPACING, TabAlignment, TabGeometry, leading_inset};
pub use source::{MenuDataSource, StaticMenuSource, TabLayoutDelegate};
pub use strip::{MenuStrip, TabChange};
pub use tile::MenuTile;
