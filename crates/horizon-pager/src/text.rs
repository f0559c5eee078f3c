//! Text measurement capability.
//!
//! The pager never shapes text itself. Tab widths fall back to a measured
//! label width, so the host injects a [`TextMeasure`] backed by its own text
//! engine. [`EstimatedTextMeasure`] is used when none is supplied.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Font;

/// Measures the rendered width of a single line of text.
pub trait TextMeasure: Send + Sync {
    /// Width in logical points of `text` rendered with `font`.
    fn text_width(&self, text: &str, font: &Font) -> f32;
}

/// Average glyph advance as a fraction of the font size.
const AVERAGE_ADVANCE: f32 = 0.55;

/// Font-metric free width estimate.
///
/// Counts grapheme clusters so combined characters and emoji count once, and
/// rounds up to whole points.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasure;

impl TextMeasure for EstimatedTextMeasure {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        let clusters = text.graphemes(true).count() as f32;
        (clusters * font.size * AVERAGE_ADVANCE).ceil()
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &Font) -> f32 + Send + Sync,
{
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        self(text, font)
    }
}
