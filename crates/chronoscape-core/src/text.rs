//! Text measurement strategies.
//!
//! The layout engine needs to know how much space a timer label occupies
//! at a given font size. Real glyph metrics require a font backend, so
//! measurement sits behind the [`TextMetrics`] trait:
//!
//! - [`EstimatedMetrics`] - the default approximate monospace model. It
//!   is cheap, deterministic, and has no font dependency, which keeps
//!   layout results reproducible across machines.
//! - [`ShapedMetrics`] - shaped measurement through cosmic-text, for
//!   hosts that want label boxes matched to the actual rendered text.
//!
//! Both implementations report the padded box a label needs, not the bare
//! ink extent, so swapping one for the other never changes the rest of
//! the layout contract.

use std::sync::Mutex;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::geometry::Size;

/// Approximate advance width of one character, as a fraction of font size.
pub const CHAR_WIDTH_RATIO: f32 = 0.6;

/// Line height as a fraction of font size.
pub const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Horizontal padding added around a label, in canvas units.
pub const LABEL_PADDING_X: f32 = 32.0;

/// Vertical padding added around a label, in canvas units.
pub const LABEL_PADDING_Y: f32 = 16.0;

/// Measures the padded on-screen extent of a single-line label.
pub trait TextMetrics: Send + Sync {
    /// Calculate the padded size of `text` rendered at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Monospace character-count estimate.
///
/// Width is `chars · 0.6 · font_size` plus fixed padding; height is one
/// line at `1.2 · font_size` plus fixed padding. Coarse, but monotone in
/// both text length and font size, which is all the placement search
/// relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMetrics;

impl TextMetrics for EstimatedMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let char_count = text.chars().count() as f32;
        Size::new(
            char_count * font_size * CHAR_WIDTH_RATIO + LABEL_PADDING_X,
            font_size * LINE_HEIGHT_RATIO + LABEL_PADDING_Y,
        )
    }
}

/// Shaped text measurement backed by cosmic-text.
///
/// Maintains a reusable `FontSystem` instance to avoid expensive
/// recreation on every measurement.
pub struct ShapedMetrics {
    font_system: Mutex<FontSystem>,
    font_family: String,
}

impl ShapedMetrics {
    /// Create a new shaped measurer for the given font family.
    pub fn new(font_family: impl Into<String>) -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
            font_family: font_family.into(),
        }
    }
}

impl TextMetrics for ShapedMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let mut font_system = self
            .font_system
            .lock()
            .expect("failed to lock FontSystem");

        let line_height = font_size * LINE_HEIGHT_RATIO;
        let metrics = Metrics::new(font_size, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(&self.font_family));

        // Unlimited buffer size so the text flows on one natural line
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // Rightmost glyph position across layout runs gives the ink width
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // Fall back to the estimate when no runs are available
            max_width = text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO;
            total_height = metrics.line_height;
        }

        Size::new(
            max_width + LABEL_PADDING_X,
            total_height + LABEL_PADDING_Y,
        )
    }
}
