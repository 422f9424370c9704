//! Priority-driven font size scaling.
//!
//! Font sizes are resolved per batch: every timer's priority is ranked
//! against the other timers in the same layout call, then mapped into
//! `[min_size, effective_max]`. The effective maximum is recomputed each
//! call so the single longest label provably fits the canvas width.

use chronoscape_core::{geometry::Size, text::TextMetrics};

use crate::layout::DisplayItem;

/// Resolves font sizes for one batch of timers.
///
/// Batches of four or more timers use logarithmic compression instead of
/// a linear priority ramp: with many timers, linear scaling makes
/// low-priority items illegibly small or high-priority items
/// overwhelmingly large, while `ln(1 + t·(e−1))` narrows the spread and
/// still preserves rank order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FontScaler {
    min_size: f32,
    effective_max: f32,
    min_priority: i32,
    max_priority: i32,
    compress: bool,
}

impl FontScaler {
    /// Ranks the batch and computes the effective maximum font size.
    ///
    /// The effective maximum starts at `max_size` and shrinks by the
    /// ratio of available width to the longest label's estimated width
    /// whenever that label would overflow `canvas.width − 2·margin`,
    /// flooring at `min_size`.
    pub fn new(
        items: &[DisplayItem<'_>],
        canvas: Size,
        min_size: f32,
        max_size: f32,
        margin: f32,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let effective_max = if items.is_empty() {
            max_size
        } else {
            let available_width = canvas.width() - margin * 2.0;
            let longest_text = items
                .iter()
                .map(DisplayItem::text)
                .max_by_key(|text| text.chars().count())
                .unwrap_or("");
            let estimated_width = metrics.measure(longest_text, max_size).width();

            if estimated_width > available_width {
                let scale_factor = available_width / estimated_width;
                min_size.max(max_size * scale_factor)
            } else {
                max_size
            }
        };

        let min_priority = items.iter().map(DisplayItem::priority).min().unwrap_or(1);
        let max_priority = items.iter().map(DisplayItem::priority).max().unwrap_or(1);

        Self {
            min_size,
            effective_max,
            min_priority,
            max_priority,
            compress: items.len() >= 4,
        }
    }

    /// Returns the per-batch upper font size bound
    #[cfg(test)]
    pub fn effective_max(&self) -> f32 {
        self.effective_max
    }

    /// Resolves the font size for a timer with the given priority.
    pub fn size_for(&self, priority: i32) -> f32 {
        // A single shared priority value has no rank to scale by
        if self.min_priority == self.max_priority {
            return (self.min_size + self.effective_max) / 2.0;
        }

        // Widened so extreme priority spreads cannot overflow i32
        let normalized = (priority as i64 - self.min_priority as i64) as f64
            / (self.max_priority as i64 - self.min_priority as i64) as f64;

        let scale = if self.compress {
            (1.0 + normalized * (std::f64::consts::E - 1.0)).ln()
        } else {
            normalized
        };

        let size = self.min_size + scale as f32 * (self.effective_max - self.min_size);
        size.clamp(self.min_size, self.effective_max)
    }
}
