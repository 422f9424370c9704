//! Vertical stack placement engine.
//!
//! Clean top-to-bottom layout: timers stack in descending priority order
//! on the canvas midline. The whole stack is vertically centered when it
//! fits; when it does not, the inter-item spacing is compressed (never
//! below zero) so the stack spans exactly the buffered canvas height.

use std::sync::Arc;

use chronoscape_core::{
    geometry::{Point, Size},
    text::TextMetrics,
};

use crate::layout::{
    DisplayItem, Placement, engines::PlacementEngine, engines::sorted_by_priority,
    font::FontScaler,
};

/// Vertical stack placement engine.
pub struct Engine {
    min_font_size: f32,
    max_font_size: f32,
    margin: f32,
    item_spacing: f32,
    metrics: Arc<dyn TextMetrics>,
}

impl Engine {
    /// Create a new vertical placement engine using the given measurement
    /// strategy
    pub fn new(metrics: Arc<dyn TextMetrics>) -> Self {
        Self {
            min_font_size: 16.0,
            max_font_size: 118.0,
            margin: 40.0,
            item_spacing: 10.0,
            metrics,
        }
    }

    /// Set the lower font size clamp
    pub fn set_min_font_size(&mut self, size: f32) -> &mut Self {
        self.min_font_size = size;
        self
    }

    /// Set the upper font size clamp
    pub fn set_max_font_size(&mut self, size: f32) -> &mut Self {
        self.max_font_size = size;
        self
    }

    /// Set the margin kept clear along the canvas edges
    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.margin = margin;
        self
    }

    /// Set the vertical gap between stacked items
    pub fn set_item_spacing(&mut self, spacing: f32) -> &mut Self {
        self.item_spacing = spacing;
        self
    }
}

impl PlacementEngine for Engine {
    fn calculate<'a>(&self, items: &[DisplayItem<'a>], canvas: Size) -> Vec<Placement<'a>> {
        if items.is_empty() {
            return Vec::new();
        }

        let scaler = FontScaler::new(
            items,
            canvas,
            self.min_font_size,
            self.max_font_size,
            self.margin,
            &*self.metrics,
        );

        // Measure everything up front; the stack geometry depends on the
        // total content height
        let measured: Vec<(&DisplayItem<'a>, f32, Size)> = sorted_by_priority(items)
            .into_iter()
            .map(|item| {
                let font_size = scaler.size_for(item.priority());
                let size = self.metrics.measure(item.text(), font_size);
                (item, font_size, size)
            })
            .collect();

        let content_height: f32 = measured.iter().map(|(_, _, size)| size.height()).sum();
        let gap_count = measured.len().saturating_sub(1) as f32;
        let total_height = content_height + gap_count * self.item_spacing;
        let available_height = canvas.height() - self.margin * 2.0;

        // When the stack overflows, compress the gaps so the items span
        // exactly the available height; gaps never go negative
        let (spacing, mut current_y) = if total_height > available_height {
            let compressed =
                ((available_height - content_height) / gap_count.max(1.0)).max(0.0);
            (compressed, self.margin)
        } else {
            (
                self.item_spacing,
                self.margin + (available_height - total_height) / 2.0,
            )
        };

        let center_x = canvas.width() / 2.0;
        let mut placements = Vec::with_capacity(measured.len());

        for (item, font_size, size) in measured {
            let position = Point::new(center_x, current_y + size.height() / 2.0);
            let bounds = position.to_bounds(size);

            placements.push(Placement::new(
                item.timer(),
                item.text().to_string(),
                position,
                font_size,
                bounds,
            ));

            current_y += size.height() + spacing;
        }

        placements
    }
}
