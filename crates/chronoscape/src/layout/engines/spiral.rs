//! Greedy spiral placement engine.
//!
//! Classic word-cloud placement: timers are placed in descending priority
//! order, the first at the canvas center, each subsequent one at the
//! first free spot found along an expanding polar spiral. Higher-priority
//! timers therefore claim the central, least obstructed positions while
//! later timers are pushed outward.

use std::{f32::consts::TAU, sync::Arc};

use log::debug;

use chronoscape_core::{
    geometry::{Bounds, Point, Size},
    text::TextMetrics,
};

use crate::layout::{
    DisplayItem, Placement, engines::PlacementEngine, engines::sorted_by_priority,
    font::FontScaler,
};

/// Angle increment per spiral sample, in radians.
const ANGLE_STEP: f32 = 0.1;

/// Base radius growth per sample; scaled by accumulated angle so the
/// spiral widens as it unwinds.
const RADIUS_STEP: f32 = 5.0;

/// Greedy spiral placement engine.
pub struct Engine {
    min_font_size: f32,
    max_font_size: f32,
    margin: f32,
    metrics: Arc<dyn TextMetrics>,
}

impl Engine {
    /// Create a new spiral placement engine using the given measurement
    /// strategy
    pub fn new(metrics: Arc<dyn TextMetrics>) -> Self {
        Self {
            min_font_size: 16.0,
            max_font_size: 118.0,
            margin: 40.0,
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

    /// Scan outward along the spiral for a spot where a box of `size`
    /// fits inside the buffered canvas without touching any placed box.
    ///
    /// The search gives up once the radius exceeds the larger canvas
    /// dimension and falls back to the canvas center; on a crowded or
    /// tiny canvas several trailing timers may therefore stack at the
    /// center. That degenerate behavior is deliberate: it bounds the
    /// search instead of promising a packing that cannot exist.
    fn find_spiral_position(
        &self,
        center: Point,
        size: Size,
        placed: &[Bounds],
        canvas: Size,
    ) -> Point {
        let max_radius = canvas.max_dimension();
        let mut angle: f32 = 0.0;
        let mut radius: f32 = 0.0;

        while radius < max_radius {
            let candidate = Point::new(
                center.x() + radius * angle.cos(),
                center.y() + radius * angle.sin(),
            );
            let test_bounds = candidate.to_bounds(size);

            if test_bounds.fits_canvas(canvas, self.margin)
                && !placed.iter().any(|bounds| test_bounds.intersects(bounds))
            {
                return candidate;
            }

            angle += ANGLE_STEP;
            radius += RADIUS_STEP * angle / TAU;
        }

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            placed = placed.len();
            "Spiral search exhausted, falling back to canvas center"
        );
        center
    }

    /// Clamp a center position so the label box stays inside the
    /// buffered canvas region, whatever the spiral search returned.
    fn constrain_to_canvas(&self, position: Point, size: Size, canvas: Size) -> Point {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;

        let x = position
            .x()
            .min(canvas.width() - self.margin - half_width)
            .max(self.margin + half_width);
        let y = position
            .y()
            .min(canvas.height() - self.margin - half_height)
            .max(self.margin + half_height);

        Point::new(x, y)
    }
}

impl PlacementEngine for Engine {
    fn calculate<'a>(&self, items: &[DisplayItem<'a>], canvas: Size) -> Vec<Placement<'a>> {
        if items.is_empty() {
            return Vec::new();
        }

        let center = canvas.center();
        let scaler = FontScaler::new(
            items,
            canvas,
            self.min_font_size,
            self.max_font_size,
            self.margin,
            &*self.metrics,
        );

        let mut placements = Vec::with_capacity(items.len());
        let mut placed: Vec<Bounds> = Vec::with_capacity(items.len());

        for item in sorted_by_priority(items) {
            let font_size = scaler.size_for(item.priority());
            let size = self.metrics.measure(item.text(), font_size);

            let position = if placements.is_empty() {
                // The highest-priority timer owns the canvas center
                center
            } else {
                self.find_spiral_position(center, size, &placed, canvas)
            };
            let position = self.constrain_to_canvas(position, size, canvas);
            let bounds = position.to_bounds(size);

            placements.push(Placement::new(
                item.timer(),
                item.text().to_string(),
                position,
                font_size,
                bounds,
            ));
            placed.push(bounds);
        }

        placements
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use time::macros::datetime;

    use chronoscape_core::{text::EstimatedMetrics, timer::Timer};

    use super::*;

    fn engine() -> Engine {
        Engine::new(Arc::new(EstimatedMetrics))
    }

    fn timers(priorities: &[i32]) -> Vec<Timer> {
        priorities
            .iter()
            .enumerate()
            .map(|(idx, &priority)| {
                Timer::new(
                    format!("t{idx}"),
                    format!("T{idx}"),
                    datetime!(2027-01-01 00:00 UTC),
                )
                .with_priority(priority)
            })
            .collect()
    }

    fn items<'a>(timers: &'a [Timer], text: &str) -> Vec<DisplayItem<'a>> {
        timers
            .iter()
            .map(|timer| DisplayItem::new(timer, text))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let placements = engine().calculate(&[], Size::new(800.0, 600.0));
        assert!(placements.is_empty());
    }

    #[test]
    fn test_single_timer_sits_at_center_with_midpoint_font() {
        let timers = timers(&[1]);
        let items = items(&timers, "New Year: 12d 4h");
        let placements = engine().calculate(&items, Size::new(1920.0, 1080.0));

        assert_eq!(placements.len(), 1);
        assert_approx_eq!(f32, placements[0].position().x(), 960.0);
        assert_approx_eq!(f32, placements[0].position().y(), 540.0);
        // One timer means one shared priority value: the midpoint rule
        assert_approx_eq!(f32, placements[0].font_size(), (16.0 + 118.0) / 2.0);
    }

    #[test]
    fn test_five_timers_no_overlap_within_bounds() {
        // Short labels; longer text on a canvas this small pushes the
        // search into exhaustion and trailing timers onto the center
        let timers = timers(&[5, 4, 3, 2, 1]);
        let items = items(&timers, "5d");
        let canvas = Size::new(800.0, 600.0);
        let placements = engine().calculate(&items, canvas);

        assert_eq!(placements.len(), 5);

        // Highest priority first, at the canvas center
        assert_eq!(placements[0].timer().priority(), 5);
        assert_approx_eq!(f32, placements[0].position().x(), 400.0);
        assert_approx_eq!(f32, placements[0].position().y(), 300.0);

        // Every box stays inside the buffered region
        for placement in &placements {
            let bounds = placement.bounds();
            assert!(bounds.min_x() >= 40.0, "box crosses left buffer: {bounds:?}");
            assert!(bounds.max_x() <= 760.0, "box crosses right buffer: {bounds:?}");
            assert!(bounds.min_y() >= 40.0, "box crosses top buffer: {bounds:?}");
            assert!(bounds.max_y() <= 560.0, "box crosses bottom buffer: {bounds:?}");
        }

        // No two boxes overlap
        for (i, a) in placements.iter().enumerate() {
            for b in placements.iter().skip(i + 1) {
                assert!(
                    !a.bounds().intersects(&b.bounds()),
                    "{} overlaps {}",
                    a.timer().id(),
                    b.timer().id()
                );
            }
        }
    }

    #[test]
    fn test_every_input_id_appears_once() {
        let timers = timers(&[2, 7, 7, 1, 4, 3]);
        let items = items(&timers, "T: 1h 2m");
        let placements = engine().calculate(&items, Size::new(1600.0, 900.0));

        assert_eq!(placements.len(), items.len());
        let mut ids: Vec<&str> = placements
            .iter()
            .map(|p| p.timer().id().as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let timers = timers(&[3, 1, 4, 1, 5]);
        let items = items(&timers, "T: 59s");
        let canvas = Size::new(1024.0, 768.0);

        let engine = engine();
        let first = engine.calculate(&items, canvas);
        let second = engine.calculate(&items, canvas);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.timer().id(), b.timer().id());
            assert_eq!(a.position(), b.position());
            assert_eq!(a.font_size(), b.font_size());
            assert_eq!(a.bounds(), b.bounds());
        }
    }

    #[test]
    fn test_degenerate_canvas_does_not_panic() {
        let timers = timers(&[2, 1]);
        let items = items(&timers, "T: 3s");
        let placements = engine().calculate(&items, Size::default());

        assert_eq!(placements.len(), 2);
        for placement in &placements {
            assert!(placement.position().x().is_finite());
            assert!(placement.position().y().is_finite());
            assert!(placement.font_size().is_finite());
        }
    }

    #[test]
    fn test_crowded_canvas_falls_back_to_center() {
        // Far more timers than a small canvas can hold; trailing timers
        // end up stacked near the center instead of the search spinning
        let timers = timers(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let items = items(&timers, "Some long running timer: 100d 5h");
        let placements = engine().calculate(&items, Size::new(300.0, 200.0));
        assert_eq!(placements.len(), 10);
    }
}
