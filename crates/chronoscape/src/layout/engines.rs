//! Placement engine factory module.
//!
//! This module provides a system for selecting and using different
//! placement engines based on the [`Algorithm`] chosen by the caller.
//! Engines are created on demand and cached per configuration through
//! [`EngineBuilder`].
//!
//! Every engine produces the same output shape: one [`Placement`] per
//! input item, in priority order.

mod spiral;
mod vertical;

use std::{collections::HashMap, sync::Arc};

use log::trace;

use chronoscape_core::{
    geometry::Size,
    text::{EstimatedMetrics, TextMetrics},
};

use crate::{
    config::LayoutConfig,
    layout::{Algorithm, DisplayItem, Placement},
};

/// Trait defining the interface for timer placement engines.
pub trait PlacementEngine {
    /// Calculate placements for one batch of timers.
    ///
    /// Implementations are pure: no state survives between calls, and
    /// identical inputs yield identical output. Ties in priority keep
    /// the input order (stable sort).
    fn calculate<'a>(&self, items: &[DisplayItem<'a>], canvas: Size) -> Vec<Placement<'a>>;
}

/// Builder for creating and configuring placement engines.
pub struct EngineBuilder {
    // Cache for reusing engines with the same configuration
    engines: HashMap<Algorithm, Box<dyn PlacementEngine>>,

    // Configuration options
    min_font_size: f32,
    max_font_size: f32,
    margin: f32,
    item_spacing: f32,
    metrics: Arc<dyn TextMetrics>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine builder configured from a [`LayoutConfig`]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            engines: HashMap::new(),
            min_font_size: config.min_font_size(),
            max_font_size: config.max_font_size(),
            margin: config.margin(),
            item_spacing: config.item_spacing(),
            metrics: Arc::new(EstimatedMetrics),
        }
    }

    /// Set the lower font size clamp
    pub fn with_min_font_size(mut self, size: f32) -> Self {
        self.min_font_size = size;
        self
    }

    /// Set the upper font size clamp, before the per-call dynamic shrink
    pub fn with_max_font_size(mut self, size: f32) -> Self {
        self.max_font_size = size;
        self
    }

    /// Set the margin kept clear along all four canvas edges
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the gap between items in the vertical layout
    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Set the text measurement strategy shared by all engines
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a placement engine for the specified algorithm with configured
    /// options
    pub fn engine(&mut self, algorithm: Algorithm) -> &dyn PlacementEngine {
        let engine = self.engines.entry(algorithm).or_insert_with(|| {
            let engine: Box<dyn PlacementEngine> = match algorithm {
                Algorithm::Spiral => {
                    let mut e = spiral::Engine::new(Arc::clone(&self.metrics));
                    e.set_min_font_size(self.min_font_size);
                    e.set_max_font_size(self.max_font_size);
                    e.set_margin(self.margin);
                    Box::new(e)
                }
                Algorithm::Vertical => {
                    let mut e = vertical::Engine::new(Arc::clone(&self.metrics));
                    e.set_min_font_size(self.min_font_size);
                    e.set_max_font_size(self.max_font_size);
                    e.set_margin(self.margin);
                    e.set_item_spacing(self.item_spacing);
                    Box::new(e)
                }
            };
            engine
        });
        // Dereference to avoid returning reference to temporary
        &**engine
    }

    /// Calculate placements with the engine for `algorithm`.
    pub fn calculate<'a>(
        &mut self,
        algorithm: Algorithm,
        items: &[DisplayItem<'a>],
        canvas: Size,
    ) -> Vec<Placement<'a>> {
        let placements = self.engine(algorithm).calculate(items, canvas);
        trace!(
            algorithm:% = algorithm,
            placements = placements.len();
            "Calculated layout"
        );
        placements
    }
}

/// Returns references to `items` sorted by descending priority.
///
/// The sort is stable, so timers sharing a priority keep their input
/// order across calls.
fn sorted_by_priority<'a, 'b>(items: &'b [DisplayItem<'a>]) -> Vec<&'b DisplayItem<'a>> {
    let mut sorted: Vec<&DisplayItem<'a>> = items.iter().collect();
    sorted.sort_by(|a, b| b.priority().cmp(&a.priority()));
    sorted
}
