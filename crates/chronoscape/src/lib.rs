//! Chronoscape - countdown timer wallpapers from a timer document.
//!
//! Loading, layout, and rendering for countdown timer collections. A JSON
//! timer document is turned into positioned, priority-scaled labels and
//! rendered to an SVG wallpaper.

pub mod config;
pub mod document;
pub mod export;
pub mod layout;

mod error;

pub use chronoscape_core::{color, geometry, text, timer};

pub use error::ChronoscapeError;

use log::{debug, info};
use time::OffsetDateTime;

use geometry::Size;
use timer::Timer;

use config::AppConfig;
use export::svg::SvgExporter;
use layout::{Algorithm, DisplayItem, EngineBuilder, Placement};

/// Builder for laying out and rendering timer wallpapers.
///
/// This provides an API for processing a timer collection through the
/// display text, layout, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use chronoscape::{WallpaperBuilder, config::AppConfig, geometry::Size};
/// use chronoscape::document::TimerDocument;
/// use time::OffsetDateTime;
///
/// let document = TimerDocument::from_path("timers.json")
///     .expect("Failed to load document");
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = WallpaperBuilder::new(config);
///
/// // Derive display text for "now", then lay the timers out
/// let items = builder.display_items(document.timers(), OffsetDateTime::now_utc());
/// let canvas = Size::new(1920.0, 1080.0);
/// let placements = builder.layout(&items, canvas);
///
/// // Render placements to SVG
/// let svg = builder.render_svg(&placements, canvas)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = WallpaperBuilder::default();
/// ```
#[derive(Default)]
pub struct WallpaperBuilder {
    config: AppConfig,
}

impl WallpaperBuilder {
    /// Create a new wallpaper builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pair each timer with the text it displays at `now`.
    ///
    /// The layout stage treats the text as opaque; deriving it here, once
    /// per pass, keeps a layout pass consistent even while the clock
    /// ticks underneath it.
    pub fn display_items<'a>(
        &self,
        timers: &'a [Timer],
        now: OffsetDateTime,
    ) -> Vec<DisplayItem<'a>> {
        timers
            .iter()
            .map(|timer| DisplayItem::new(timer, timer.display_text(now)))
            .collect()
    }

    /// Lay items out on the canvas with the configured algorithm.
    pub fn layout<'a>(&self, items: &[DisplayItem<'a>], canvas: Size) -> Vec<Placement<'a>> {
        self.layout_with(self.config.layout().algorithm(), items, canvas)
    }

    /// Lay items out on the canvas with an explicit algorithm, overriding
    /// the configured one.
    pub fn layout_with<'a>(
        &self,
        algorithm: Algorithm,
        items: &[DisplayItem<'a>],
        canvas: Size,
    ) -> Vec<Placement<'a>> {
        info!(
            algorithm:% = algorithm,
            timers = items.len(),
            width = canvas.width(),
            height = canvas.height();
            "Calculating wallpaper layout"
        );

        let placements =
            EngineBuilder::from_config(self.config.layout()).calculate(algorithm, items, canvas);

        debug!(placements = placements.len(); "Layout calculated");
        placements
    }

    /// Render placements to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `ChronoscapeError` for styling or rendering errors.
    pub fn render_svg(
        &self,
        placements: &[Placement<'_>],
        canvas: Size,
    ) -> Result<String, ChronoscapeError> {
        let exporter = SvgExporter::new().with_style(self.config.style().clone());
        let doc = exporter.render_wallpaper(placements, canvas)?;

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }
}
