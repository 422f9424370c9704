//! SVG rendering for timer wallpapers.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use chronoscape_core::{color::Color, geometry::Size};

use crate::{config::StyleConfig, export, layout::Placement};

/// SVG exporter for rendered wallpapers.
///
/// Renders a batch of [`Placement`]s into a single SVG document sized to
/// the canvas, with an optional background fill and per-timer text colors.
#[derive(Default)]
pub struct SvgExporter {
    style: StyleConfig,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given style for the background and text rendering
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Renders placements into an SVG document sized to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when a configured color string
    /// cannot be parsed.
    pub fn render_wallpaper(
        &self,
        placements: &[Placement<'_>],
        canvas: Size,
    ) -> Result<Document, export::Error> {
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        if let Some(background) = self
            .style
            .background_color()
            .map_err(export::Error::Render)?
        {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", background.to_string());
            doc = doc.add(rect);
        }

        let default_text_color = self.style.text_color().map_err(export::Error::Render)?;

        for placement in placements {
            doc = doc.add(self.render_placement(placement, default_text_color));
        }

        debug!(
            placements = placements.len(),
            width = canvas.width(),
            height = canvas.height();
            "SVG document rendered"
        );
        Ok(doc)
    }

    /// Renders one placed timer as a centered text element.
    fn render_placement(
        &self,
        placement: &Placement<'_>,
        default_color: Option<Color>,
    ) -> svg_element::Text {
        let mut text = svg_element::Text::new(placement.text())
            .set("x", placement.position().x())
            .set("y", placement.position().y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.style.font_family())
            .set("font-size", placement.font_size());

        // Per-timer color wins over the configured default
        if let Some(color) = placement.timer().color().or(default_color) {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        text
    }

    /// Writes an SVG document to a file
    pub fn write_document(&self, doc: Document, path: &Path) -> Result<(), export::Error> {
        info!(path:? = path; "Creating SVG file");
        let f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for SvgExporter {
    fn export_wallpaper(
        &self,
        placements: &[Placement<'_>],
        canvas: Size,
        path: &Path,
    ) -> Result<(), export::Error> {
        let doc = self.render_wallpaper(placements, canvas)?;
        self.write_document(doc, path)
    }
}
