//! CLI logic for the Chronoscape wallpaper tool.
//!
//! This module contains the core CLI logic for the Chronoscape wallpaper
//! tool.

mod args;
mod config;

pub use args::Args;

use std::{path::Path, str::FromStr};

use log::info;
use time::OffsetDateTime;

use chronoscape::{
    ChronoscapeError, WallpaperBuilder,
    document::TimerDocument,
    export::{Exporter, svg::SvgExporter},
    geometry::Size,
    layout::Algorithm,
};

/// Run the Chronoscape CLI application
///
/// This function loads the timer document, lays the timers out on the
/// requested canvas, and writes the resulting SVG wallpaper to the
/// output file.
///
/// The placement algorithm is resolved in precedence order: the
/// `--algorithm` flag, then the algorithm recorded in the document, then
/// the configuration file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ChronoscapeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing or validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChronoscapeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing timer document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load and validate the timer document
    let document = TimerDocument::from_path(&args.input)?;

    // Resolve the placement algorithm: flag > document > config
    let algorithm = match &args.algorithm {
        Some(name) => Algorithm::from_str(name).map_err(ChronoscapeError::Config)?,
        None => document
            .algorithm()
            .unwrap_or_else(|| app_config.layout().algorithm()),
    };

    let canvas = Size::new(args.width, args.height);

    // Lay out the timers as they read right now
    let builder = WallpaperBuilder::new(app_config);
    let items = builder.display_items(document.timers(), OffsetDateTime::now_utc());
    let placements = builder.layout_with(algorithm, &items, canvas);

    // Write the output file
    let exporter = SvgExporter::new().with_style(builder.config().style().clone());
    exporter.export_wallpaper(&placements, canvas, Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
