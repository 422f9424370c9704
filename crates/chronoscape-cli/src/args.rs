//! Command-line argument definitions for the Chronoscape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, canvas size,
//! algorithm selection, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Chronoscape wallpaper tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input timer document (JSON)
    #[arg(help = "Path to the timer document")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Canvas width in logical units
    #[arg(long, default_value_t = 1920.0)]
    pub width: f32,

    /// Canvas height in logical units
    #[arg(long, default_value_t = 1080.0)]
    pub height: f32,

    /// Placement algorithm (spiral, vertical); overrides the document
    /// and the configuration file
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
