//! Configuration types for wallpaper rendering.
//!
//! This module provides configuration structures that control how timers
//! are laid out and styled. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Controls the placement [`Algorithm`] and the layout tuning knobs.
//! - [`StyleConfig`] - Controls visual styling options such as colors and font family.
//!
//! # Example
//!
//! ```
//! # use chronoscape::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use chronoscape_core::color::Color;

use crate::layout::Algorithm;

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Placement algorithm and layout tuning settings.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Placement algorithm and layout tuning configuration.
///
/// The numeric knobs default to the values the layout engines were tuned
/// with; overriding them shifts every font size and placement decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Default placement [`Algorithm`] when neither the document nor the
    /// caller picks one.
    algorithm: Algorithm,

    /// Lower font size clamp, in logical units.
    min_font_size: f32,

    /// Upper font size clamp, before the per-batch dynamic shrink.
    max_font_size: f32,

    /// Margin kept clear along all four canvas edges.
    margin: f32,

    /// Gap between stacked items in the vertical layout.
    item_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            min_font_size: 16.0,
            max_font_size: 118.0,
            margin: 40.0,
            item_spacing: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the configured placement [`Algorithm`].
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the lower font size clamp.
    pub fn min_font_size(&self) -> f32 {
        self.min_font_size
    }

    /// Returns the upper font size clamp.
    pub fn max_font_size(&self) -> f32 {
        self.max_font_size
    }

    /// Returns the canvas edge margin.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the vertical layout item gap.
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }
}

/// Visual styling configuration for rendered wallpapers.
///
/// Controls appearance options such as colors and the font family. Fields
/// that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] for the wallpaper, as a color string.
    background_color: Option<String>,

    /// Default text [`Color`] for timers without a color of their own,
    /// as a color string.
    text_color: Option<String>,

    /// Font family used for timer labels.
    font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            text_color: None,
            font_family: String::from("monospace"),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed default text [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn text_color(&self) -> Result<Option<Color>, String> {
        self.text_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid text color in config: {err}"))
    }

    /// Returns the font family for timer labels.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.algorithm(), Algorithm::Spiral);
        assert_eq!(config.min_font_size(), 16.0);
        assert_eq!(config.max_font_size(), 118.0);
        assert_eq!(config.margin(), 40.0);
        assert_eq!(config.item_spacing(), 10.0);
    }

    #[test]
    fn test_deserialize_partial_layout_section() {
        let config: AppConfig = serde_json::from_str(
            r#"{"layout": {"algorithm": "vertical", "margin": 24.0}}"#,
        )
        .unwrap();

        assert_eq!(config.layout().algorithm(), Algorithm::Vertical);
        assert_eq!(config.layout().margin(), 24.0);
        // Untouched knobs keep their defaults
        assert_eq!(config.layout().max_font_size(), 118.0);
        assert_eq!(config.style().font_family(), "monospace");
    }

    #[test]
    fn test_style_colors_parse() {
        let config: AppConfig = serde_json::from_str(
            r##"{"style": {"background_color": "#101418", "text_color": "white"}}"##,
        )
        .unwrap();

        assert!(config.style().background_color().unwrap().is_some());
        assert!(config.style().text_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let config: AppConfig = serde_json::from_str(
            r#"{"style": {"background_color": "not-a-color"}}"#,
        )
        .unwrap();

        assert!(config.style().background_color().is_err());
    }

    #[test]
    fn test_defaults_leave_colors_unset() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.style().text_color().unwrap().is_none());
    }
}
