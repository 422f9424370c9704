//! Timer layout computation.
//!
//! This module turns a list of timers into a list of [`Placement`]s: a
//! center position, a font size, and a bounding box for every timer, such
//! that labels fit the canvas, avoid each other, and scale with priority.
//!
//! Layout is a pure function of its inputs. Nothing is cached between
//! calls; every call recomputes the whole placement list, and identical
//! inputs produce identical output. The algorithm choice is plain data
//! passed by the caller ([`Algorithm`]), not engine state.

pub mod engines;
mod font;

pub use engines::{EngineBuilder, PlacementEngine};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use chronoscape_core::{
    geometry::{Bounds, Point, Size},
    timer::Timer,
};

use crate::config::LayoutConfig;

/// Selects the placement strategy for one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Word-cloud style placement along an expanding spiral; the highest
    /// priority timer sits at the canvas center.
    #[default]
    Spiral,
    /// A single vertical stack, highest priority at the top.
    Vertical,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Spiral => write!(f, "spiral"),
            Algorithm::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spiral" => Ok(Algorithm::Spiral),
            "vertical" => Ok(Algorithm::Vertical),
            other => Err(format!(
                "unknown layout algorithm `{other}` (expected `spiral` or `vertical`)"
            )),
        }
    }
}

/// A timer paired with the text it currently displays.
///
/// The layout engine treats the text as an opaque string of known length;
/// deriving it from the timer's target instant is the caller's concern
/// (see [`Timer::display_text`]).
#[derive(Debug, Clone)]
pub struct DisplayItem<'a> {
    timer: &'a Timer,
    text: String,
}

impl<'a> DisplayItem<'a> {
    /// Pairs a timer with its current display text.
    pub fn new(timer: &'a Timer, text: impl Into<String>) -> Self {
        Self {
            timer,
            text: text.into(),
        }
    }

    /// Returns the timer this item displays
    pub fn timer(&self) -> &'a Timer {
        self.timer
    }

    /// Returns the display text of this item
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the priority of the underlying timer
    pub fn priority(&self) -> i32 {
        self.timer.priority()
    }
}

/// The computed position, font size, and bounding box for one timer in
/// one layout pass.
///
/// Placements are recomputed wholesale on every call; stale lists are
/// discarded and replaced, never mutated incrementally.
#[derive(Debug, Clone)]
pub struct Placement<'a> {
    timer: &'a Timer,
    text: String,
    position: Point,
    font_size: f32,
    bounds: Bounds,
}

impl<'a> Placement<'a> {
    pub(crate) fn new(
        timer: &'a Timer,
        text: String,
        position: Point,
        font_size: f32,
        bounds: Bounds,
    ) -> Self {
        Self {
            timer,
            text,
            position,
            font_size,
            bounds,
        }
    }

    /// Returns the timer this placement positions
    pub fn timer(&self) -> &'a Timer {
        self.timer
    }

    /// Returns the display text rendered at this placement
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the center point of the rendered label
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the resolved font size, within the effective font range
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the estimated bounding box, centered on
    /// [`position`](Self::position)
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Computes placements for `items` on a canvas using the algorithm and
/// font/margin options in `config`.
///
/// The empty list yields an empty result. A degenerate (zero-area) canvas
/// is accepted without panicking, although no layout can honor the
/// positive-area constraints there; placements may then overlap or fall
/// outside the effective bounds.
///
/// # Examples
///
/// ```
/// use chronoscape::{config::LayoutConfig, layout};
/// use chronoscape_core::{geometry::Size, timer::Timer};
/// use time::macros::datetime;
///
/// let timer = Timer::new("launch", "Launch", datetime!(2027-01-01 00:00 UTC));
/// let items = vec![layout::DisplayItem::new(&timer, "Launch: 4d 2h 1m 9s")];
///
/// let placements = layout::compute_layout(&items, Size::new(1920.0, 1080.0), &LayoutConfig::default());
/// assert_eq!(placements.len(), 1);
/// ```
pub fn compute_layout<'a>(
    items: &[DisplayItem<'a>],
    canvas: Size,
    config: &LayoutConfig,
) -> Vec<Placement<'a>> {
    EngineBuilder::from_config(config).calculate(config.algorithm(), items, canvas)
}
