//! The countdown timer data model.
//!
//! A [`Timer`] counts down to (or up from) a target instant and carries an
//! integer priority controlling how prominently the layout engine displays
//! it. Timers serialize to JSON with RFC3339 target instants, which is the
//! on-disk form shared with the host application.
//!
//! The display string a timer shows is derived from the target instant and
//! an explicitly passed "now"; the layout engine itself only ever sees the
//! resulting opaque string.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::color::Color;

const SECONDS_PER_YEAR: i64 = 31_536_000; // 365 days
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Opaque, stable identifier for a timer.
///
/// Identifiers correlate layout output back to input timers across
/// recomputation; the engine never inspects their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(String);

impl TimerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TimerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A countdown (or count-up) timer definition.
///
/// # Examples
///
/// ```
/// use chronoscape_core::timer::Timer;
/// use time::macros::datetime;
///
/// let timer = Timer::new("new-year", "New Year", datetime!(2027-01-01 00:00 UTC))
///     .with_priority(3);
///
/// let now = datetime!(2026-12-31 23:59:00 UTC);
/// assert_eq!(timer.display_text(now), "New Year: 1m 0s");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    id: TimerId,
    label: String,
    #[serde(with = "time::serde::rfc3339")]
    target: OffsetDateTime,
    #[serde(default)]
    count_up: bool,
    #[serde(default = "default_priority")]
    priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

fn default_priority() -> i32 {
    1
}

impl Timer {
    /// Creates a new countdown timer with priority 1 and no color override.
    pub fn new(id: impl Into<TimerId>, label: impl Into<String>, target: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target,
            count_up: false,
            priority: default_priority(),
            color: None,
        }
    }

    /// Sets the priority of this timer. Higher values are more prominent.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks this timer as counting up from its target (an age, an
    /// anniversary) instead of counting down to it.
    pub fn with_count_up(mut self, count_up: bool) -> Self {
        self.count_up = count_up;
        self
    }

    /// Sets a per-timer display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the identifier of this timer
    pub fn id(&self) -> &TimerId {
        &self.id
    }

    /// Returns the user-facing label of this timer
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the target instant of this timer
    pub fn target(&self) -> OffsetDateTime {
        self.target
    }

    /// Returns true if this timer counts up from its target
    pub fn is_count_up(&self) -> bool {
        self.count_up
    }

    /// Returns the priority of this timer. Higher is more prominent;
    /// duplicates are allowed.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the display color override, if any
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Renders the string this timer displays at the given instant.
    ///
    /// Countdown timers show `label: 1y 2d 3h 4m 5s`, omitting leading
    /// units that have never been reached; seconds are always shown.
    /// Count-up timers prefix the interval with `+`. A countdown whose
    /// target has passed shows `label: Completed!`.
    pub fn display_text(&self, now: OffsetDateTime) -> String {
        let interval = if self.count_up {
            (now - self.target).whole_seconds()
        } else {
            (self.target - now).whole_seconds()
        };

        if !self.count_up && interval < 0 {
            return format!("{}: Completed!", self.label);
        }

        let time_string = format_interval(interval.abs());
        if self.count_up {
            format!("{}: +{}", self.label, time_string)
        } else {
            format!("{}: {}", self.label, time_string)
        }
    }
}

/// Formats a non-negative interval in seconds as `1y 2d 3h 4m 5s`,
/// dropping leading units until the first non-zero one.
fn format_interval(total_seconds: i64) -> String {
    let years = total_seconds / SECONDS_PER_YEAR;
    let days = total_seconds % SECONDS_PER_YEAR / SECONDS_PER_DAY;
    let hours = total_seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    let mut components = Vec::new();

    if years > 0 {
        components.push(format!("{years}y"));
    }
    if days > 0 || years > 0 {
        components.push(format!("{days}d"));
    }
    if hours > 0 || days > 0 || years > 0 {
        components.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 || days > 0 || years > 0 {
        components.push(format!("{minutes}m"));
    }

    // Seconds are always shown
    components.push(format!("{seconds}s"));

    components.join(" ")
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_display_text_seconds_only() {
        let timer = Timer::new("t", "Launch", datetime!(2026-01-01 00:00:42 UTC));
        let now = datetime!(2026-01-01 00:00:00 UTC);
        assert_eq!(timer.display_text(now), "Launch: 42s");
    }

    #[test]
    fn test_display_text_cascading_units() {
        let timer = Timer::new("t", "Trip", datetime!(2026-01-03 02:30:05 UTC));
        let now = datetime!(2026-01-01 00:00:00 UTC);
        // 2 days, 2 hours, 30 minutes, 5 seconds
        assert_eq!(timer.display_text(now), "Trip: 2d 2h 30m 5s");
    }

    #[test]
    fn test_display_text_zero_units_kept_after_first() {
        // One exact hour: minutes are shown as 0m because hours are non-zero
        let timer = Timer::new("t", "Meeting", datetime!(2026-01-01 01:00:00 UTC));
        let now = datetime!(2026-01-01 00:00:00 UTC);
        assert_eq!(timer.display_text(now), "Meeting: 1h 0m 0s");
    }

    #[test]
    fn test_display_text_years() {
        let timer = Timer::new("t", "Decade", datetime!(2036-01-01 00:00:00 UTC));
        let now = datetime!(2026-01-01 00:00:00 UTC);
        // 10 years of 365 days each; the leap days spill into the day count
        let text = timer.display_text(now);
        assert!(text.starts_with("Decade: 10y"), "got {text}");
        assert!(text.ends_with("0h 0m 0s"), "got {text}");
    }

    #[test]
    fn test_display_text_completed() {
        let timer = Timer::new("t", "Deadline", datetime!(2026-01-01 00:00:00 UTC));
        let now = datetime!(2026-06-01 00:00:00 UTC);
        assert_eq!(timer.display_text(now), "Deadline: Completed!");
    }

    #[test]
    fn test_display_text_count_up() {
        let timer =
            Timer::new("t", "Age", datetime!(2026-01-01 00:00:00 UTC)).with_count_up(true);
        let now = datetime!(2026-01-02 00:00:30 UTC);
        assert_eq!(timer.display_text(now), "Age: +1d 0h 0m 30s");
    }

    #[test]
    fn test_builder_accessors() {
        let timer = Timer::new("id-1", "Label", datetime!(2026-01-01 00:00:00 UTC))
            .with_priority(5)
            .with_count_up(true)
            .with_color(Color::new("#ff6b6b").unwrap());

        assert_eq!(timer.id().as_str(), "id-1");
        assert_eq!(timer.label(), "Label");
        assert_eq!(timer.priority(), 5);
        assert!(timer.is_count_up());
        assert!(timer.color().is_some());
    }

    #[test]
    fn test_serde_roundtrip() {
        let timer = Timer::new("id-1", "New Year", datetime!(2027-01-01 00:00:00 UTC))
            .with_priority(3)
            .with_color(Color::new("#118ab2").unwrap());

        let json = serde_json::to_string(&timer).unwrap();
        let back: Timer = serde_json::from_str(&json).unwrap();
        assert_eq!(timer, back);
    }

    #[test]
    fn test_serde_defaults() {
        // Older documents omit count_up, priority, and color
        let json = r#"{"id":"a","label":"Old","target":"2026-06-01T00:00:00Z"}"#;
        let timer: Timer = serde_json::from_str(json).unwrap();
        assert!(!timer.is_count_up());
        assert_eq!(timer.priority(), 1);
        assert!(timer.color().is_none());
    }
}
