//! The JSON timer document shared between tools.
//!
//! A [`TimerDocument`] is the persisted form of a timer collection: a
//! format version, the timers themselves, and optionally the placement
//! algorithm the collection was last arranged with. Loading validates
//! the document structure; anything past that (timer semantics, layout)
//! is left to the consumers.

use std::{collections::HashSet, fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use chronoscape_core::timer::Timer;

use crate::{error::ChronoscapeError, layout::Algorithm};

/// The only document format version currently written or accepted.
pub const DOCUMENT_VERSION: u32 = 1;

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

/// A persisted collection of timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerDocument {
    #[serde(default = "default_version")]
    version: u32,

    timers: Vec<Timer>,

    /// Placement algorithm recorded with the collection, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    algorithm: Option<Algorithm>,
}

impl TimerDocument {
    /// Creates a new document for the given timers.
    pub fn new(timers: Vec<Timer>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            timers,
            algorithm: None,
        }
    }

    /// Records the placement algorithm with this document.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Parses and validates a document from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ChronoscapeError::Document`] for malformed JSON, an
    /// unsupported format version, or duplicate timer ids.
    pub fn from_str(source: &str) -> Result<Self, ChronoscapeError> {
        let document: Self = serde_json::from_str(source)
            .map_err(|err| ChronoscapeError::Document(err.to_string()))?;
        document.validate()?;

        debug!(timers = document.timers.len(); "Document parsed");
        Ok(document)
    }

    /// Loads and validates a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ChronoscapeError::Io`] when the file cannot be read,
    /// and the same errors as [`TimerDocument::from_str`] past that.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChronoscapeError> {
        let path = path.as_ref();
        info!(path:? = path; "Loading timer document");

        let source = fs::read_to_string(path)?;
        Self::from_str(&source)
    }

    fn validate(&self) -> Result<(), ChronoscapeError> {
        if self.version != DOCUMENT_VERSION {
            return Err(ChronoscapeError::Document(format!(
                "unsupported document version {} (expected {DOCUMENT_VERSION})",
                self.version
            )));
        }

        let mut seen = HashSet::new();
        for timer in &self.timers {
            if !seen.insert(timer.id()) {
                return Err(ChronoscapeError::Document(format!(
                    "duplicate timer id `{}`",
                    timer.id()
                )));
            }
        }

        Ok(())
    }

    /// Serializes this document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ChronoscapeError::Document`] when serialization fails.
    pub fn to_json(&self) -> Result<String, ChronoscapeError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChronoscapeError::Document(err.to_string()))
    }

    /// Writes this document to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ChronoscapeError::Io`] when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ChronoscapeError> {
        let path = path.as_ref();
        info!(path:? = path, timers = self.timers.len(); "Saving timer document");

        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Returns the document format version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the timers in this document.
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    /// Returns the placement algorithm recorded with this document, if any.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn sample_timers() -> Vec<Timer> {
        vec![
            Timer::new("launch", "Launch", datetime!(2027-03-01 00:00 UTC)).with_priority(5),
            Timer::new("review", "Review", datetime!(2026-11-15 09:30 UTC)),
        ]
    }

    #[test]
    fn test_parse_minimal_document() {
        let document = TimerDocument::from_str(
            r#"{
                "timers": [
                    {"id": "launch", "label": "Launch", "target": "2027-03-01T00:00:00Z"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(document.version(), DOCUMENT_VERSION);
        assert_eq!(document.timers().len(), 1);
        assert_eq!(document.algorithm(), None);
        // Unspecified priority defaults to 1
        assert_eq!(document.timers()[0].priority(), 1);
    }

    #[test]
    fn test_parse_document_with_algorithm() {
        let document = TimerDocument::from_str(
            r#"{
                "version": 1,
                "timers": [],
                "algorithm": "vertical"
            }"#,
        )
        .unwrap();

        assert_eq!(document.algorithm(), Some(Algorithm::Vertical));
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let result = TimerDocument::from_str(r#"{"version": 2, "timers": []}"#);
        assert!(matches!(result, Err(ChronoscapeError::Document(_))));
    }

    #[test]
    fn test_duplicate_timer_ids_are_rejected() {
        let result = TimerDocument::from_str(
            r#"{
                "timers": [
                    {"id": "t", "label": "A", "target": "2027-01-01T00:00:00Z"},
                    {"id": "t", "label": "B", "target": "2027-06-01T00:00:00Z"}
                ]
            }"#,
        );

        match result {
            Err(ChronoscapeError::Document(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected document error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_a_document_error() {
        let result = TimerDocument::from_str("{not json");
        assert!(matches!(result, Err(ChronoscapeError::Document(_))));
    }

    #[test]
    fn test_json_roundtrip_preserves_timers() {
        let document = TimerDocument::new(sample_timers()).with_algorithm(Algorithm::Spiral);
        let json = document.to_json().unwrap();
        let reloaded = TimerDocument::from_str(&json).unwrap();

        assert_eq!(reloaded.timers().len(), 2);
        assert_eq!(reloaded.timers()[0].id().as_str(), "launch");
        assert_eq!(reloaded.timers()[0].priority(), 5);
        assert_eq!(reloaded.algorithm(), Some(Algorithm::Spiral));
    }
}
