//! Error types for Chronoscape operations.
//!
//! This module provides the main error type [`ChronoscapeError`] which
//! wraps the error conditions that can occur while loading timer
//! documents and rendering wallpapers.

use std::io;

use thiserror::Error;

/// The main error type for Chronoscape operations.
#[derive(Debug, Error)]
pub enum ChronoscapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ChronoscapeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
