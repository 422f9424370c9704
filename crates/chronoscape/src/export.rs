pub mod svg;

use std::path::Path;

use chronoscape_core::geometry::Size;

use crate::layout::Placement;

// A single Exporter trait so output formats stay swappable
pub trait Exporter {
    fn export_wallpaper(
        &self,
        placements: &[Placement<'_>],
        canvas: Size,
        path: &Path,
    ) -> Result<(), Error>;
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
