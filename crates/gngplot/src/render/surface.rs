use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error};
use svg::Document;
use tempfile::NamedTempFile;

use crate::RenderError;

/// An SVG file that is replaced in full on every present.
///
/// Each document is written to a temporary file next to the target and then
/// renamed over it, so a viewer reloading the file never sees a partial
/// frame.
#[derive(Debug)]
pub struct SvgSurface {
    path: PathBuf,
    presented: usize,
}

impl SvgSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            presented: 0,
        }
    }

    /// How many documents have been written so far
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Replaces the surface file with `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Surface`] if the temporary file cannot be
    /// created, written or moved into place.
    pub fn present(&mut self, doc: &Document) -> Result<(), RenderError> {
        let surface_err = |source| RenderError::Surface {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|err| {
            error!(path = self.path.display().to_string(), err:err; "Failed to create temporary SVG file");
            surface_err(err)
        })?;

        write!(file, "{doc}")
            .and_then(|()| file.flush())
            .map_err(|err| {
                error!(path = self.path.display().to_string(), err:err; "Failed to write SVG content");
                surface_err(err)
            })?;

        file.persist(&self.path).map_err(|err| {
            let err = err.error;
            error!(path = self.path.display().to_string(), err:err; "Failed to replace SVG file");
            surface_err(err)
        })?;

        self.presented += 1;
        debug!(path = self.path.display().to_string(), presented = self.presented; "Surface presented");

        Ok(())
    }
}
