//! Error types for gngplot operations.
//!
//! [`GngplotError`] is returned by every fallible library entry point.
//! [`RenderError`] covers failures raised by a [`Renderer`](crate::render::Renderer).

use std::{io, path::PathBuf};

use thiserror::Error;

use gngplot_core::identifier::NodeId;

/// The main error type for gngplot operations.
///
/// # Diagnostic Variants
///
/// `MalformedFrame` keeps the text that failed to parse, so a reporter can
/// show the line and column serde_json points at.
#[derive(Debug, Error)]
pub enum GngplotError {
    #[error("Unable to open file {}: {source}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("Malformed graph frame: {err}")]
    MalformedFrame {
        #[source]
        err: serde_json::Error,
        src: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GngplotError {
    /// Create a new `MalformedFrame` error with the text that failed to parse.
    pub fn new_malformed_frame(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::MalformedFrame {
            err,
            src: src.into(),
        }
    }
}

/// Failures raised while drawing a frame or presenting it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("node `{0}` is referenced by an edge but has no coordinate")]
    MissingNode(NodeId),

    #[error("failed to write surface {}: {source}", path.display())]
    Surface { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_message() {
        let err = GngplotError::SourceUnavailable {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Unable to open file missing.json"));
    }

    #[test]
    fn test_malformed_frame_keeps_source_text() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GngplotError::new_malformed_frame(parse_err, "{");

        match &err {
            GngplotError::MalformedFrame { src, .. } => assert_eq!(src, "{"),
            other => panic!("Expected MalformedFrame, got {other:?}"),
        }
        assert!(err.to_string().starts_with("Malformed graph frame"));
    }

    #[test]
    fn test_render_error_converts() {
        let err: GngplotError = RenderError::MissingNode(NodeId::new("ghost")).into();
        assert_eq!(
            err.to_string(),
            "Render error: node `ghost` is referenced by an edge but has no coordinate"
        );
    }
}
