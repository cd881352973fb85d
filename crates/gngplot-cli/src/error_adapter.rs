//! Error adapter for converting GngplotError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. A malformed frame
//! is shown with the input text and a label at the position serde_json
//! reported.

use std::{fmt, io};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use gngplot::GngplotError;

/// Adapter for a frame that failed to parse, with the text it came from.
pub struct MalformedFrameAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> MalformedFrameAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte offset of the reported line and column, if serde_json gave one
    fn offset(&self) -> Option<usize> {
        let line = self.err.line();
        if line == 0 {
            return None;
        }

        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let mut offset = (line_start + self.err.column().saturating_sub(1)).min(self.src.len());
        while !self.src.is_char_boundary(offset) {
            offset -= 1;
        }
        Some(offset)
    }
}

impl fmt::Debug for MalformedFrameAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MalformedFrameAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for MalformedFrameAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed graph frame")
    }
}

impl std::error::Error for MalformedFrameAdapter<'_> {}

impl MietteDiagnostic for MalformedFrameAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("gngplot::malformed_frame"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a frame is a JSON object with a `nodes` map of coordinates and an `edges` list or map of node pairs",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.offset()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.to_string()),
            SourceSpan::new(offset.into(), 0),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`GngplotError`] variants without source text.
pub struct ErrorAdapter<'a>(pub &'a GngplotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GngplotError::SourceUnavailable { .. } => "gngplot::source_unavailable",
            GngplotError::MalformedFrame { .. } => "gngplot::malformed_frame",
            GngplotError::Io(_) => "gngplot::io",
            GngplotError::Render(_) => "gngplot::render",
            GngplotError::Config(_) => "gngplot::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            GngplotError::SourceUnavailable { .. } => Some(Box::new(
                "check the path, or omit it to read from standard input",
            )),
            GngplotError::Config(_) => Some(Box::new(
                "pass --config to choose a file, or remove gngplot/config.toml",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A frame parse error with the offending text.
    MalformedFrame(MalformedFrameAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::MalformedFrame(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::MalformedFrame(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::MalformedFrame(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::MalformedFrame(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::MalformedFrame(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::MalformedFrame(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`GngplotError`] into the list of reports to render.
pub fn to_reportables(err: &GngplotError) -> Vec<Reportable<'_>> {
    match err {
        GngplotError::MalformedFrame { err, src } => {
            vec![Reportable::MalformedFrame(MalformedFrameAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render every report for `err` with miette and write them to `out`.
///
/// Reports bypass the logger, so they are shown at any log level.
pub fn write_reports(err: &GngplotError, out: &mut dyn io::Write) -> io::Result<()> {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        reporter
            .render_report(&mut rendered, &reportable)
            .map_err(io::Error::other)?;
        out.write_all(rendered.as_bytes())?;
    }

    out.flush()
}
