//! Graph frame ingestion.
//!
//! A [`GraphFrameSource`] wraps the input stream, either a named file or
//! standard input, and offers two read modes:
//!
//! - whole-document mode ([`read_document`](GraphFrameSource::read_document)),
//!   where the entire stream is one JSON document and one frame;
//! - streaming mode ([`frames`](GraphFrameSource::frames)), where every line
//!   is one JSON document and one frame.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use gngplot::source::GraphFrameSource;
//!
//! let input = "{\"nodes\": {\"a\": [0, 0]}, \"edges\": []}\n\
//!              {\"nodes\": {\"a\": [1, 1]}, \"edges\": []}\n";
//! let source = GraphFrameSource::from_reader(Cursor::new(input));
//!
//! let frames: Vec<_> = source.frames().collect::<Result<_, _>>().unwrap();
//! assert_eq!(frames.len(), 2);
//! ```

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use log::{debug, info, trace};

use gngplot_core::frame::GraphFrame;

use crate::GngplotError;

/// Where a source reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    File(PathBuf),
    Reader,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Reader => f.write_str("<reader>"),
        }
    }
}

/// The input stream graph frames are read from.
///
/// The source owns its reader exclusively; every read mode consumes it.
pub struct GraphFrameSource {
    reader: Box<dyn BufRead>,
    origin: Origin,
}

impl fmt::Debug for GraphFrameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphFrameSource")
            .field("origin", &self.origin)
            .finish()
    }
}

impl GraphFrameSource {
    /// Opens the named file, or standard input when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`GngplotError::SourceUnavailable`] if the file cannot be
    /// opened. There is no retry.
    pub fn open(path: Option<impl AsRef<Path>>) -> Result<Self, GngplotError> {
        let Some(path) = path else {
            debug!("No input path given, reading standard input");
            return Ok(Self::stdin());
        };

        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GngplotError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = path.display().to_string(); "Opened input file");

        Ok(Self {
            reader: Box::new(BufReader::new(file)),
            origin: Origin::File(path.to_path_buf()),
        })
    }

    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self {
            reader: Box::new(io::stdin().lock()),
            origin: Origin::Stdin,
        }
    }

    /// Reads from any buffered reader.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            origin: Origin::Reader,
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    fn read_all(mut self) -> Result<Vec<u8>, GngplotError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        debug!(origin = self.origin.to_string(), bytes = bytes.len(); "Read whole document");
        Ok(bytes)
    }

    /// Parses the entire stream as one graph frame.
    ///
    /// # Errors
    ///
    /// Returns [`GngplotError::MalformedFrame`] if the bytes are not valid
    /// JSON (empty or non UTF-8 input included) or lack the `nodes`/`edges`
    /// keys, and [`GngplotError::Io`] if reading fails.
    pub fn read_document(self) -> Result<GraphFrame, GngplotError> {
        let bytes = self.read_all()?;
        let frame = serde_json::from_slice::<GraphFrame>(&bytes).map_err(|err| {
            GngplotError::new_malformed_frame(err, String::from_utf8_lossy(&bytes))
        })?;

        trace!(frame:?; "Parsed frame");
        Ok(frame)
    }

    /// Parses the entire stream as one generic JSON value.
    ///
    /// Used by the pretty-printer, which does not require the frame keys.
    pub fn read_value(self) -> Result<serde_json::Value, GngplotError> {
        let bytes = self.read_all()?;
        serde_json::from_slice(&bytes)
            .map_err(|err| GngplotError::new_malformed_frame(err, String::from_utf8_lossy(&bytes)))
    }

    /// Iterates line-delimited frames.
    pub fn frames(self) -> Frames {
        Frames {
            reader: self.reader,
            line: String::new(),
            line_number: 0,
            finished: false,
        }
    }
}

/// Iterator over the line-delimited frames of a source.
///
/// The iterator ends at the first line that does not parse as a frame: end
/// of stream, an unterminated last line, a blank line or a frame missing its
/// keys all mean "no frame available now". It never waits for more data.
/// Only a failing read yields an `Err`, after which iteration ends.
pub struct Frames {
    reader: Box<dyn BufRead>,
    line: String,
    line_number: usize,
    finished: bool,
}

impl Frames {
    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl fmt::Debug for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frames")
            .field("line_number", &self.line_number)
            .field("finished", &self.finished)
            .finish()
    }
}

impl Iterator for Frames {
    type Item = Result<GraphFrame, GngplotError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                debug!(lines = self.line_number; "End of frame stream");
                self.finished = true;
                return None;
            }
            Ok(_) => self.line_number += 1,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                debug!(line = self.line_number + 1, err:err; "Undecodable line, ending frame stream");
                self.finished = true;
                return None;
            }
            Err(err) => {
                self.finished = true;
                return Some(Err(err.into()));
            }
        }

        match serde_json::from_str::<GraphFrame>(&self.line) {
            Ok(frame) => {
                trace!(line = self.line_number; "Parsed streamed frame");
                Some(Ok(frame))
            }
            Err(err) => {
                debug!(line = self.line_number, err:err; "No complete frame available, ending frame stream");
                self.finished = true;
                None
            }
        }
    }
}
