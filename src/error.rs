//! Error type for stream writes
//!
//! Every public write entry point in this crate returns `Result<u64, Error>`.
//! When a chunk fails, the error records the zero-based position of the failing
//! chunk and the number of bytes committed by the chunks before it, so a caller
//! can still observe the partial byte count:
//!
//! ```
//! use spillway::prelude::*;
//!
//! let mut out = Vec::new();
//! let err = Stream::new(&mut out)
//!     .write((
//!         text("abc"),
//!         from_fn(|_| Err(Error::message("boom"))),
//!     ))
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "writing stream chunk 1: boom");
//! assert_eq!(err.bytes_written(), 3);
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::process::ExitStatus;

/// Convenience alias for results produced by stream writes.
pub type Result<T> = std::result::Result<T, Error>;

/// The error returned by chunks, streams, and file-writing helpers.
///
/// An `Error` carries the count of bytes committed to the sink before the
/// failure, available through [`bytes_written`](Error::bytes_written). The
/// failing chunk reports zero bytes itself; only fully completed chunks count.
#[derive(Debug)]
pub struct Error {
    written: u64,
    kind: ErrorKind,
}

/// The different ways a stream write can fail.
#[derive(Debug)]
pub enum ErrorKind {
    /// A chunk failed at the given zero-based position in its sequence.
    ///
    /// Composed chunks nest: a failure two levels deep reads
    /// `writing stream chunk 1: writing stream chunk 0: <cause>`.
    Chunk {
        /// Zero-based position of the failing chunk.
        index: usize,
        /// What went wrong inside the chunk.
        source: Box<Error>,
    },
    /// A sink, source, or filesystem operation failed.
    Io(io::Error),
    /// A free-form message, as produced by [`Error::message`] or by a
    /// subprocess chunk reporting its captured stderr excerpt.
    Message(String),
    /// A subprocess exited with a non-zero status and left no stderr output.
    Exit {
        /// The program that was invoked.
        program: String,
        /// The exit status it finished with.
        status: ExitStatus,
    },
}

impl Error {
    /// Create an error from a plain message.
    ///
    /// This is the usual way for a hand-written chunk to fail:
    ///
    /// ```
    /// use spillway::{from_fn, Error};
    ///
    /// let mut failing = from_fn(|_| Err(Error::message("nothing to write")));
    /// # let _ = failing;
    /// ```
    pub fn message(msg: impl Into<String>) -> Self {
        Error {
            written: 0,
            kind: ErrorKind::Message(msg.into()),
        }
    }

    pub(crate) fn chunk(index: usize, written: u64, source: Error) -> Self {
        Error {
            written,
            kind: ErrorKind::Chunk {
                index,
                source: Box::new(source),
            },
        }
    }

    pub(crate) fn exit(program: String, status: ExitStatus) -> Self {
        Error {
            written: 0,
            kind: ErrorKind::Exit { program, status },
        }
    }

    pub(crate) fn with_written(mut self, written: u64) -> Self {
        self.written = written;
        self
    }

    /// Bytes committed to the sink before this error occurred.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// What kind of failure this is.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume the error, returning its kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Chunk { index, source } => {
                write!(f, "writing stream chunk {}: {}", index, source)
            }
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Message(msg) => f.write_str(msg),
            ErrorKind::Exit { program, status } => {
                write!(f, "command {:?}: {}", program, status)
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Chunk { source, .. } => Some(source.as_ref()),
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Message(_) | ErrorKind::Exit { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error {
            written: 0,
            kind: ErrorKind::Io(err),
        }
    }
}
