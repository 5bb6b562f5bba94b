//! One write run against one sink, with its flush/close lifecycle.

use std::fmt;
use std::io::Write;

use crate::chunk::ChunkList;
use crate::error::{Error, Result};
use crate::sink::{BufSink, IoSink, Sink};

/// A single execution run: an ordered chunk sequence against one sink.
///
/// [`write`](Stream::write) runs the chunks in order and owns the sink's
/// lifecycle around the run:
///
/// 1. the chunks execute, stopping at the first failure;
/// 2. on success the sink is flushed;
/// 3. the sink is closed unconditionally - a close error surfaces only when
///    no earlier error exists.
///
/// A stream is consumed by its run. To perform several sequential runs
/// against the same destination, hand each run a fresh `Stream` over a
/// mutable borrow of the sink:
///
/// ```
/// use spillway::prelude::*;
///
/// let mut out = String::new();
/// Stream::new(&mut out).write((text("one"),))?;
/// Stream::new(&mut out).write((text(", two"),))?;
/// assert_eq!(out, "one, two");
/// # Ok::<(), spillway::Error>(())
/// ```
pub struct Stream<S: Sink> {
    sink: S,
}

impl<S: Sink> fmt::Debug for Stream<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

impl<S: Sink> Stream<S> {
    /// Create a stream over any sink.
    pub fn new(sink: S) -> Self {
        Stream { sink }
    }

    /// Run the chunks, returning the total bytes written.
    ///
    /// On failure the error names the failing chunk's zero-based position
    /// and carries the partial byte count (see
    /// [`Error::bytes_written`](crate::Error::bytes_written)).
    pub fn write(mut self, mut chunks: impl ChunkList) -> Result<u64> {
        let result = match chunks.write_all(&mut self.sink) {
            Ok(n) => match self.sink.flush() {
                Ok(()) => Ok(n),
                Err(e) => Err(Error::from(e).with_written(n)),
            },
            Err(e) => Err(e),
        };

        match self.sink.close() {
            Ok(()) => result,
            Err(close_err) => match result {
                Ok(n) => Err(Error::from(close_err).with_written(n)),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %close_err, "discarding close error after failed write");
                    #[cfg(not(feature = "tracing"))]
                    let _ = close_err;
                    Err(e)
                }
            },
        }
    }
}

impl<W: Write> Stream<IoSink<W>> {
    /// Stream over a plain writer, unbuffered.
    pub fn from_writer(writer: W) -> Self {
        Stream::new(IoSink::new(writer))
    }
}

impl<W: Write> Stream<BufSink<W>> {
    /// Stream over a writer with a buffering layer on top.
    ///
    /// The buffer is flushed after a successful run; after a failed run its
    /// remaining content is discarded.
    pub fn buffered(writer: W) -> Self {
        Stream::new(BufSink::new(writer))
    }
}
