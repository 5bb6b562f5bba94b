//! Adapters over `std::io::Write` destinations.

use std::fmt;
use std::io::{self, BufWriter, Read, Write};

use crate::sink::Sink;

/// Unbuffered adapter over any [`io::Write`] destination.
///
/// `write_bytes` uses write-all semantics: either the whole run is accepted
/// or an error is returned, so byte counts stay exact. Bulk copies go through
/// [`io::copy`]. There is nothing to close; `flush` delegates to the writer.
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        IoSink { inner: writer }
    }

    /// Unwrap, returning the destination.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> fmt::Debug for IoSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoSink").finish_non_exhaustive()
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        Ok(buf.len())
    }

    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        io::copy(src, &mut self.inner)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Buffering, closable adapter over any [`io::Write`] destination.
///
/// All write paths go through an internal [`BufWriter`], `flush` drains the
/// buffer, and `close` releases the destination. Closing after a failed run
/// discards whatever is still sitting in the buffer instead of half-writing
/// it; a successful run is flushed before the close, so nothing is lost.
pub struct BufSink<W: Write> {
    inner: Option<BufWriter<W>>,
}

impl<W: Write> BufSink<W> {
    /// Wrap a writer behind a fresh buffer.
    pub fn new(writer: W) -> Self {
        BufSink {
            inner: Some(BufWriter::new(writer)),
        }
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<W>> {
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::other("sink already closed"))
    }
}

impl<W: Write> fmt::Debug for BufSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufSink")
            .field("closed", &self.inner.is_none())
            .finish()
    }
}

impl<W: Write> Sink for BufSink<W> {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write_all(buf)?;
        Ok(buf.len())
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.writer()?.write_all(&[b])
    }

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.writer()?.write_all(s.as_bytes())?;
        Ok(s.len())
    }

    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        io::copy(src, self.writer()?)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if let Some(writer) = self.inner.take() {
            // into_parts does not flush: anything still buffered here belongs
            // to a failed run and is dropped with the buffer
            let (dest, _unflushed) = writer.into_parts();
            drop(dest);
        }
        Ok(())
    }
}
