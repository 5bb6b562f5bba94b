//! Sink trait definition.

use std::io::{self, Read};

/// A byte destination with a capability-normalized write surface.
///
/// Only [`write_bytes`](Sink::write_bytes) is required. The remaining write
/// methods default to fallbacks synthesized from the bulk write, and the two
/// lifecycle methods default to no-ops, which is how a sink signals that it
/// has no buffering layer to flush or no handle to close. An implementation
/// overrides exactly the methods its destination serves natively; everything
/// else keeps working through the defaults.
///
/// The trait is object-safe: chunks receive `&mut dyn Sink`.
///
/// # Example
///
/// A destination that only knows how to accept byte runs still supports
/// chars, strings, and bulk copies:
///
/// ```
/// use std::io;
/// use spillway::Sink;
///
/// struct Plain(Vec<u8>);
///
/// impl Sink for Plain {
///     fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
///         self.0.extend_from_slice(buf);
///         Ok(buf.len())
///     }
/// }
///
/// let mut sink = Plain(Vec::new());
/// sink.write_char('Ы')?;
/// sink.write_str("z")?;
/// assert_eq!(sink.0, "Ыz".as_bytes());
/// # Ok::<(), io::Error>(())
/// ```
pub trait Sink {
    /// Write a contiguous run of bytes, returning how many were accepted.
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Write a single byte.
    ///
    /// Fallback: a one-element bulk write.
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.write_bytes(&[b]).map(|_| ())
    }

    /// Write a single code point, returning its encoded length in bytes.
    ///
    /// Fallback: UTF-8-encode into a small stack buffer, then bulk write.
    fn write_char(&mut self, c: char) -> io::Result<usize> {
        let mut buf = [0u8; 4];
        self.write_bytes(c.encode_utf8(&mut buf).as_bytes())
    }

    /// Write a string slice, returning the number of bytes written.
    ///
    /// Fallback: bulk write of the slice's bytes.
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.write_bytes(s.as_bytes())
    }

    /// Copy everything from `src` into this sink, returning the total.
    ///
    /// Fallback: a generic read/write loop over a fixed-size buffer.
    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        let mut buf = [0u8; 8192];
        let mut total = 0u64;

        loop {
            let n = match src.read(&mut buf) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            let mut written = 0;
            while written < n {
                let m = self.write_bytes(&buf[written..n])?;
                if m == 0 {
                    return Err(io::ErrorKind::WriteZero.into());
                }
                written += m;
                total += m as u64;
            }
        }
    }

    /// Flush any buffering layer. No-op for unbuffered sinks.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Release the underlying destination. No-op for sinks with nothing to
    /// close. Called exactly once per run by [`Stream::write`](crate::Stream::write).
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write_bytes(buf)
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        (**self).write_byte(b)
    }

    fn write_char(&mut self, c: char) -> io::Result<usize> {
        (**self).write_char(c)
    }

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        (**self).write_str(s)
    }

    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        (**self).copy_from(src)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
