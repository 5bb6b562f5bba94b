//! Chunk trait definition and the closure constructor.

use std::fmt;

use crate::error::Result;
use crate::sink::Sink;

/// A unit of write work against a sink.
///
/// A chunk, given a sink, performs some writing and reports the number of
/// bytes it committed, or an error. Chunks are composed into sequences (see
/// [`ChunkList`](crate::ChunkList)) and combinators ([`all`](crate::all),
/// [`join`](crate::join), [`repeat`](crate::repeat)); any resource a chunk
/// touches - a file handle, a subprocess - is acquired and released within
/// its own [`write_to`](Chunk::write_to) call.
///
/// The crate's constructors cover literals, bulk copies, subprocess output,
/// and combinators; anything else is a [`from_fn`] closure away:
///
/// ```
/// use spillway::prelude::*;
///
/// let mut out = Vec::new();
/// let n = Stream::new(&mut out).write((
///     text("n = "),
///     from_fn(|sink| Ok(sink.write_str(&42.to_string())? as u64)),
/// ))?;
/// assert_eq!(out, b"n = 42");
/// assert_eq!(n, 6);
/// # Ok::<(), spillway::Error>(())
/// ```
pub trait Chunk {
    /// Write this chunk's output to the sink, returning the bytes written.
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64>;
}

impl<C: Chunk + ?Sized> Chunk for &mut C {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        (**self).write_to(sink)
    }
}

impl<C: Chunk + ?Sized> Chunk for Box<C> {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        (**self).write_to(sink)
    }
}

/// Chunk backed by a caller-supplied closure. Created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<closure>").finish()
    }
}

impl<F> Chunk for FromFn<F>
where
    F: FnMut(&mut dyn Sink) -> Result<u64>,
{
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        (self.f)(sink)
    }
}

/// Create a chunk from a closure.
///
/// The closure receives the sink and returns the bytes it wrote, or an
/// error. This is the escape hatch for write logic the built-in
/// constructors don't cover.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&mut dyn Sink) -> Result<u64>,
{
    FromFn { f }
}
