//! Chunk combinators: sequential composition, joining, repetition.

use std::fmt;
use std::ops::ControlFlow;

use crate::chunk::{Chunk, ChunkList};
use crate::error::{Error, Result};
use crate::sink::Sink;

/// Sequential composition of a chunk sequence. Created by [`all`].
pub struct All<L> {
    list: L,
}

impl<L> fmt::Debug for All<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All").finish_non_exhaustive()
    }
}

/// Compose a chunk sequence into a single chunk.
///
/// The sequence runs through the same engine a [`Stream::write`] call uses,
/// so a failure inside it is tagged with its position within this sequence
/// and then re-tagged by the enclosing one - error messages nest.
///
/// ```
/// use spillway::prelude::*;
///
/// let mut out = String::new();
/// Stream::new(&mut out).write((all((text("AAA"), text("BBB"), text("CCC"))),))?;
/// assert_eq!(out, "AAABBBCCC");
/// # Ok::<(), spillway::Error>(())
/// ```
///
/// [`Stream::write`]: crate::Stream::write
pub fn all<L: ChunkList>(list: L) -> All<L> {
    All { list }
}

impl<L: ChunkList> Chunk for All<L> {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        self.list.write_all(sink)
    }
}

/// Separator-joined composition. Created by [`join`].
pub struct Join<C> {
    sep: String,
    chunks: Vec<C>,
}

impl<C> fmt::Debug for Join<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("sep", &self.sep)
            .field("chunks", &self.chunks.len())
            .finish()
    }
}

/// Write the given chunks with a separator between consecutive elements.
///
/// Degenerate cases: an empty list writes nothing; a single chunk behaves
/// exactly like that chunk on its own; an empty separator is plain
/// sequential composition. Separators count as chunks when a failure is
/// tagged with its position.
///
/// Mixed chunk types go through [`BoxChunk`](crate::BoxChunk):
///
/// ```
/// use spillway::prelude::*;
///
/// let mut out = String::new();
/// Stream::new(&mut out).write((join(", ", vec![text("a"), text("b"), text("c")]),))?;
/// assert_eq!(out, "a, b, c");
/// # Ok::<(), spillway::Error>(())
/// ```
pub fn join<C: Chunk>(sep: impl Into<String>, chunks: Vec<C>) -> Join<C> {
    Join {
        sep: sep.into(),
        chunks,
    }
}

impl<C: Chunk> Chunk for Join<C> {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        match self.chunks.len() {
            0 => return Ok(0),
            1 => return self.chunks[0].write_to(sink),
            _ => {}
        }

        let mut total = 0;
        let mut index = 0;

        for k in 0..self.chunks.len() {
            if k > 0 && !self.sep.is_empty() {
                match sink.write_str(&self.sep) {
                    Ok(n) => total += n as u64,
                    Err(e) => return Err(Error::chunk(index, total, e.into())),
                }
                index += 1;
            }

            match self.chunks[k].write_to(sink) {
                Ok(n) => total += n,
                Err(e) => return Err(Error::chunk(index, total, e)),
            }
            index += 1;
        }

        Ok(total)
    }
}

/// Unbounded repetition of a step function. Created by [`repeat`].
pub struct Repeat<F> {
    step: F,
}

impl<F> fmt::Debug for Repeat<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeat").field("step", &"<step fn>").finish()
    }
}

/// Call a step function over and over, accumulating bytes, until it stops.
///
/// The step receives the call's ordinal (counting from 0) and the sink.
/// Returning `ControlFlow::Continue(n)` records `n` bytes and moves to the
/// next ordinal; `ControlFlow::Break(n)` records `n` bytes and ends the
/// repetition cleanly - stopping lives in the success channel, so it can
/// never surface as an error. Any `Err` ends the run and propagates.
///
/// ```
/// use std::ops::ControlFlow;
/// use spillway::prelude::*;
///
/// let mut out = String::new();
/// let n = Stream::new(&mut out).write((repeat(|i, sink| {
///     if i < 3 {
///         Ok(ControlFlow::Continue(sink.write_str("ZZZ")? as u64))
///     } else {
///         Ok(ControlFlow::Break(0))
///     }
/// }),))?;
/// assert_eq!((n, out.as_str()), (9, "ZZZZZZZZZ"));
/// # Ok::<(), spillway::Error>(())
/// ```
pub fn repeat<F>(step: F) -> Repeat<F>
where
    F: FnMut(usize, &mut dyn Sink) -> Result<ControlFlow<u64, u64>>,
{
    Repeat { step }
}

impl<F> Chunk for Repeat<F>
where
    F: FnMut(usize, &mut dyn Sink) -> Result<ControlFlow<u64, u64>>,
{
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        let mut total = 0;
        let mut ordinal = 0;

        loop {
            match (self.step)(ordinal, sink)? {
                ControlFlow::Continue(n) => {
                    total += n;
                    ordinal += 1;
                }
                ControlFlow::Break(n) => return Ok(total + n),
            }
        }
    }
}

/// Bounded repetition of one chunk. Created by [`repeat_n`].
pub struct RepeatN<C> {
    count: usize,
    chunk: C,
}

impl<C> fmt::Debug for RepeatN<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatN")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// Run the given chunk exactly `count` times. A count of zero writes
/// nothing and never fails.
pub fn repeat_n<C: Chunk>(count: usize, chunk: C) -> RepeatN<C> {
    RepeatN { count, chunk }
}

impl<C: Chunk> Chunk for RepeatN<C> {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        let mut total = 0;
        for _ in 0..self.count {
            total += self.chunk.write_to(sink)?;
        }
        Ok(total)
    }
}
