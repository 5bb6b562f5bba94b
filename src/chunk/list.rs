//! Ordered chunk sequences and the execution loop that runs them.

use crate::chunk::Chunk;
use crate::error::{Error, Result};
use crate::sink::Sink;

/// An ordered sequence of chunks runnable against one sink.
///
/// [`write_all`](ChunkList::write_all) executes the sequence in strict
/// order, accumulating byte counts. The first failing chunk stops the run;
/// its error is wrapped as `writing stream chunk K: <cause>` (`K` counted
/// from 0) and carries the bytes committed by chunks `0..K` - the failing
/// chunk itself contributes nothing to the count.
///
/// Implemented for tuples up to arity 8, so a mixed sequence needs no
/// boxing, and for `Vec<C>`, arrays, and mutable slices of a single chunk
/// type:
///
/// ```
/// use spillway::prelude::*;
///
/// let mut out = String::new();
/// let n = Stream::new(&mut out).write((text("a"), byte(b'b'), rune('c')))?;
/// assert_eq!((n, out.as_str()), (3, "abc"));
/// # Ok::<(), spillway::Error>(())
/// ```
pub trait ChunkList {
    /// Run every chunk in order against the sink.
    fn write_all(&mut self, sink: &mut dyn Sink) -> Result<u64>;
}

fn run_chunk<C>(index: usize, chunk: &mut C, sink: &mut dyn Sink, total: &mut u64) -> Result<()>
where
    C: Chunk + ?Sized,
{
    match chunk.write_to(sink) {
        Ok(n) => {
            *total += n;
            Ok(())
        }
        Err(e) => Err(Error::chunk(index, *total, e)),
    }
}

fn write_each<C: Chunk>(chunks: &mut [C], sink: &mut dyn Sink) -> Result<u64> {
    let mut total = 0;
    for (index, chunk) in chunks.iter_mut().enumerate() {
        run_chunk(index, chunk, sink, &mut total)?;
    }
    Ok(total)
}

impl<C: Chunk> ChunkList for Vec<C> {
    fn write_all(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        write_each(self, sink)
    }
}

impl<C: Chunk, const N: usize> ChunkList for [C; N] {
    fn write_all(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        write_each(self, sink)
    }
}

impl<C: Chunk> ChunkList for &mut [C] {
    fn write_all(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        write_each(self, sink)
    }
}

macro_rules! impl_chunk_list_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Chunk),+> ChunkList for ($($name,)+) {
            fn write_all(&mut self, sink: &mut dyn Sink) -> Result<u64> {
                let mut total = 0;
                $(run_chunk($idx, &mut self.$idx, sink, &mut total)?;)+
                Ok(total)
            }
        }
    };
}

impl_chunk_list_for_tuple!(C0: 0);
impl_chunk_list_for_tuple!(C0: 0, C1: 1);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2, C3: 3);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2, C3: 3, C4: 4);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2, C3: 3, C4: 4, C5: 5);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2, C3: 3, C4: 4, C5: 5, C6: 6);
impl_chunk_list_for_tuple!(C0: 0, C1: 1, C2: 2, C3: 3, C4: 4, C5: 5, C6: 6, C7: 7);
