//! Extension methods available on every chunk.

use crate::chunk::Chunk;

/// A type-erased, heap-allocated chunk.
///
/// Needed when chunks of different concrete types go into one collection,
/// e.g. a `Vec<BoxChunk>` handed to [`join`](crate::join).
pub type BoxChunk = Box<dyn Chunk>;

/// Extension trait adding conveniences to every [`Chunk`].
pub trait ChunkExt: Chunk {
    /// Erase this chunk's concrete type behind a `Box<dyn Chunk>`.
    ///
    /// ```
    /// use spillway::prelude::*;
    /// use spillway::BoxChunk;
    ///
    /// let parts: Vec<BoxChunk> = vec![
    ///     text("item").boxed(),
    ///     byte(b'0').boxed(),
    /// ];
    ///
    /// let mut out = String::new();
    /// Stream::new(&mut out).write((join(", ", parts),))?;
    /// assert_eq!(out, "item, 0");
    /// # Ok::<(), spillway::Error>(())
    /// ```
    fn boxed(self) -> BoxChunk
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<C: Chunk + ?Sized> ChunkExt for C {}
