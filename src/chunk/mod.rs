//! Chunks - the units a stream write is composed from.
//!
//! A [`Chunk`] writes some bytes to a [`Sink`](crate::Sink) and reports how
//! many, or fails. Chunks are built from constructors and composed freely:
//!
//! - literals: [`text`], [`byte_slice`], [`byte`], [`rune`], [`nop`]
//! - bulk copies: [`reader`] (any `io::Read` source), [`file`] (a disk
//!   file), [`command`] (a subprocess's stdout)
//! - combinators: [`all`], [`join`], [`repeat`], [`repeat_n`]
//! - custom logic: [`from_fn`]
//!
//! Empty literals are identity elements - they write nothing, fail never,
//! and can be interleaved into any composition without changing its output.
//!
//! # Example
//!
//! ```
//! use spillway::prelude::*;
//!
//! let mut out = String::new();
//! let n = Stream::new(&mut out).write((
//!     text("Hello"),
//!     rune(','),
//!     byte(b' '),
//!     byte_slice("world"),
//!     repeat_n(3, byte(b'!')),
//! ))?;
//!
//! assert_eq!(n, 15);
//! assert_eq!(out, "Hello, world!!!");
//! # Ok::<(), spillway::Error>(())
//! ```

mod combinators;
mod command;
mod ext;
mod list;
mod literal;
mod source;
mod trait_def;

pub use combinators::{all, join, repeat, repeat_n, All, Join, Repeat, RepeatN};
pub use command::{command, CancelToken, Cmd};
pub use ext::{BoxChunk, ChunkExt};
pub use list::ChunkList;
pub use literal::{byte, byte_slice, nop, rune, text, Byte, ByteSlice, Nop, Rune, Text};
pub use source::{file, reader, FileCopy, Reader};
pub use trait_def::{from_fn, Chunk, FromFn};

#[cfg(test)]
mod tests;
