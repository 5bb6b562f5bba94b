//! # Spillway
//!
//! > *"Where the stream overflows, give it a channel"*
//!
//! A Rust library for composable, type-safe byte-stream output.
//!
//! ## Philosophy
//!
//! A write is composed from **chunks** - independent units like "this
//! string", "that file's contents", "the stdout of this command" - and
//! executed in one run against a **sink**. The run counts every byte,
//! stops at the first failure and names the chunk that failed, and handles
//! flushing and closing so callers don't have to.
//!
//! ## Quick Example
//!
//! ```rust
//! use spillway::prelude::*;
//!
//! let mut out = String::new();
//!
//! let n = Stream::new(&mut out).write((
//!     text("Hello"),
//!     byte(b','),
//!     rune(' '),
//!     text("world"),
//!     repeat_n(3, byte(b'!')),
//! ))?;
//!
//! assert_eq!(n, 15);
//! assert_eq!(out, "Hello, world!!!");
//! # Ok::<(), spillway::Error>(())
//! ```
//!
//! For whole files there are helpers with durable semantics - including
//! [`atomic_write_file`], which stages into a sibling temporary and renames
//! only on full success:
//!
//! ```rust,no_run
//! use spillway::prelude::*;
//!
//! atomic_write_file("greeting.txt", 0o644, (
//!     text("Hello, "),
//!     file("name.txt"),
//! ))?;
//! # Ok::<(), spillway::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chunk;
pub mod error;
pub mod fs;
pub mod sink;
pub mod stream;

// Re-exports
pub use chunk::{
    all, byte, byte_slice, command, file, from_fn, join, nop, reader, repeat, repeat_n, rune, text,
    All, BoxChunk, Byte, ByteSlice, CancelToken, Chunk, ChunkExt, ChunkList, Cmd, FileCopy,
    FromFn, Join, Nop, Reader, Repeat, RepeatN, Rune, Text,
};
pub use error::{Error, ErrorKind, Result};
pub use fs::{append_to_file, atomic_write_file, write_file, write_temp_file};
pub use sink::{BufSink, IoSink, Sink};
pub use stream::Stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chunk::{
        all, byte, byte_slice, command, file, from_fn, join, nop, reader, repeat, repeat_n, rune,
        text, Chunk, ChunkExt, ChunkList,
    };
    pub use crate::error::{Error, ErrorKind};
    pub use crate::fs::{append_to_file, atomic_write_file, write_file, write_temp_file};
    pub use crate::sink::Sink;
    pub use crate::stream::Stream;
}
