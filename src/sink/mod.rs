//! Sink adapters - the capability-normalized side of a write.
//!
//! A [`Sink`] is the destination a chunk writes into. The trait exposes the
//! full capability surface a chunk may want - bulk bytes, single byte, single
//! `char`, string slice, bulk copy from a reader, plus the optional `flush`
//! and `close` lifecycle hooks - but only [`Sink::write_bytes`] must be
//! implemented. Every other method has a synthesized fallback built on the
//! bulk write, so a minimal destination still supports the whole surface,
//! while a richer destination overrides the methods it can serve natively.
//!
//! # Provided adapters
//!
//! - [`IoSink`] wraps any [`std::io::Write`] destination.
//! - [`BufSink`] layers a [`std::io::BufWriter`] on top, adding buffering and
//!   a close step that releases the destination.
//! - `Vec<u8>` and `String` implement [`Sink`] directly as in-memory
//!   accumulators.
//! - `&mut S` implements [`Sink`] for any sink `S`, so one destination can
//!   back several sequential runs.
//!
//! # Example
//!
//! ```
//! use spillway::prelude::*;
//!
//! let mut out = Vec::new();
//! let n = Stream::new(&mut out).write((text("to the "), text("sea"),))?;
//! assert_eq!(n, 10);
//! assert_eq!(out, b"to the sea");
//! # Ok::<(), spillway::Error>(())
//! ```

mod adapters;
mod memory;
mod trait_def;

pub use adapters::{BufSink, IoSink};
pub use trait_def::Sink;

#[cfg(test)]
mod tests;
