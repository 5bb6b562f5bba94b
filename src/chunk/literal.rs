//! Literal chunks: fixed bytes, strings, single bytes, single code points.

use crate::chunk::Chunk;
use crate::error::Result;
use crate::sink::Sink;

/// Chunk that writes nothing. Created by [`nop`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Nop;

/// A chunk that writes zero bytes and never fails.
///
/// The identity element of chunk composition: [`join`](crate::join) over an
/// empty list degenerates to it, and interleaving it into any sequence
/// leaves the output unchanged.
pub fn nop() -> Nop {
    Nop
}

impl Chunk for Nop {
    fn write_to(&mut self, _sink: &mut dyn Sink) -> Result<u64> {
        Ok(0)
    }
}

/// Chunk that writes a fixed string. Created by [`text`].
#[derive(Debug, Clone)]
pub struct Text {
    value: String,
}

/// A chunk writing the given string.
///
/// An empty string produces a no-op chunk: zero bytes, no error, and the
/// sink is never touched.
pub fn text(value: impl Into<String>) -> Text {
    Text {
        value: value.into(),
    }
}

impl Chunk for Text {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        if self.value.is_empty() {
            return Ok(0);
        }
        Ok(sink.write_str(&self.value)? as u64)
    }
}

/// Chunk that writes a fixed byte run. Created by [`byte_slice`].
#[derive(Debug, Clone)]
pub struct ByteSlice {
    value: Vec<u8>,
}

/// A chunk writing the given bytes.
///
/// An empty slice produces a no-op chunk, same as [`text`] with `""`.
pub fn byte_slice(value: impl Into<Vec<u8>>) -> ByteSlice {
    ByteSlice {
        value: value.into(),
    }
}

impl Chunk for ByteSlice {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        if self.value.is_empty() {
            return Ok(0);
        }
        Ok(sink.write_bytes(&self.value)? as u64)
    }
}

/// Chunk that writes one byte. Created by [`byte`].
#[derive(Debug, Clone, Copy)]
pub struct Byte {
    value: u8,
}

/// A chunk writing a single byte.
pub fn byte(value: u8) -> Byte {
    Byte { value }
}

impl Chunk for Byte {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        sink.write_byte(self.value)?;
        Ok(1)
    }
}

/// Chunk that writes one code point. Created by [`rune`].
#[derive(Debug, Clone, Copy)]
pub struct Rune {
    value: char,
}

/// A chunk writing a single code point, UTF-8 encoded.
pub fn rune(value: char) -> Rune {
    Rune { value }
}

impl Chunk for Rune {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        Ok(sink.write_char(self.value)? as u64)
    }
}
