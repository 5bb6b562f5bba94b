//! In-memory accumulator sinks.

use std::io::{self, Read};
use std::str;

use crate::sink::Sink;

/// Byte accumulator. Every capability is native and infallible.
impl Sink for Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.push(b);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> io::Result<usize> {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        self.extend_from_slice(encoded.as_bytes());
        Ok(encoded.len())
    }

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.extend_from_slice(s.as_bytes());
        Ok(s.len())
    }

    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        io::copy(src, self)
    }
}

/// Text accumulator.
///
/// Byte-level writes must form valid UTF-8; anything else fails with
/// [`io::ErrorKind::InvalidData`]. String and `char` writes are native and
/// infallible.
impl Sink for String {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = str::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.push_str(text);
        Ok(buf.len())
    }

    fn write_char(&mut self, c: char) -> io::Result<usize> {
        self.push(c);
        Ok(c.len_utf8())
    }

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.push_str(s);
        Ok(s.len())
    }

    fn copy_from(&mut self, src: &mut dyn Read) -> io::Result<u64> {
        let mut text = String::new();
        let n = src.read_to_string(&mut text)?;
        self.push_str(&text);
        Ok(n as u64)
    }
}
