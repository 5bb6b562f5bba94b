//! Tests for sink adapters and capability fallbacks.

use std::io::{self, Read};

use super::{BufSink, IoSink, Sink};

/// Destination implementing only the required bulk write, so every other
/// capability exercises its synthesized fallback.
struct Minimal {
    bytes: Vec<u8>,
}

impl Sink for Minimal {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}

mod fallback_tests {
    use super::*;

    #[test]
    fn byte_falls_back_to_bulk_write() {
        let mut sink = Minimal { bytes: Vec::new() };
        sink.write_byte(b'z').unwrap();
        assert_eq!(sink.bytes, b"z");
    }

    #[test]
    fn char_falls_back_to_utf8_encoding() {
        let mut sink = Minimal { bytes: Vec::new() };
        let n = sink.write_char('Ы').unwrap();
        assert_eq!(n, 2);
        assert_eq!(sink.bytes, "Ы".as_bytes());
    }

    #[test]
    fn str_falls_back_to_bulk_write() {
        let mut sink = Minimal { bytes: Vec::new() };
        let n = sink.write_str("__").unwrap();
        assert_eq!(n, 2);
        assert_eq!(sink.bytes, b"__");
    }

    #[test]
    fn copy_falls_back_to_read_write_loop() {
        let mut sink = Minimal { bytes: Vec::new() };
        let mut src: &[u8] = b"xxx";
        let n = sink.copy_from(&mut src).unwrap();
        assert_eq!(n, 3);
        assert_eq!(sink.bytes, b"xxx");
    }

    #[test]
    fn copy_fallback_propagates_source_errors() {
        struct BrokenSource;

        impl Read for BrokenSource {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("read failed"))
            }
        }

        let mut sink = Minimal { bytes: Vec::new() };
        let err = sink.copy_from(&mut BrokenSource).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }

    #[test]
    fn lifecycle_defaults_are_noops() {
        let mut sink = Minimal { bytes: Vec::new() };
        sink.flush().unwrap();
        sink.close().unwrap();
    }
}

mod memory_tests {
    use super::*;

    #[test]
    fn vec_accumulates_every_write_form() {
        let mut sink = Vec::new();
        sink.write_str("a").unwrap();
        sink.write_byte(b'b').unwrap();
        sink.write_char('c').unwrap();
        sink.write_bytes(b"de").unwrap();
        let mut src: &[u8] = b"f";
        sink.copy_from(&mut src).unwrap();
        assert_eq!(sink, b"abcdef");
    }

    #[test]
    fn string_accepts_valid_utf8_bytes() {
        let mut sink = String::new();
        sink.write_bytes("Ы".as_bytes()).unwrap();
        sink.write_char('z').unwrap();
        assert_eq!(sink, "Ыz");
    }

    #[test]
    fn string_rejects_invalid_utf8_bytes() {
        let mut sink = String::new();
        let err = sink.write_bytes(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(sink.is_empty());
    }

    #[test]
    fn string_copies_from_text_source() {
        let mut sink = String::from("--- ");
        let mut src: &[u8] = b"ZZZ";
        let n = sink.copy_from(&mut src).unwrap();
        assert_eq!(n, 3);
        assert_eq!(sink, "--- ZZZ");
    }
}

mod adapter_tests {
    use super::*;

    #[test]
    fn io_sink_writes_and_copies() {
        let mut out = Vec::new();
        let mut sink = IoSink::new(&mut out);
        sink.write_str("ab").unwrap();
        let mut src: &[u8] = b"cd";
        sink.copy_from(&mut src).unwrap();
        sink.flush().unwrap();
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn buf_sink_holds_bytes_until_flushed() {
        let mut out = Vec::new();
        let mut sink = BufSink::new(&mut out);
        sink.write_str("buffered").unwrap();
        sink.flush().unwrap();
        sink.close().unwrap();
        drop(sink);
        assert_eq!(out, b"buffered");
    }

    #[test]
    fn buf_sink_close_discards_unflushed_tail() {
        let mut out = Vec::new();
        let mut sink = BufSink::new(&mut out);
        sink.write_str("never flushed").unwrap();
        sink.close().unwrap();
        drop(sink);
        assert!(out.is_empty());
    }

    #[test]
    fn buf_sink_rejects_writes_after_close() {
        let mut out = Vec::new();
        let mut sink = BufSink::new(&mut out);
        sink.close().unwrap();
        assert!(sink.write_str("late").is_err());
    }
}
