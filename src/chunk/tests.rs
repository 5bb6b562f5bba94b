//! Tests for chunk constructors and combinators.

use std::ops::ControlFlow;

use super::*;
use crate::error::{Error, ErrorKind};
use crate::sink::Sink;

fn run(chunks: &mut impl ChunkList) -> (Vec<u8>, crate::Result<u64>) {
    let mut out = Vec::new();
    let result = chunks.write_all(&mut out);
    (out, result)
}

mod literal_tests {
    use super::*;

    #[test]
    fn round_trip_hello_world() {
        let (out, result) = run(&mut (
            text("Hello"),
            rune(','),
            byte(b' '),
            byte_slice("world!"),
        ));
        assert_eq!(result.unwrap(), 13);
        assert_eq!(out, b"Hello, world!");
    }

    #[test]
    fn empty_literals_write_nothing() {
        let mut out = Vec::new();
        assert_eq!(text("").write_to(&mut out).unwrap(), 0);
        assert_eq!(byte_slice(Vec::new()).write_to(&mut out).unwrap(), 0);
        assert_eq!(nop().write_to(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_literals_never_touch_the_sink() {
        struct Untouchable;

        impl Sink for Untouchable {
            fn write_bytes(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                panic!("sink was touched");
            }
        }

        let mut sink = Untouchable;
        text("").write_to(&mut sink).unwrap();
        byte_slice(Vec::new()).write_to(&mut sink).unwrap();
    }

    #[test]
    fn empty_literals_are_identity_elements() {
        let (plain, _) = run(&mut (text("ab"), text("cd")));
        let (padded, _) = run(&mut (
            text(""),
            text("ab"),
            byte_slice(Vec::new()),
            text("cd"),
            text(""),
        ));
        assert_eq!(plain, padded);
    }

    #[test]
    fn multibyte_rune_counts_encoded_length() {
        let (out, result) = run(&mut (rune('Ы'),));
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "Ы".as_bytes());
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn failure_is_tagged_with_ordinal_and_partial_count() {
        let (out, result) = run(&mut (
            text("ab"),
            text("c"),
            from_fn(|_| Err(Error::message("boom"))),
            text("never written"),
        ));

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "writing stream chunk 2: boom");
        assert_eq!(err.bytes_written(), 3);
        assert_eq!(out, b"abc");
    }

    #[test]
    fn failing_chunk_contributes_no_bytes_to_the_count() {
        // the chunk writes before failing; those bytes reach the sink but
        // are excluded from the reported total
        let (out, result) = run(&mut (
            text("ab"),
            from_fn(|sink| {
                sink.write_str("xy")?;
                Err(Error::message("late failure"))
            }),
        ));

        let err = result.unwrap_err();
        assert_eq!(err.bytes_written(), 2);
        assert_eq!(out, b"abxy");
    }

    #[test]
    fn vec_and_array_lists_run_in_order() {
        let (out, result) = run(&mut vec![text("a"), text("b")]);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, b"ab");

        let (out, result) = run(&mut [byte(b'x'), byte(b'y')]);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, b"xy");
    }
}

mod combinator_tests {
    use super::*;

    #[test]
    fn all_composes_sequentially() {
        let (out, result) = run(&mut (all((text("AAA"), text("BBB"), text("CCC"))),));
        assert_eq!(result.unwrap(), 9);
        assert_eq!(out, b"AAABBBCCC");
    }

    #[test]
    fn nested_failures_nest_their_tags() {
        let (_, result) = run(&mut (
            text("a"),
            all((from_fn(|_| Err(Error::message("boom"))),)),
        ));

        assert_eq!(
            result.unwrap_err().to_string(),
            "writing stream chunk 1: writing stream chunk 0: boom"
        );
    }

    #[test]
    fn join_of_nothing_is_a_nop() {
        let (out, result) = run(&mut (join(", ", Vec::<Text>::new()),));
        assert_eq!(result.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn join_of_one_is_that_chunk() {
        let (out, result) = run(&mut (join(", ", vec![text("solo")]),));
        assert_eq!(result.unwrap(), 4);
        assert_eq!(out, b"solo");
    }

    #[test]
    fn join_of_one_does_not_add_a_tag_level() {
        let failing: Vec<FromFn<_>> = vec![from_fn(|_| Err(Error::message("boom")))];
        let (_, result) = run(&mut (join(", ", failing),));
        // only the enclosing list tags; the join itself is transparent
        assert_eq!(
            result.unwrap_err().to_string(),
            "writing stream chunk 0: boom"
        );
    }

    #[test]
    fn join_with_empty_separator_is_sequential() {
        let (joined, _) = run(&mut (join("", vec![text("a"), text("b"), text("c")]),));
        let (sequential, _) = run(&mut (all((text("a"), text("b"), text("c"))),));
        assert_eq!(joined, sequential);
    }

    #[test]
    fn join_interleaves_separator() {
        let (out, result) = run(&mut (join(", ", vec![text("a"), text("b"), text("c")]),));
        assert_eq!(result.unwrap(), 7);
        assert_eq!(out, b"a, b, c");
    }

    #[test]
    fn join_counts_separators_as_chunks_when_tagging() {
        let chunks = vec![
            text("a").boxed(),
            from_fn(|_| Err(Error::message("boom"))).boxed(),
        ];
        let (_, result) = run(&mut (join("-", chunks),));
        // layout inside the join: [a, separator, failing] -> ordinal 2
        assert_eq!(
            result.unwrap_err().to_string(),
            "writing stream chunk 0: writing stream chunk 2: boom"
        );
    }

    #[test]
    fn repeat_n_three_bangs() {
        let (out, result) = run(&mut (repeat_n(3, byte(b'!')),));
        assert_eq!(result.unwrap(), 3);
        assert_eq!(out, b"!!!");
    }

    #[test]
    fn repeat_n_zero_is_a_nop() {
        let (out, result) = run(&mut (repeat_n(0, text("never")),));
        assert_eq!(result.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn repeat_stops_cleanly_on_break() {
        let (out, result) = run(&mut (repeat(|i, sink| {
            if i < 2 {
                Ok(ControlFlow::Continue(sink.write_str("ZZ")? as u64))
            } else {
                // the stopping step may still write; its bytes count
                Ok(ControlFlow::Break(sink.write_str("!")? as u64))
            }
        }),));
        assert_eq!(result.unwrap(), 5);
        assert_eq!(out, b"ZZZZ!");
    }

    #[test]
    fn repeat_propagates_step_errors() {
        let (out, result) = run(&mut (repeat(|i, sink| {
            if i < 5 {
                Ok(ControlFlow::Continue(sink.write_str("ZZZ")? as u64))
            } else {
                Err(Error::message("test error"))
            }
        }),));

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "writing stream chunk 0: test error");
        assert_eq!(out.len(), 15);
    }
}

mod source_tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn reader_copies_and_drains_its_source() {
        let source: &[u8] = b"stream me";
        let mut chunk = reader(source);

        let mut out = Vec::new();
        assert_eq!(chunk.write_to(&mut out).unwrap(), 9);
        // the source was released; a second run writes nothing
        assert_eq!(chunk.write_to(&mut out).unwrap(), 0);
        assert_eq!(out, b"stream me");
    }

    #[test]
    fn file_copy_round_trip() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"ZZZ").unwrap();
        tmp.flush().unwrap();

        let (out, result) = run(&mut (text("--- "), file(tmp.path()), text(" ---")));
        assert_eq!(result.unwrap(), 11);
        assert_eq!(out, b"--- ZZZ ---");
    }

    #[test]
    fn missing_file_fails_with_the_open_error() {
        let (out, result) = run(&mut (file("this-file-does-not-exist"),));
        let err = result.unwrap_err();
        assert_eq!(err.bytes_written(), 0);
        assert!(matches!(
            err.kind(),
            ErrorKind::Chunk { index: 0, source } if matches!(source.kind(), ErrorKind::Io(_))
        ));
        assert!(out.is_empty());
    }
}
