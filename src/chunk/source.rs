//! Bulk-copy chunks: readable sources and disk files.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::chunk::Chunk;
use crate::error::Result;
use crate::sink::Sink;

/// Chunk copying everything from a readable source. Created by [`reader`].
pub struct Reader<R> {
    source: Option<R>,
}

impl<R> fmt::Debug for Reader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("drained", &self.source.is_none())
            .finish()
    }
}

/// A chunk that copies the whole of `source` into the sink.
///
/// The source is dropped - releasing whatever handle it holds - as soon as
/// the copy completes, whether it succeeded or failed. Running the chunk a
/// second time writes zero bytes.
pub fn reader<R: Read>(source: R) -> Reader<R> {
    Reader {
        source: Some(source),
    }
}

impl<R: Read> Chunk for Reader<R> {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        match self.source.take() {
            None => Ok(0),
            Some(mut src) => {
                let copied = sink.copy_from(&mut src);
                drop(src);
                Ok(copied?)
            }
        }
    }
}

/// Chunk copying a disk file's contents. Created by [`file`].
#[derive(Debug, Clone)]
pub struct FileCopy {
    path: PathBuf,
}

/// A chunk that copies the contents of the named file into the sink.
///
/// The file is opened when the chunk runs; an open failure is returned with
/// zero bytes written. The handle is released before the chunk returns,
/// even when the copy fails midway.
///
/// ```no_run
/// use spillway::prelude::*;
///
/// let mut out = Vec::new();
/// Stream::new(&mut out).write((text("--- "), file("notes.txt"), text(" ---")))?;
/// # Ok::<(), spillway::Error>(())
/// ```
pub fn file(path: impl Into<PathBuf>) -> FileCopy {
    FileCopy { path: path.into() }
}

impl Chunk for FileCopy {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        let mut fd = File::open(&self.path)?;
        let copied = sink.copy_from(&mut fd);
        drop(fd);
        Ok(copied?)
    }
}
