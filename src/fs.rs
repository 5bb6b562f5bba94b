//! Whole-file write helpers: truncating, appending, atomic, temporary.
//!
//! These wrap a [`Stream`] run over a buffered file sink. The atomic and
//! temporary variants stage into a `tmp-`-prefixed file guarded by
//! [`tempfile::NamedTempFile`], whose drop removes the staging file on every
//! early exit - an error return or a panic unwinding out of a chunk - so no
//! temporary is ever left behind and a panic continues unchanged.
//!
//! # Example
//!
//! ```no_run
//! use spillway::prelude::*;
//!
//! atomic_write_file("config.toml", 0o644, (
//!     text("[server]\n"),
//!     text("port = 8080\n"),
//! ))?;
//! # Ok::<(), spillway::Error>(())
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::chunk::ChunkList;
use crate::error::{Error, Result};
use crate::sink::BufSink;
use crate::stream::Stream;

/// Prefix of the staging files used by [`atomic_write_file`] and
/// [`write_temp_file`].
const TEMP_PREFIX: &str = "tmp-";

/// Write the chunks to the named file, truncating any existing content.
///
/// The file is created if absent. `mode` is the Unix permission mode for a
/// newly created file, always widened to include owner read/write; on
/// non-Unix platforms it is ignored.
pub fn write_file(path: impl AsRef<Path>, mode: u32, chunks: impl ChunkList) -> Result<u64> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);
    open_and_write(path.as_ref(), options, mode, chunks)
}

/// Append the chunks to the named file, creating it if absent.
///
/// Same permission policy as [`write_file`].
pub fn append_to_file(path: impl AsRef<Path>, mode: u32, chunks: impl ChunkList) -> Result<u64> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    open_and_write(path.as_ref(), options, mode, chunks)
}

fn open_and_write(
    path: &Path,
    #[allow(unused_mut)] mut options: OpenOptions,
    mode: u32,
    chunks: impl ChunkList,
) -> Result<u64> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode | 0o600);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let file = options.open(path)?;
    Stream::new(BufSink::new(file)).write(chunks)
}

/// Write the chunks to the named file atomically.
///
/// The data is staged into a uniquely named `tmp-*` file in the target's
/// own directory (keeping the final rename on one filesystem), then renamed
/// over the target only after every chunk, the flush, and the close have
/// succeeded. On any failure the staging file is removed and the target is
/// left untouched; a panic unwinding out of a chunk removes the staging
/// file and propagates unchanged.
pub fn atomic_write_file(path: impl AsRef<Path>, mode: u32, chunks: impl ChunkList) -> Result<u64> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = Builder::new().prefix(TEMP_PREFIX).tempfile_in(dir)?;
    let n = Stream::new(BufSink::new(staging.as_file_mut())).write(chunks)?;
    apply_mode(&staging, mode)?;

    staging.persist(path).map_err(|e| Error::from(e.error))?;
    Ok(n)
}

/// Write the chunks to a fresh `tmp-*` file in the default scratch
/// directory, returning its path and the byte count.
///
/// On any failure - or a panic unwinding out of a chunk - the temporary is
/// removed; an error result never names a file.
pub fn write_temp_file(chunks: impl ChunkList) -> Result<(PathBuf, u64)> {
    let mut staging = Builder::new().prefix(TEMP_PREFIX).tempfile()?;
    let n = Stream::new(BufSink::new(staging.as_file_mut())).write(chunks)?;

    let (_file, path) = staging.keep().map_err(|e| Error::from(e.error))?;
    Ok((path, n))
}

#[cfg(unix)]
fn apply_mode(staging: &NamedTempFile, mode: u32) -> Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    staging
        .as_file()
        .set_permissions(Permissions::from_mode(mode | 0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_staging: &NamedTempFile, _mode: u32) -> Result<()> {
    Ok(())
}
