//! Subprocess output chunk.
//!
//! [`command`] builds a chunk that runs an external program and streams its
//! stdout into the sink. Stderr is drained on a helper thread into a bounded
//! buffer; when the process fails, the first 2048 bytes of that output
//! (cut back to a valid UTF-8 boundary and whitespace-trimmed) become the
//! error message. A [`CancelToken`] can be attached to terminate the process
//! early from another thread.
//!
//! Error precedence is deliberate: if the sink fails while the output is
//! being copied, the stdout pipe is closed, the process is reaped, and the
//! sink error is returned - a simultaneous non-zero exit is not reported.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{Child, ChildStderr, Command as StdCommand, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use crate::chunk::Chunk;
use crate::error::{Error, Result};
use crate::sink::Sink;

/// How much of the child's stderr is kept for error reporting.
const STDERR_LIMIT: usize = 2048;

/// A chunk that copies a subprocess's stdout into the sink.
///
/// ```no_run
/// use spillway::prelude::*;
///
/// let mut out = Vec::new();
/// Stream::new(&mut out).write((command("echo").arg("hello"),))?;
/// # Ok::<(), spillway::Error>(())
/// ```
pub fn command(program: impl AsRef<OsStr>) -> Cmd {
    let program = program.as_ref();
    Cmd {
        program: program.to_string_lossy().into_owned(),
        command: StdCommand::new(program),
        cancel: None,
    }
}

/// Subprocess chunk builder. Created by [`command`].
#[derive(Debug)]
pub struct Cmd {
    program: String,
    command: StdCommand,
    cancel: Option<CancelToken>,
}

impl Cmd {
    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.command.arg(arg);
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command.args(args);
        self
    }

    /// Attach a cancellation token; triggering it kills the process.
    pub fn cancel_on(mut self, token: &CancelToken) -> Self {
        self.cancel = Some(token.clone());
        self
    }
}

impl Chunk for Cmd {
    fn write_to(&mut self, sink: &mut dyn Sink) -> Result<u64> {
        self.command.stdout(Stdio::piped()).stderr(Stdio::piped());
        let mut child = self.command.spawn()?;

        let (mut stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
            (Some(out), Some(err)) => (out, err),
            _ => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(io::Error::other("failed to capture child pipes").into());
            }
        };

        // the child may block writing stderr if nobody reads it
        let excerpt = thread::spawn(move || drain_stderr(stderr));

        let mut local = None;
        match &self.cancel {
            Some(token) => token.register(child),
            None => local = Some(child),
        }

        let copied = sink.copy_from(&mut stdout);
        // closing the pipe unblocks the child if the copy stopped short
        drop(stdout);

        let reaped = match &self.cancel {
            Some(token) => token.release(),
            None => local,
        };
        let Some(mut child) = reaped else {
            // handle already taken elsewhere; nothing left to reap
            return copied.map_err(Error::from);
        };

        let n = match copied {
            Ok(n) => n,
            Err(copy_err) => {
                // usually a sink-side failure; reap the process so it does
                // not linger, and report the copy error over its exit status
                let wait_result = child.wait();
                let _ = excerpt.join();
                #[cfg(feature = "tracing")]
                if let Err(wait_err) = &wait_result {
                    tracing::debug!(program = %self.program, error = %wait_err, "discarding wait error after failed copy");
                }
                let _ = wait_result;
                return Err(copy_err.into());
            }
        };

        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => {
                let _ = excerpt.join();
                return Err(e.into());
            }
        };

        let message = excerpt
            .join()
            .map(StderrCapture::into_message)
            .unwrap_or_default();

        if !status.success() {
            if message.is_empty() {
                return Err(Error::exit(self.program.clone(), status));
            }
            return Err(Error::message(message));
        }

        Ok(n)
    }
}

fn drain_stderr(mut stderr: ChildStderr) -> StderrCapture {
    let mut capture = StderrCapture::new(STDERR_LIMIT);
    let _ = io::copy(&mut stderr, &mut capture);
    capture
}

/// Keeps the initial bytes of a stream, draining and discarding the rest.
struct StderrCapture {
    bytes: Vec<u8>,
    limit: usize,
}

impl StderrCapture {
    fn new(limit: usize) -> Self {
        StderrCapture {
            bytes: Vec::new(),
            limit,
        }
    }

    /// The captured prefix as text, cut back to a valid UTF-8 boundary
    /// (truncation may split a multi-byte sequence) and whitespace-trimmed.
    fn into_message(self) -> String {
        let valid = match std::str::from_utf8(&self.bytes) {
            Ok(s) => s,
            Err(e) => {
                let upto = e.valid_up_to();
                std::str::from_utf8(&self.bytes[..upto]).unwrap_or("")
            }
        };
        valid.trim().to_owned()
    }
}

impl Write for StderrCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit.saturating_sub(self.bytes.len());
        let keep = room.min(buf.len());
        self.bytes.extend_from_slice(&buf[..keep]);
        // claim the full write so the pipe keeps draining past the limit
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Cancellation handle for a [`command`] chunk.
///
/// Cloneable; triggering [`cancel`](CancelToken::cancel) from any thread
/// kills the subprocess currently registered against the token. The chunk
/// still reaps the process and reports its (now failed) exit as usual.
///
/// ```no_run
/// use spillway::prelude::*;
/// use spillway::CancelToken;
///
/// let token = CancelToken::new();
/// let stopper = token.clone();
/// std::thread::spawn(move || stopper.cancel());
///
/// let mut out = Vec::new();
/// let result = Stream::new(&mut out)
///     .write((command("sleep").arg("60").cancel_on(&token),));
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Mutex<TokenState>>,
}

#[derive(Debug, Default)]
struct TokenState {
    cancelled: bool,
    child: Option<Child>,
}

impl CancelToken {
    /// Create a token with nothing registered against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the registered subprocess, if any, and mark the token so a
    /// process registered later is killed on arrival.
    pub fn cancel(&self) {
        let mut state = self.lock();
        state.cancelled = true;
        if let Some(child) = state.child.as_mut() {
            let _ = child.kill();
        }
    }

    /// Whether [`cancel`](CancelToken::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    fn register(&self, mut child: Child) {
        let mut state = self.lock();
        if state.cancelled {
            let _ = child.kill();
        }
        state.child = Some(child);
    }

    fn release(&self) -> Option<Child> {
        self.lock().child.take()
    }

    fn lock(&self) -> MutexGuard<'_, TokenState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_only_the_prefix() {
        let mut capture = StderrCapture::new(4);
        capture.write_all(b"abcdef").unwrap();
        capture.write_all(b"gh").unwrap();
        assert_eq!(capture.into_message(), "abcd");
    }

    #[test]
    fn capture_trims_whitespace() {
        let mut capture = StderrCapture::new(64);
        capture.write_all(b"  oops \n").unwrap();
        assert_eq!(capture.into_message(), "oops");
    }

    #[test]
    fn capture_cuts_split_utf8_sequence() {
        // "Ыx" truncated after 3 bytes leaves half of a 2-byte sequence
        let mut capture = StderrCapture::new(3);
        capture.write_all("ЫЫ".as_bytes()).unwrap();
        assert_eq!(capture.into_message(), "Ы");
    }

    #[test]
    fn token_starts_clear() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.release().is_none());
    }
}
