//! Where printed lines end up. Stderr in production, a capturing buffer in
//! tests and in embedders that want to collect diagnostics.

use chrono::Local;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// A destination for finished lines. Each emission is exactly one `write`
/// call carrying the whole line.
pub trait Sink: Send + Sync {
    /// Writes one rendered line.
    ///
    /// # Errors
    /// I/O errors from the underlying stream. The printer discards them.
    fn write(&self, line: &[u8]) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// The process's standard error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        // Holding the lock for the whole line keeps concurrent lines apart.
        io::stderr().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Keeps every write in memory, one entry per call.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write` calls seen so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Every write, lossily decoded as UTF-8.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    /// All writes concatenated, the way a terminal would show them.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines().concat()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        self.lock().push(line.to_vec());
        Ok(())
    }
}

/// Drops a trailing `\n` from each buffer written through it when `inline`
/// is set, so the next write continues on the same terminal line.
#[derive(Debug)]
pub struct InlineWriter<W> {
    inner: W,
    inline: bool,
}

impl<W: Write> InlineWriter<W> {
    pub const fn new(inner: W, inline: bool) -> Self {
        Self { inner, inline }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for InlineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let body = match buf.split_last() {
            Some((b'\n', rest)) if self.inline => rest,
            _ => buf,
        };
        // An emptied line still reaches the inner writer as one write.
        if body.is_empty() {
            let written = self.inner.write(body)?;
            debug_assert_eq!(written, 0);
        } else {
            self.inner.write_all(body)?;
        }
        // Report the whole buffer as consumed, otherwise `write_all` would
        // retry the newline we just dropped.
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Adapts a [`Sink`] to `io::Write`.
struct SinkWriter<'a>(&'a dyn Sink);

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// One of the four line shapes the printer can produce: with or without
/// the time/file:line annotation, with or without the trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWriter {
    annotate: bool,
    inline: bool,
}

const WRITERS: [LineWriter; 4] = [
    LineWriter {
        annotate: false,
        inline: false,
    },
    LineWriter {
        annotate: false,
        inline: true,
    },
    LineWriter {
        annotate: true,
        inline: false,
    },
    LineWriter {
        annotate: true,
        inline: true,
    },
];

impl LineWriter {
    /// Picks the writer for a (trace, inline) pair.
    #[must_use]
    pub const fn select(trace: bool, inline: bool) -> &'static Self {
        match (trace, inline) {
            (false, false) => &WRITERS[0],
            (false, true) => &WRITERS[1],
            (true, false) => &WRITERS[2],
            (true, true) => &WRITERS[3],
        }
    }

    #[must_use]
    pub const fn annotates(&self) -> bool {
        self.annotate
    }

    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.inline
    }

    /// Builds the full line, newline included. The inline variant strips it
    /// later, on the way out.
    #[must_use]
    pub fn render(&self, caller: &Location<'_>, msg: &str) -> String {
        let mut line = String::with_capacity(msg.len() + 32);
        if self.annotate {
            let file = Path::new(caller.file())
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or_else(|| caller.file());
            let _ = write!(
                line,
                "{} {}:{} ",
                Local::now().format("%H:%M:%S"),
                file,
                caller.line()
            );
        }
        line.push_str(msg);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Renders and writes one line to `sink`.
    ///
    /// # Errors
    /// Whatever the sink reports.
    pub fn output(&self, sink: &dyn Sink, caller: &Location<'_>, msg: &str) -> io::Result<()> {
        let line = self.render(caller, msg);
        let mut out = InlineWriter::new(SinkWriter(sink), self.inline);
        out.write_all(line.as_bytes())
    }
}
