//! The colored line printer.
//!
//! A [`Printer`] is a value: every `with_*` method hands back a modified copy
//! and leaves the receiver alone.

use super::color::{Color, colorize};
use super::error::MessageError;
use super::level::{AlarmLevel, Level};
use super::sink::{LineWriter, Sink, Stderr};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Starting value of [`Printer::call_depth`]. The depth is bookkeeping only:
/// the reported caller always comes from `#[track_caller]`.
pub const BASE_CALL_DEPTH: i32 = 3;

/// Per-printer settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// No ANSI escapes at all.
    pub disable_color: bool,
    /// Annotate lines with time and caller location, and let `trace` through.
    pub enable_trace: bool,
    /// Rendered as `[prefix]` in front of every message when non-empty.
    pub prefix: String,
    /// Leave the cursor on the same line after writing.
    pub enable_inline: bool,
}

impl Options {
    /// Baseline settings for this platform. The Windows console shows raw
    /// escape codes, so color starts out disabled there.
    #[must_use]
    pub fn platform_default() -> Self {
        Self {
            disable_color: cfg!(windows),
            ..Self::default()
        }
    }
}

/// Colored line printer. Cheap to clone; derive variants with `with_*`.
#[derive(Clone)]
pub struct Printer {
    options: Options,
    call_depth: i32,
    sink: Arc<dyn Sink>,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("options", &self.options)
            .field("call_depth", &self.call_depth)
            .finish_non_exhaustive()
    }
}

impl Printer {
    /// A stderr printer with platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(Options::platform_default())
    }

    #[must_use]
    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            call_depth: BASE_CALL_DEPTH,
            sink: Arc::new(Stderr),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn call_depth(&self) -> i32 {
        self.call_depth
    }

    /// Adds `delta` to the recorded depth. Output is unaffected: a wrapper
    /// keeps its caller's location only by being `#[track_caller]` itself.
    #[must_use]
    pub fn with_add_call_depth(&self, delta: i32) -> Self {
        let mut p = self.clone();
        p.call_depth = p.call_depth.saturating_add(delta);
        p
    }

    #[must_use]
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        let mut p = self.clone();
        p.options.prefix = prefix.into();
        p
    }

    #[must_use]
    pub fn with_enable_trace(&self) -> Self {
        let mut p = self.clone();
        p.options.enable_trace = true;
        p
    }

    #[must_use]
    pub fn with_disable_color(&self) -> Self {
        let mut p = self.clone();
        p.options.disable_color = true;
        p
    }

    #[must_use]
    pub fn with_inline(&self) -> Self {
        let mut p = self.clone();
        p.options.enable_inline = true;
        p
    }

    /// Swaps the whole option set, keeping depth and sink.
    #[must_use]
    pub fn with_options(&self, options: Options) -> Self {
        let mut p = self.clone();
        p.options = options;
        p
    }

    /// Redirects output. Stderr is the default.
    #[must_use]
    pub fn with_sink(&self, sink: Arc<dyn Sink>) -> Self {
        let mut p = self.clone();
        p.sink = sink;
        p
    }

    /// An error whose message carries this printer's prefix. Nothing is printed.
    #[must_use]
    pub fn new_errorf(&self, args: fmt::Arguments<'_>) -> MessageError {
        MessageError::new(self.prefixed(args))
    }

    /// Dropped unless trace is enabled.
    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        if self.options.enable_trace {
            self.output(Level::Trace, args);
        }
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Error, args);
    }

    #[track_caller]
    pub fn normal(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Normal, args);
    }

    /// Prints `message` at `level`. Error level also hands the message back
    /// as an error so the caller can abort with it.
    ///
    /// # Errors
    /// Returns the message when `level` resolves to [`AlarmLevel::Error`].
    #[track_caller]
    pub fn alarm(&self, message: &str, level: impl Into<AlarmLevel>) -> Result<(), MessageError> {
        let level = level.into();
        self.output(level.level(), format_args!("{message}"));
        match level {
            AlarmLevel::Error => Err(MessageError::new(message)),
            AlarmLevel::Info | AlarmLevel::Warn | AlarmLevel::Debug => Ok(()),
        }
    }

    /// The formatted text, colorized unless color is disabled. Not written.
    #[must_use]
    pub fn color(&self, color: Color, args: fmt::Arguments<'_>) -> String {
        self.paint(color, &args.to_string())
    }

    /// Colors each item on its own, then joins them with `sep`.
    #[must_use]
    pub fn strings_join<S: AsRef<str>>(&self, color: Color, items: &[S], sep: &str) -> String {
        items
            .iter()
            .map(|item| self.paint(color, item.as_ref()))
            .collect::<Vec<_>>()
            .join(sep)
    }

    pub fn flush(&self) {
        let _ = self.sink.flush();
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.options.disable_color {
            text.to_string()
        } else {
            colorize(text, color)
        }
    }

    fn prefixed(&self, args: fmt::Arguments<'_>) -> String {
        if self.options.prefix.is_empty() {
            args.to_string()
        } else {
            format!("[{}]{args}", self.options.prefix)
        }
    }

    /// Shared tail of every emission method. Write errors are dropped.
    #[track_caller]
    fn output(&self, level: Level, args: fmt::Arguments<'_>) {
        let msg = self.paint(level.color(), &self.prefixed(args));
        let writer = LineWriter::select(self.options.enable_trace, self.options.enable_inline);
        let _ = writer.output(self.sink.as_ref(), Location::caller(), &msg);
    }
}
