//! Lightweight colored logging for command-line output. Not meant for
//! service logs: there is no level filtering and no file output, only one
//! line per call on stderr.
//!
//! ```
//! use gitdoc::log::{self, Color};
//!
//! gitdoc::info!("converted {} files", 3);
//! log::prefix("step1").debug(format_args!("ok"));
//! let joined = log::strings_join(Color::Green, &["a", "b"], ",");
//! assert!(joined.contains('a'));
//! ```

mod color;
mod error;
mod level;
mod printer;
pub mod sink;

pub use color::{Color, FORMAT_PRE, RESET, colorize};
pub use error::MessageError;
pub use level::{AlarmLevel, Level};
pub use printer::{BASE_CALL_DEPTH, Options, Printer};
pub use sink::{InlineWriter, LineWriter, MemorySink, Sink, Stderr};

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

static DEFAULT_STD: OnceLock<RwLock<Printer>> = OnceLock::new();

fn default_cell() -> &'static RwLock<Printer> {
    DEFAULT_STD.get_or_init(|| RwLock::new(Printer::new()))
}

/// A copy of the process-wide printer as it is right now.
#[must_use]
pub fn default_std() -> Printer {
    default_cell()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide printer.
pub fn set_default(printer: Printer) {
    *default_cell()
        .write()
        .unwrap_or_else(PoisonError::into_inner) = printer;
}

/// Edits the process-wide printer's options in place. Meant for startup,
/// e.g. turning trace on for `--trace`. Snapshots taken earlier through
/// [`default_std`] keep their old settings.
pub fn configure(f: impl FnOnce(&mut Options)) {
    let mut guard = default_cell()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let mut options = guard.options().clone();
    f(&mut options);
    *guard = guard.with_options(options);
}

/// Green.
#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).debug(args);
}

/// Blue.
#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).info(args);
}

/// Yellow.
#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).warn(args);
}

/// Red.
#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).error(args);
}

/// Uncolored, only with trace enabled.
#[track_caller]
pub fn trace(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).trace(args);
}

/// Uncolored.
#[track_caller]
pub fn normal(args: fmt::Arguments<'_>) {
    default_std().with_add_call_depth(1).normal(args);
}

/// The default printer with a prefix.
#[must_use]
pub fn prefix(prefix: impl Into<String>) -> Printer {
    default_std().with_prefix(prefix)
}

/// The default printer without trailing newlines, for prompts.
#[must_use]
pub fn inline() -> Printer {
    default_std().with_inline()
}

#[must_use]
pub fn strings_join<S: AsRef<str>>(color: Color, items: &[S], sep: &str) -> String {
    default_std().strings_join(color, items, sep)
}

#[must_use]
pub fn color(color: Color, args: fmt::Arguments<'_>) -> String {
    default_std().color(color, args)
}

/// See [`Printer::alarm`].
///
/// # Errors
/// Returns the message when `level` resolves to [`AlarmLevel::Error`].
#[track_caller]
pub fn alarm(message: &str, level: impl Into<AlarmLevel>) -> Result<(), MessageError> {
    default_std().with_add_call_depth(1).alarm(message, level)
}

/// `debug!("fmt", args..)` on the default printer, or
/// `debug!(printer => "fmt", args..)` on a specific one.
#[macro_export]
macro_rules! debug {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::debug(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::info(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::warn(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::error(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::error(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::trace(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::trace(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! normal {
    ($printer:expr => $($arg:tt)+) => {
        $crate::log::Printer::normal(&$printer, ::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::normal(::std::format_args!($($arg)+))
    };
}
