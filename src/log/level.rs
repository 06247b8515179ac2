//! Emission levels and the names `alarm` dispatches on.

use super::color::Color;
use std::fmt;

/// Every emission method maps to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Only visible when trace is enabled on the printer.
    Trace,
    /// Checks that passed, progress steps.
    Debug,
    /// Changes the tool made (files converted, config written).
    Info,
    /// Checks that failed but did not stop the command.
    Warn,
    /// Failures.
    Error,
    /// Uncolored output that is always shown.
    Normal,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Normal => "normal",
        }
    }

    /// Fixed level-to-color mapping. Consumers may rely on it.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => Color::Green,
            Self::Info => Color::Blue,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
            Self::Trace | Self::Normal => Color::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of levels `alarm` can raise. Anything it does not
/// recognize is treated as [`AlarmLevel::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlarmLevel {
    #[default]
    Info,
    Warn,
    Debug,
    Error,
}

impl AlarmLevel {
    /// Lenient parse with the Info fallback. Matching is case-insensitive so
    /// both `"Warn"` and `"warn"` from a config file work.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Info => Level::Info,
            Self::Warn => Level::Warn,
            Self::Debug => Level::Debug,
            Self::Error => Level::Error,
        }
    }
}

impl From<&str> for AlarmLevel {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for AlarmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.level().fmt(f)
    }
}
