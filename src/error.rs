//! Unified error type for gitdoc operations.

use crate::log::MessageError;
use std::path::PathBuf;

/// Error type for gitdoc operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Walking the working tree failed.
    Walk(walkdir::Error),
    /// JSON serialization error.
    Json(serde_json::Error),
    /// An external program ran and exited unsuccessfully.
    Command {
        command: String,
        status: Option<i32>,
        output: String,
    },
    /// An external program could not be found on `PATH`.
    ProgramNotFound(String),
    /// The command does not run on this platform.
    Unsupported(String),
    /// A required answer was left empty.
    EmptyInput(&'static str),
    /// Input was given but rejected.
    InvalidInput(String),
    /// A document could not be converted. `convert_all` reports it through
    /// `alarm` before returning it.
    Convert { path: PathBuf, source: Box<Self> },
    /// Raised through the printer (`alarm`, `new_errorf`).
    Message(MessageError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Walk(e) => write!(f, "scan failed: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Command {
                command,
                status,
                output,
            } => {
                match status {
                    Some(code) => write!(f, "`{command}` exited with status {code}")?,
                    None => write!(f, "`{command}` was terminated by a signal")?,
                }
                let output = output.trim();
                if !output.is_empty() {
                    write!(f, ", output: {output}")?;
                }
                Ok(())
            }
            Self::ProgramNotFound(p) => write!(f, "program not found: {p}"),
            Self::Unsupported(cmd) => write!(f, "`{cmd}` is not supported on this platform"),
            Self::EmptyInput(what) => write!(f, "{what} must not be empty"),
            Self::InvalidInput(s) => write!(f, "invalid input: {s}"),
            Self::Convert { path, source } => {
                write!(f, "converting {} failed: {source}", path.display())
            }
            Self::Message(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Walk(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Convert { source, .. } => Some(source.as_ref()),
            Self::Message(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        Self::Walk(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MessageError> for Error {
    fn from(e: MessageError) -> Self {
        Self::Message(e)
    }
}
