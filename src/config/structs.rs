//! Configuration struct definitions.

use serde::Deserialize;

/// `[log]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Annotate output with time and source location.
    pub trace: bool,
    /// Colorize output. Ignored on Windows, where color is always off.
    pub color: bool,
    /// Tag put in brackets in front of every message.
    pub prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            trace: false,
            color: true,
            prefix: String::new(),
        }
    }
}

/// `[convert]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Converter binary, looked up on `PATH`.
    pub converter: String,
    /// Extensions to convert, with or without the leading dot.
    pub extensions: Vec<String>,
    /// Directory scanned for documents.
    pub root: String,
    /// Where the converter puts images pulled out of documents.
    pub extract_media: String,
    /// Alarm level for a failed conversion; `error` aborts the command.
    pub on_failure: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            converter: "pandoc".to_string(),
            extensions: vec!["doc".to_string(), "docx".to_string()],
            root: ".".to_string(),
            extract_media: ".".to_string(),
            on_failure: "error".to_string(),
        }
    }
}

/// `[git]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// Push target; empty means git's own default.
    pub remote: String,
    /// Branch to push; only used together with `remote`.
    pub branch: String,
}

/// `[init]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InitConfig {
    /// Program and leading arguments used to install a missing tool.
    pub installer: Vec<String>,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            installer: vec!["brew".to_string(), "install".to_string()],
        }
    }
}
