#![forbid(unsafe_code)]

//! `gitdoc` - git with automatic doc/docx to Markdown conversion.
//!
//! The interesting part is [`log`], a small colored printer with
//! immutable `with_*` configuration:
//!
//! ```
//! use gitdoc::log::{Color, Printer};
//!
//! let printer = Printer::new().with_prefix("step1").with_disable_color();
//! printer.info(format_args!("converted {} files", 2));
//!
//! let err = printer.new_errorf(format_args!("err:{}", 123));
//! assert_eq!(err.to_string(), "[step1]err:123");
//!
//! assert_eq!(printer.color(Color::Green, format_args!("ok")), "ok");
//! ```
//!
//! The rest wires that printer to a handful of external programs:
//! - [`scan`] finds documents, [`convert`] turns them into Markdown
//! - [`git`] and [`exec`] run git and friends
//! - [`cli`] holds the `gitdoc-cli` subcommands
//!
//! # Features
//!
//! - `cli` (default): Enables the command-line interface

pub mod config;
pub mod convert;
pub mod error;
pub mod exec;
pub mod git;
pub mod input;
pub mod log;
pub mod scan;
pub mod util;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use log::{AlarmLevel, Color, Level, MessageError, Options, Printer};
