//! CLI module for gitdoc-cli.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::Error;
use crate::config::Config;
use crate::log::{self, Printer};
use clap::{Parser, Subcommand};
use commands::{Context, cmd_commit, cmd_convert, cmd_init, cmd_push, cmd_state};
use std::path::PathBuf;

/// gitdoc-cli - git with automatic doc/docx to Markdown conversion.
#[derive(Debug, Parser)]
#[command(
    name = "gitdoc-cli",
    version,
    about = "Git helper that converts doc/docx files to Markdown before every commit"
)]
pub struct Cli {
    /// Print trace output: time and source location on every line
    #[arg(long, global = true)]
    pub trace: bool,
    /// Config file to use instead of .gitdoc-cli.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install git and the converter if missing, set up git identity.
    Init,
    /// Convert documents to Markdown without committing.
    Convert,
    /// Convert documents, stage everything and commit.
    Commit {
        /// Commit message; prompted for when omitted
        #[arg(short, long)]
        message: Option<String>,
        /// Commit without converting documents first
        #[arg(long)]
        no_convert: bool,
    },
    /// Push committed changes to the remote.
    Push {
        /// Remote to push to (defaults to [git].remote, then git's default)
        #[arg(long, default_value = "")]
        remote: String,
        /// Branch to push (defaults to [git].branch)
        #[arg(long, default_value = "")]
        branch: String,
    },
    /// Show the remote URL, pending changes and current branch.
    State {
        /// Print the state as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Convert => "convert",
            Self::Commit { .. } => "commit",
            Self::Push { .. } => "push",
            Self::State { .. } => "state",
        }
    }
}

/// Applies `[log]` settings to the default printer. `--trace` wins over
/// the config file.
pub fn init_logging(cli: &Cli, config: &Config) {
    let mut options = config.printer_options();
    options.enable_trace |= cli.trace;
    log::configure(|o| *o = options);
}

/// Prints the error a command ended with. Conversion failures have already
/// been shown by `alarm` and are not printed a second time.
pub fn report_failure(printer: &Printer, command: &str, err: &Error) {
    if matches!(err, Error::Convert { .. }) {
        return;
    }
    crate::error!(printer => "{command} failed: {err}");
}

/// Dispatches the parsed command.
///
/// # Errors
/// Whatever the command reports.
pub fn run(cli: &Cli, ctx: &mut Context<'_>) -> Result<(), Error> {
    match &cli.command {
        Command::Init => cmd_init(ctx),
        Command::Convert => cmd_convert(ctx).map(|_| ()),
        Command::Commit {
            message,
            no_convert,
        } => cmd_commit(ctx, message.as_deref(), !no_convert),
        Command::Push { remote, branch } => cmd_push(ctx, remote, branch).map(|_| ()),
        Command::State { json } => {
            let state = cmd_state(ctx)?;
            if *json {
                println!("{}", state.to_json()?);
            } else {
                state.log(&log::default_std());
            }
            Ok(())
        }
    }
}
