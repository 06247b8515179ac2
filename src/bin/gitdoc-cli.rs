//! `gitdoc-cli` - git with automatic document conversion.
//!
//! Usage:
//!   gitdoc-cli init                     Install tools, set up git identity
//!   gitdoc-cli convert                  Convert doc/docx files to Markdown
//!   gitdoc-cli commit [-m <msg>]        Convert, stage everything, commit
//!   gitdoc-cli push [--remote <r>]      Push to the remote
//!   gitdoc-cli state [--json]           Show remote, pending changes, branch
//!
//! `--trace` adds time and source location to every line.

use clap::Parser;
use gitdoc::cli::commands::Context;
use gitdoc::cli::{Cli, init_logging, report_failure, run};
use gitdoc::config::Config;
use gitdoc::exec::SystemRunner;
use gitdoc::input::ConsoleInput;
use gitdoc::log;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Trace first, so config discovery itself can be traced
    if cli.trace {
        log::configure(|o| o.enable_trace = true);
    }

    let config = Config::load(cli.config.as_deref());
    init_logging(&cli, &config);

    let runner = SystemRunner;
    let mut input = ConsoleInput;
    let mut ctx = Context {
        config: &config,
        runner: &runner,
        input: &mut input,
    };

    match run(&cli, &mut ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&log::default_std(), cli.command.name(), &e);
            ExitCode::FAILURE
        }
    }
}
