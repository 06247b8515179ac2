//! Synchronous calls to external programs (`git`, the converter, the
//! package installer). Programs are started directly, never through a
//! shell, so arguments such as commit messages need no quoting.

use crate::Error;
use std::io;
use std::process::Command;

/// Runs one external program to completion.
///
/// The seam every command goes through, so tests can script git without
/// a repository.
pub trait CommandRunner {
    /// Runs `program` with `args` and returns stdout followed by stderr.
    ///
    /// # Errors
    /// [`Error::ProgramNotFound`] when the binary is missing,
    /// [`Error::Command`] on a non-zero exit, [`Error::Unsupported`] on
    /// platforms without the POSIX tooling these commands expect.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, Error>;
}

/// Runs programs on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, Error> {
        let line = command_line(program, args);
        if cfg!(windows) {
            return Err(Error::Unsupported(line));
        }

        crate::trace!("exec: {line}");
        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ProgramNotFound(program.to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(text)
        } else {
            Err(Error::Command {
                command: line,
                status: output.status.code(),
                output: text,
            })
        }
    }
}

/// Human-readable rendering of a command for logs and errors. Arguments
/// with whitespace are shown in double quotes.
#[must_use]
pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Rejects commands that depend on POSIX tooling when running on Windows.
///
/// # Errors
/// [`Error::Unsupported`] on Windows.
pub fn ensure_supported(command: &str) -> Result<(), Error> {
    if cfg!(windows) {
        return Err(Error::Unsupported(command.to_string()));
    }
    Ok(())
}

/// Whether `program` resolves on `PATH`, asked through `which`.
pub fn is_installed(runner: &dyn CommandRunner, program: &str) -> bool {
    runner.run("which", &[program]).is_ok()
}
