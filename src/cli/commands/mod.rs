//! Each subcommand lives in its own file and returns a `Result`; the binary
//! turns errors into a red line and a failing exit code.

mod commit;
mod convert;
mod init;
mod push;
mod state;

pub use commit::cmd_commit;
pub use convert::cmd_convert;
pub use init::{cmd_init, ensure_tool, setup_identity, validate_email};
pub use push::cmd_push;
pub use state::{RepoState, cmd_state};

use crate::config::Config;
use crate::exec::CommandRunner;
use crate::input::Prompt;

/// What every command needs from the outside world.
pub struct Context<'a> {
    pub config: &'a Config,
    pub runner: &'a dyn CommandRunner,
    pub input: &'a mut dyn Prompt,
}
