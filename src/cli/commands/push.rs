//! `gitdoc-cli push`.

use super::Context;
use crate::Error;
use crate::git::Git;
use crate::util::get_or_default;

/// Handles `gitdoc-cli push`. Empty `remote`/`branch` fall back to the
/// `[git]` config section, and from there to git's own defaults.
///
/// # Errors
/// Whatever `git push` reports.
pub fn cmd_push(ctx: &Context<'_>, remote: &str, branch: &str) -> Result<String, Error> {
    let remote = get_or_default(remote.to_string(), ctx.config.git.remote.clone());
    let branch = get_or_default(branch.to_string(), ctx.config.git.branch.clone());

    crate::debug!("running git push...");
    let output = Git::new(ctx.runner).push(&remote, &branch)?;

    crate::info!("git push succeeded");
    crate::debug!("git push output: {}", output.trim_end());
    Ok(output)
}
