//! `gitdoc-cli commit`: convert documents, stage everything, commit.

use super::Context;
use crate::Error;
use crate::convert::convert_all;
use crate::exec::ensure_supported;
use crate::git::Git;

/// Handles `gitdoc-cli commit`. `message` skips the prompt; `convert`
/// false skips document conversion.
///
/// # Errors
/// Conversion failures (at `on_failure = "error"`), git failures, or an
/// empty commit message.
pub fn cmd_commit(
    ctx: &mut Context<'_>,
    message: Option<&str>,
    convert: bool,
) -> Result<(), Error> {
    ensure_supported("commit")?;

    if convert {
        let converted = convert_all(ctx.runner, &ctx.config.convert)?;
        if !converted.is_empty() {
            crate::info!("converted {} documents", converted.len());
        }
    } else {
        crate::debug!("document conversion skipped");
    }

    let git = Git::new(ctx.runner);
    crate::debug!("running git add --all...");
    git.add_all()?;

    let message = match message {
        Some(m) => m.trim().to_string(),
        None => ctx.input.ask("enter the commit message:")?,
    };
    if message.is_empty() {
        return Err(Error::EmptyInput("commit message"));
    }

    crate::debug!("running git commit...");
    let output = git.commit(&message)?;
    crate::trace!("{}", output.trim_end());

    crate::debug!("documents converted and committed");
    Ok(())
}
