//! `gitdoc-cli state`: where the repo points, what is pending, which branch.

use super::Context;
use crate::Error;
use crate::git::Git;
use crate::log::Printer;
use serde::Serialize;

/// Snapshot of the working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoState {
    pub remote_url: String,
    /// One `git status --porcelain` line per entry.
    pub changes: Vec<String>,
    pub branch: String,
}

impl RepoState {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }

    /// Human-readable report.
    pub fn log(&self, printer: &Printer) {
        crate::info!(printer => "remote URL: {}", self.remote_url);
        if self.is_clean() {
            crate::info!(printer => "no pending changes");
        } else {
            crate::info!(printer => "pending changes:\n{}", self.changes.join("\n"));
        }
        crate::info!(printer => "current branch: {}", self.branch);
    }

    /// # Errors
    /// Serialization failure.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Handles `gitdoc-cli state`.
///
/// # Errors
/// Any of the three git queries failing (no `origin`, not a repository).
pub fn cmd_state(ctx: &Context<'_>) -> Result<RepoState, Error> {
    crate::debug!("collecting repository state...");
    let git = Git::new(ctx.runner);

    let remote_url = git.remote_url()?;
    let changes = git
        .status_porcelain()?
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    let branch = git.current_branch()?;

    Ok(RepoState {
        remote_url,
        changes,
        branch,
    })
}
