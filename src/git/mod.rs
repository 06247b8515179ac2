//! The handful of git invocations gitdoc-cli needs.

use crate::Error;
use crate::exec::CommandRunner;

/// Git commands run through a [`CommandRunner`], so tests can script them.
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Git<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    fn git(&self, args: &[&str]) -> Result<String, Error> {
        self.runner.run("git", args)
    }

    /// `git add --all`
    ///
    /// # Errors
    /// Propagates runner failures.
    pub fn add_all(&self) -> Result<(), Error> {
        self.git(&["add", "--all"]).map(|_| ())
    }

    /// `git commit -m <message>`
    ///
    /// # Errors
    /// Propagates runner failures, including "nothing to commit".
    pub fn commit(&self, message: &str) -> Result<String, Error> {
        self.git(&["commit", "-m", message])
    }

    /// `git push [remote [branch]]`. An empty remote leaves the target to git;
    /// the branch is ignored without a remote.
    ///
    /// # Errors
    /// Propagates runner failures.
    pub fn push(&self, remote: &str, branch: &str) -> Result<String, Error> {
        let mut args = vec!["push"];
        if !remote.is_empty() {
            args.push(remote);
            if !branch.is_empty() {
                args.push(branch);
            }
        }
        self.git(&args)
    }

    /// URL of `origin`.
    ///
    /// # Errors
    /// Fails when there is no `origin` remote.
    pub fn remote_url(&self) -> Result<String, Error> {
        self.git(&["config", "--get", "remote.origin.url"])
            .map(|s| s.trim().to_string())
    }

    /// Raw `git status --porcelain` output; empty when the tree is clean.
    ///
    /// # Errors
    /// Propagates runner failures.
    pub fn status_porcelain(&self) -> Result<String, Error> {
        self.git(&["status", "--porcelain"])
            .map(|s| s.trim_end().to_string())
    }

    /// # Errors
    /// Propagates runner failures.
    pub fn current_branch(&self) -> Result<String, Error> {
        self.git(&["branch", "--show-current"])
            .map(|s| s.trim().to_string())
    }

    /// Global config value, `None` when unset or blank.
    #[must_use]
    pub fn config_get(&self, key: &str) -> Option<String> {
        self.git(&["config", "--global", key])
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// # Errors
    /// Propagates runner failures.
    pub fn config_set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.git(&["config", "--global", key, value]).map(|_| ())
    }
}
