//! `gitdoc-cli init`: makes sure git and the converter are installed and
//! that git knows who the user is.

use super::Context;
use crate::Error;
use crate::exec::is_installed;
use crate::git::Git;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex"));

/// Handles `gitdoc-cli init`.
///
/// # Errors
/// A tool that is missing and cannot be installed, or an identity answer
/// that is empty or malformed.
pub fn cmd_init(ctx: &mut Context<'_>) -> Result<(), Error> {
    ensure_tool(ctx, "git")?;
    let converter = ctx.config.convert.converter.clone();
    ensure_tool(ctx, &converter)?;
    setup_identity(ctx)
}

/// Installs `program` through the configured installer unless `which`
/// already finds it.
///
/// # Errors
/// The installer failed, or no installer is configured.
pub fn ensure_tool(ctx: &Context<'_>, program: &str) -> Result<(), Error> {
    crate::info!("checking {program} installation...");
    if is_installed(ctx.runner, program) {
        crate::info!("{program} is installed");
        return Ok(());
    }

    crate::info!("{program} not found, trying to install it...");
    let Some((installer, lead)) = ctx.config.init.installer.split_first() else {
        return Err(Error::ProgramNotFound(program.to_string()));
    };
    let mut args: Vec<&str> = lead.iter().map(String::as_str).collect();
    args.push(program);

    ctx.runner.run(installer, &args)?;
    crate::info!("{program} installed");
    Ok(())
}

/// Checks `user.name` and `user.email`, asking for whichever is missing.
///
/// # Errors
/// Empty or invalid answers, or git refusing the new value.
pub fn setup_identity(ctx: &mut Context<'_>) -> Result<(), Error> {
    crate::info!("checking git user config...");
    ensure_identity(ctx, "user.name", "git user name", |_| Ok(()))?;
    ensure_identity(ctx, "user.email", "git email", validate_email)
}

fn ensure_identity(
    ctx: &mut Context<'_>,
    key: &str,
    label: &'static str,
    validate: fn(&str) -> Result<(), Error>,
) -> Result<(), Error> {
    let git = Git::new(ctx.runner);
    if let Some(value) = git.config_get(key) {
        crate::info!("{key} is set: {value}");
        return Ok(());
    }

    crate::warn!("{key} is not set");
    let answer = ctx.input.ask(&format!("enter your {label}:"))?;
    if answer.is_empty() {
        return Err(Error::EmptyInput(label));
    }
    validate(&answer)?;

    git.config_set(key, &answer)?;
    crate::info!("{key} set");
    Ok(())
}

/// Rough `local@domain.tld` shape check.
///
/// # Errors
/// [`Error::InvalidInput`] when the address does not look like one.
pub fn validate_email(email: &str) -> Result<(), Error> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("not an email address: {email}")))
    }
}
