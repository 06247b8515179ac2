//! `gitdoc-cli convert`: conversion without committing.

use super::Context;
use crate::Error;
use crate::convert::{Conversion, convert_all};
use crate::log::{self, Color};

/// Handles `gitdoc-cli convert`.
///
/// # Errors
/// Scan failures, and conversion failures at `on_failure = "error"`.
pub fn cmd_convert(ctx: &Context<'_>) -> Result<Vec<Conversion>, Error> {
    let converted = convert_all(ctx.runner, &ctx.config.convert)?;
    if converted.is_empty() {
        return Ok(converted);
    }

    let targets: Vec<String> = converted
        .iter()
        .map(|c| c.target.display().to_string())
        .collect();
    crate::info!("converted {} documents:", converted.len());
    crate::normal!("{}", log::strings_join(Color::Green, &targets, "\n"));
    Ok(converted)
}
