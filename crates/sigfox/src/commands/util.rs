//! Shared helpers for command handlers.

use sigfox_api::DetailOptions;

use crate::cli::{DetailArgs, GlobalOpts, ListArgs};
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Ask before a destructive call. Prints "Aborted." and returns `false`
/// when the user declines.
pub fn confirm_or_abort(message: &str, global: &GlobalOpts) -> Result<bool, CliError> {
    if confirm(message, global.yes)? {
        return Ok(true);
    }
    if !global.quiet {
        eprintln!("Aborted.");
    }
    Ok(false)
}

/// Map a dialoguer or terminal failure into `CliError`.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt(e.to_string())
}

/// `limit`/`offset` for a list call. With `--all` the limit becomes the
/// page size and the offset the starting point.
pub fn page(list: &ListArgs) -> (Option<u32>, Option<u32>) {
    (Some(list.limit), Some(list.offset))
}

pub fn detail_options(detail: DetailArgs) -> DetailOptions {
    DetailOptions {
        fields: detail.fields,
        authorizations: detail.authorizations,
    }
}

/// Fail with a usage error when an update carries no fields.
pub fn ensure_changes(is_empty: bool) -> Result<(), CliError> {
    if is_empty {
        Err(CliError::EmptyUpdate)
    } else {
        Ok(())
    }
}
