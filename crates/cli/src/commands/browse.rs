//! `browse` command: interactive shell over the storefront.

use std::io::Write;

use shopfront_storefront::state::LOADING_MESSAGE;

use super::{CliError, Context};
use crate::shell;

/// Fetch the catalog, then read commands from stdin until `quit` or EOF.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run(ctx: &mut Context, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{LOADING_MESSAGE}")?;
    ctx.ensure_catalog().await;

    let stdin = std::io::stdin();
    shell::run(&mut ctx.storefront, stdin.lock(), out)
}
