//! Handler for the `claims` subcommand.
//!
//! Reads a login token and prints the subject and role it carries,
//! without verifying its signature. Supports reading the token from a
//! CLI argument, environment variable, or stdin.

use anyhow::Result;
use taskclient_core::{decode, try_decode};

use super::input::resolve_token;
use crate::cli::ClaimsArgs;
use crate::display::report;

/// Execute the `claims` subcommand with the given arguments.
pub fn execute(args: &ClaimsArgs) -> Result<()> {
    let token = resolve_token(args.token.as_ref(), args.token_env.as_deref())?;

    let claims = if args.strict {
        try_decode(&token)?
    } else {
        decode(&token)
    };

    println!("{}", report::render_claims(&claims, args.json));
    Ok(())
}
