//! Handler for the `classify` subcommand.
//!
//! Builds the same diagnostic line the client builds at a failure site
//! and prints the category it falls into.

use anyhow::Result;
use taskclient_core::ErrorSignal;
use tracing::debug;

use super::input::resolve_message;
use crate::cli::ClassifyArgs;
use crate::display::report;

/// Execute the `classify` subcommand with the given arguments.
pub fn execute(args: &ClassifyArgs) -> Result<()> {
    let signal = build_signal(args)?;
    debug!(signal = %signal, "classifying");

    let category = signal.classify();
    println!("{}", report::render_category(&category, args.json));
    Ok(())
}

fn build_signal(args: &ClassifyArgs) -> Result<ErrorSignal> {
    if let Some(status) = args.status {
        let body = args.body.as_deref();
        return Ok(if args.login {
            ErrorSignal::login_http(status, body)
        } else {
            ErrorSignal::http(status, body)
        });
    }

    let message = resolve_message(args.message.as_deref())?;
    Ok(if args.login {
        ErrorSignal::login_transport(Some(&message))
    } else {
        ErrorSignal::from(message)
    })
}
