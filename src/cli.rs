//! CLI argument definitions for taskclient.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `ClaimsArgs` implements a custom `Debug` that redacts the token so it
//! cannot leak through debug formatting, error chains, or logging.

use std::fmt;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// Inspect login tokens and classify API failures the way the
/// task-manager client does.
#[derive(Debug, Parser)]
#[command(name = "taskclient")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log decoding and classification steps to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the subject and role from a login token (signature is not verified).
    Claims(ClaimsArgs),

    /// Map a failure message or HTTP status to a user-facing category.
    Classify(ClassifyArgs),
}

/// Arguments for the `claims` subcommand.
#[derive(clap::Args)]
pub struct ClaimsArgs {
    /// The token to read. If omitted, reads from stdin.
    #[arg(value_parser = parse_zeroizing_string)]
    pub token: Option<Zeroizing<String>>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Fail with the decoding error instead of printing empty claims.
    #[arg(long)]
    pub strict: bool,

    /// Output JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for ClaimsArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimsArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("strict", &self.strict)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `classify` subcommand.
#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Raw failure message. If omitted and no --status is given, reads from stdin.
    #[arg(conflicts_with = "status")]
    pub message: Option<String>,

    /// HTTP status code of a failed response.
    #[arg(long, value_name = "CODE")]
    pub status: Option<u16>,

    /// Response body accompanying --status.
    #[arg(long, value_name = "TEXT", requires = "status")]
    pub body: Option<String>,

    /// Apply the login screen's pre-translation of statuses and exceptions.
    #[arg(long)]
    pub login: bool,

    /// Output JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
