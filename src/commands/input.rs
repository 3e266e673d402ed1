//! Input resolution shared by the subcommands.
//!
//! Values come from, in order: the positional argument, an environment
//! variable named on the command line, then stdin (only when stdin is not
//! a terminal).

use std::io::{IsTerminal, Read};

use taskclient_core::error::TaskClientError;
use tracing::debug;
use zeroize::Zeroizing;

/// Resolve the token for the `claims` subcommand.
pub fn resolve_token(
    arg: Option<&Zeroizing<String>>,
    env_name: Option<&str>,
) -> Result<Zeroizing<String>, TaskClientError> {
    if let Some(token) = arg {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(TaskClientError::NoTokenProvided);
        }
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    let raw = match env_name {
        Some(name) => {
            debug!(var = name, "reading token from environment");
            read_env(name)?
        }
        None => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskClientError::NoTokenProvided);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

/// Resolve a raw failure message from the argument or stdin.
pub fn resolve_message(arg: Option<&str>) -> Result<String, TaskClientError> {
    let message = match arg {
        Some(m) => m.to_string(),
        None => read_stdin()?.trim_end_matches(['\r', '\n']).to_string(),
    };
    if message.is_empty() {
        return Err(TaskClientError::NoMessageProvided);
    }
    Ok(message)
}

/// Read an environment variable, rejecting names the OS cannot look up.
fn read_env(name: &str) -> Result<Zeroizing<String>, TaskClientError> {
    if !is_valid_env_name(name) {
        return Err(TaskClientError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| TaskClientError::EnvVarNotFound {
            name: name.to_string(),
        })
}

fn is_valid_env_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

fn read_stdin() -> Result<Zeroizing<String>, TaskClientError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(Zeroizing::new(String::new()));
    }
    let mut buf = Zeroizing::new(String::new());
    stdin
        .read_to_string(&mut buf)
        .map_err(|e| TaskClientError::StdinReadError {
            reason: e.to_string(),
        })?;
    Ok(buf)
}
