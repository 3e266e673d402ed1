//! Domain error types for taskclient-core.
//!
//! All business-logic errors are defined here using `thiserror`.
//! The public decoding entry point swallows these into a default value;
//! they surface only through the fallible API and the CLI's strict mode.

use thiserror::Error;

/// Errors that can occur while reading tokens or error messages.
#[derive(Debug, Error)]
pub enum TaskClientError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode.
        segment: String,
    },

    /// Failed to parse decoded JSON content.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse.
        segment: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The payload is valid JSON but not an object.
    #[error("token payload is not a JSON object")]
    PayloadNotObject,

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No error message was provided via any input method.
    #[error("no message provided: pass a message, use --status, or pipe it through stdin")]
    NoMessageProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Reading from stdin failed.
    #[error("failed to read stdin: {reason}")]
    StdinReadError {
        /// Description of the read failure.
        reason: String,
    },
}
