//! Token claim extraction.
//!
//! Splits a compact token into its three segments, base64url-decodes
//! the payload, and reads the `sub` and `roles` claims. The signature
//! is never checked: the result only drives which screens a user sees,
//! and the token itself came from the server's login response.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TaskClientError;

/// URL-safe alphabet that accepts payloads with or without `=` padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Role markers in precedence order. First contained marker wins.
const ROLE_MARKERS: [(&str, Role); 4] = [
    ("ROLE_ADMIN", Role::Admin),
    ("ADMIN", Role::Admin),
    ("ROLE_USER", Role::User),
    ("USER", Role::User),
];

/// The normalized role carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Sees every user's tasks.
    Admin,
    /// Sees only their own tasks.
    User,
    /// No recognizable marker in the `roles` claim.
    #[default]
    Unknown,
}

impl Role {
    /// Classify a free-text `roles` claim by ordered substring containment.
    ///
    /// Matching is case-sensitive: `"admin"` is not a marker.
    pub fn from_roles_claim(roles: &str) -> Self {
        ROLE_MARKERS
            .iter()
            .find(|(marker, _)| roles.contains(marker))
            .map_or(Role::Unknown, |&(_, role)| role)
    }

    /// Upper-case name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity data read from a token payload.
///
/// Implements a custom `Debug` that redacts `subject`.
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
pub struct Claims {
    /// The payload's `sub` claim, or empty.
    pub subject: String,
    /// Role derived from the payload's `roles` claim.
    pub role: Role,
}

impl Claims {
    /// The result for any token that cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the undecodable outcome.
    pub fn is_empty(&self) -> bool {
        self.subject.is_empty() && self.role == Role::Unknown
    }

    /// Role used to pick the task screen.
    ///
    /// A token without a recognizable role is routed as a regular user.
    pub fn routing_role(&self) -> Role {
        match self.role {
            Role::Unknown => Role::User,
            role => role,
        }
    }
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("subject", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Decode a token into its claims, never failing.
///
/// Any malformation (wrong segment count, bad base64url, bad JSON, a
/// non-object payload) yields [`Claims::empty`]. Use [`try_decode`] to
/// learn why a token was rejected.
pub fn decode(token: &str) -> Claims {
    match try_decode(token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "token could not be decoded, using empty claims");
            Claims::empty()
        }
    }
}

/// Decode a token into its claims.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts, if the
/// payload is not valid base64url, or if it is not a JSON object.
pub fn try_decode(token: &str) -> Result<Claims, TaskClientError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TaskClientError::InvalidTokenFormat);
    }

    let payload = decode_payload(parts[1])?;

    Ok(Claims {
        subject: string_claim(&payload, "sub"),
        role: Role::from_roles_claim(&string_claim(&payload, "roles")),
    })
}

/// Base64url-decode the payload segment and parse it as a JSON object.
fn decode_payload(encoded: &str) -> Result<Map<String, Value>, TaskClientError> {
    let bytes = URL_SAFE_LENIENT
        .decode(encoded)
        .map_err(|_| TaskClientError::Base64DecodeError {
            segment: "payload".to_string(),
        })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|e| TaskClientError::JsonParseError {
        segment: "payload".to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(TaskClientError::PayloadNotObject),
    }
}

/// Read a claim as text. Absent and `null` read as empty; non-string
/// values read as their compact JSON form.
fn string_claim(payload: &Map<String, Value>, key: &str) -> String {
    match payload.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
