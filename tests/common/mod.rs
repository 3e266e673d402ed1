//! Shared test fixtures and helper utilities.
//!
//! Provides signed tokens with known claims for use in the integration
//! tests. Tokens are real HS256 JWTs so the decoder is exercised on the
//! same shape the login endpoint returns.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// HMAC secret used to sign fixture tokens. Never checked by the decoder.
pub const SIGNING_SECRET: &str = "fixture-signing-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(SIGNING_SECRET.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// A token for an administrator named `alice`.
pub fn admin_token() -> String {
    create_hs256_token(&serde_json::json!({
        "sub": "alice",
        "roles": "ROLE_ADMIN",
        "iat": 1516239022
    }))
}

/// A token for a regular user named `carol`.
pub fn user_token() -> String {
    create_hs256_token(&serde_json::json!({
        "sub": "carol",
        "roles": "ROLE_USER",
        "iat": 1516239022
    }))
}

/// A token whose role claim carries no known marker.
pub fn unknown_role_token() -> String {
    create_hs256_token(&serde_json::json!({
        "sub": "bob",
        "roles": "SOMETHING_ELSE"
    }))
}

/// A three-part token whose payload segment is the given raw text.
pub fn token_with_raw_payload(payload: &str) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(payload)
    )
}
