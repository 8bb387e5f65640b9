use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// A bearer token accepted by [`validate`].
///
/// A credential is only ever handed out while `now < expiry`; an expired or
/// undecodable token never leaves the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Opaque bearer string presented on outbound engine requests
    pub token: String,

    /// Expiry decoded from the token's `exp` claim
    pub expiry: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Response body was not the expected JSON shape or had no string
    /// `access_token` field
    #[error("token response is malformed or missing an access token")]
    MalformedResponse,

    /// Token expiry claim could not be decoded, or lies in the past
    #[error("access token is expired")]
    Expired,
}

#[derive(Deserialize)]
struct Claims {
    exp: i64,
}

/// Validate a raw token endpoint response body.
///
/// Pure and synchronous: no retries, no side effects. The response must be a
/// JSON object with a string `access_token` whose JWT payload carries an
/// `exp` claim strictly in the future.
pub fn validate(raw: &[u8]) -> Result<Credential, ValidationError> {
    let body: serde_json::Value =
        serde_json::from_slice(raw).map_err(|_| ValidationError::MalformedResponse)?;

    let token = body
        .get("access_token")
        .and_then(|v| v.as_str())
        .ok_or(ValidationError::MalformedResponse)?;

    let expiry = decode_expiry(token).ok_or(ValidationError::Expired)?;
    if expiry <= Utc::now() {
        return Err(ValidationError::Expired);
    }

    Ok(Credential {
        token: token.to_string(),
        expiry,
    })
}

/// Decode the `exp` claim from a JWT's payload segment.
fn decode_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    segments.next()?; // signature segment must exist

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    DateTime::from_timestamp(claims.exp, 0)
}
