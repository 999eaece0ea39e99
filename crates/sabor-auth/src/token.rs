//! Best-effort JWT inspection.
//!
//! The backend issues JWTs but the client treats them as opaque; decoding the
//! `exp` claim is only used to tell the user when their session runs out.
//! Signatures are NOT verified.

use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};

use crate::error::AuthError;

/// Decode the `exp` claim of a JWT without validating it.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is not a three-part JWT, the
/// payload is not base64url JSON, or `exp` is missing.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let mut parts = jwt.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    };
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}

/// Whether `jwt` expires within `buffer_secs`. Undecodable tokens are not
/// considered expired; the backend has the final word.
#[must_use]
pub fn is_near_expiry(jwt: &str, buffer_secs: i64) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= Utc::now() + TimeDelta::seconds(buffer_secs))
}
