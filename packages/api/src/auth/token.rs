//! # Bearer token claims
//!
//! The session token is a JWT. The profile screen never verifies its signature
//! (the server does that on every request); it only reads the payload segment to
//! recover who is signed in when the cached user record is missing, and to check
//! the `exp` claim.
//!
//! Claim names differ between backends, so [`TokenClaims`] is built by picking
//! the first present key from a list rather than by strict deserialization:
//!
//! | Field | Claim keys, in order |
//! |-------|----------------------|
//! | `id` | `id`, `userId`, `user_id`, `sub` |
//! | `name` | `name`, `username` |
//! | `email` | `email` |
//! | `photo` | `photo`, `photoUrl`, `picture` |
//! | `exp` | `exp` |

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

/// Partial user claims embedded in a bearer token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaims {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT. Returns `None` for anything that is
    /// not three dot-separated segments with a base64url JSON object in the middle.
    pub fn decode(token: &str) -> Option<Self> {
        let token = token.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token);

        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (segments.next(), segments.next(), segments.next(), segments.next())
        else {
            return None;
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        let value: Value = serde_json::from_slice(&bytes).ok()?;
        value.as_object().map(Self::from_claims)
    }

    fn from_claims(claims: &Map<String, Value>) -> Self {
        Self {
            id: first_string(claims, &["id", "userId", "user_id", "sub"]),
            name: first_string(claims, &["name", "username"]),
            email: first_string(claims, &["email"]),
            photo: first_string(claims, &["photo", "photoUrl", "picture"]),
            exp: claims.get("exp").and_then(Value::as_i64),
        }
    }

    /// Whether the token has expired at `now` (seconds since epoch).
    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }
}

/// First non-empty string (or number, stringified) among `keys`.
fn first_string(claims: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match claims.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
pub(crate) fn make_token(payload: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}
