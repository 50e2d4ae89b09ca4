//! Unverified access-token decoding.
//!
//! The client reads the token payload for display and routing only;
//! signature verification is the backend's job.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use serde::Deserialize;

/// Claims the platform embeds in its access tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Whether the embedded expiry lies in the past. Tokens without an
    /// expiry never expire client-side.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() > exp,
            None => false,
        }
    }
}

/// Decodes the payload segment of a JWT without verifying the signature.
/// Total: any malformed input yields `None`, never an error or panic.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&raw).ok()
}

#[cfg(test)]
pub(crate) mod test_support {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    /// Builds a structurally valid, unsigned JWT for tests.
    pub fn make_token(sub: &str, email: &str, is_admin: bool, exp: Option<i64>) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = match exp {
            Some(exp) => format!(
                r#"{{"sub":"{sub}","email":"{email}","is_admin":{is_admin},"exp":{exp}}}"#
            ),
            None => format!(r#"{{"sub":"{sub}","email":"{email}","is_admin":{is_admin}}}"#),
        };
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{header}.{payload}.sig")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::make_token;
    use super::*;

    #[test]
    fn decodes_well_formed_token() {
        let token = make_token("user-1", "user@example.com", true, Some(4102444800));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
        assert!(claims.is_admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        for token in ["", "garbage", "only-one-part.", "a.!!!not-base64!!!.c"] {
            assert!(decode_claims(token).is_none(), "token {token:?}");
        }
        // valid base64 but not JSON
        let not_json = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"hello");
        assert!(decode_claims(&format!("h.{not_json}.s")).is_none());
    }

    #[test]
    fn past_expiry_is_detected() {
        let token = make_token("user-1", "user@example.com", false, Some(1));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn missing_expiry_never_expires() {
        let token = make_token("user-1", "user@example.com", false, None);
        assert!(!decode_claims(&token).unwrap().is_expired());
    }
}
