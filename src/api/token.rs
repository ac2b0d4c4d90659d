//! Access token minting and verification (HS256).
//!
//! The payload carries the lab id as subject plus an expiry; nothing else.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the student's lab id.
    pub sub: String,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Mint a signed access token for the given lab id.
///
/// # Errors
/// Returns an error if encoding fails.
pub fn mint(
    secret: &SecretString,
    lab_id: &str,
    ttl_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expire = Utc::now() + Duration::minutes(ttl_minutes);

    let claims = Claims {
        sub: lab_id.to_string(),
        exp: expire.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
}

/// Verify signature and expiry, returning the claims.
///
/// # Errors
/// Returns an error for a bad signature, an expired token, a malformed
/// payload, or a payload without a subject.
pub fn verify(
    secret: &SecretString,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0; // No clock skew tolerance

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("not-a-real-secret".to_string())
    }

    #[test]
    fn round_trip_preserves_subject() {
        let token = mint(&secret(), "LAB-01", 60).expect("minting should succeed");
        let claims = verify(&secret(), &token).expect("verification should succeed");
        assert_eq!(claims.sub, "LAB-01");
    }

    #[test]
    fn expiry_is_now_plus_ttl() {
        let token = mint(&secret(), "LAB-01", 60).expect("minting should succeed");
        let claims = verify(&secret(), &token).expect("verification should succeed");
        let expected = (Utc::now() + Duration::minutes(60)).timestamp();
        // Allow a few seconds of test runtime between mint and assert.
        assert!((claims.exp - expected).abs() <= 5);
    }

    #[test]
    fn expired_token_rejected() {
        let token = mint(&secret(), "LAB-01", -5).expect("minting should succeed");
        assert!(verify(&secret(), &token).is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = mint(&secret(), "LAB-01", 60).expect("minting should succeed");
        let other = SecretString::from("a-different-secret".to_string());
        assert!(verify(&other, &token).is_err());
    }

    #[test]
    fn tampered_token_rejected() {
        let token = mint(&secret(), "LAB-01", 60).expect("minting should succeed");
        let mut tampered = token.into_bytes();
        let last = tampered.len() - 1;
        tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).expect("still utf-8");
        assert!(verify(&secret(), &tampered).is_err());
    }

    #[test]
    fn missing_subject_rejected() {
        // Hand-rolled payload without `sub`: signature is valid, shape is not.
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
        }

        let claims = NoSubject {
            exp: (Utc::now() + Duration::minutes(60)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(verify(&secret(), &token).is_err());
    }

    #[test]
    fn malformed_token_rejected() {
        assert!(verify(&secret(), "definitely.not.a-jwt").is_err());
    }
}
