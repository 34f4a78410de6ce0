//! Session token encoding and decoding (HS256).
//!
//! The profile API and the external login system share a single symmetric
//! secret, so HS256 is sufficient here; there is no cross-service key
//! distribution to solve.

use crate::claims::Claims;
use crate::error::AuthError;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

/// Clock skew tolerance for exp validation, in seconds.
const LEEWAY_SECS: u64 = 60;

/// Encode claims into a signed HS256 token string.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(claims: &Claims, secret: &[u8]) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a session token.
///
/// Validates the signature and the `exp` claim (with a small leeway for
/// clock skew). Only HS256 tokens are accepted.
///
/// # Errors
///
/// - `AuthError::TokenExpired` when `exp` is in the past
/// - `AuthError::InvalidSignature` when the signature does not match
/// - `AuthError::InvalidToken` for anything else malformed
pub fn decode_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = LEEWAY_SECS;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::InvalidToken(e.to_string()),
        },
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_core::UserId;

    const SECRET: &[u8] = b"test-secret-for-token-tests";

    #[test]
    fn test_encode_decode_roundtrip() {
        let id = UserId::new();
        let claims = Claims::for_user(id, 3600);

        let token = encode_token(&claims, SECRET).unwrap();
        let decoded = decode_token(&token, SECRET).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id(), Some(id));
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let claims = Claims::for_user(UserId::new(), 3600);
        let token = encode_token(&claims, SECRET).unwrap();

        let err = decode_token(&token, b"a-different-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        // Expired well beyond the leeway window.
        let claims = Claims {
            sub: UserId::new().to_string(),
            iat: 1_000_000,
            exp: 1_000_060,
        };
        let token = encode_token(&claims, SECRET).unwrap();

        let err = decode_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_token("definitely.not.ajwt", SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
