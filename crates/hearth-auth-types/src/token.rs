//! JWT session-token issuing and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use hearth_domain::user::UserRole;

use crate::cookie::SESSION_TOKEN_EXP;

/// User identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: i32,
    pub role: UserRole,
    pub exp: u64,
}

/// Errors returned by token validation and issuing.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token encoding failed")]
    Encoding,
}

/// JWT claims payload.
///
/// `sub` is the user id in decimal, `role` the lowercase role string,
/// `exp` seconds since the UNIX epoch. Session lifetime is 7 days with no
/// refresh mechanism; callers log in again after expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed session token embedding `{sub, role, exp}`.
///
/// Returns the encoded token and its expiry timestamp.
pub fn issue_session_token(
    user_id: i32,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), AuthError> {
    let exp = now_secs() + SESSION_TOKEN_EXP;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        role: role.as_str().to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Encoding)?;
    Ok((token, exp))
}

/// Validate a session-token value, returning parsed identity.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`. The guard
/// calls this on every non-public request; any failure is treated the same
/// as a missing token.
pub fn validate_session_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| AuthError::Malformed)?;
    let role = UserRole::from_str_value(&data.claims.role).ok_or(AuthError::Malformed)?;

    Ok(TokenInfo {
        user_id,
        role,
        exp: data.claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn make_token(sub: &str, role: &str, exp: u64) -> String {
        let claims = SessionClaims {
            sub: sub.to_string(),
            role: role.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        // 1 hour from now
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600
    }

    #[test]
    fn should_round_trip_issued_token() {
        let (token, exp) = issue_session_token(7, UserRole::Admin, TEST_SECRET).unwrap();
        let info = validate_session_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, 7);
        assert_eq!(info.role, UserRole::Admin);
        assert_eq!(info.exp, exp);
    }

    #[test]
    fn should_reject_expired_token() {
        let token = make_token("1", "user", 1_000_000);
        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[test]
    fn should_reject_wrong_secret() {
        let token = make_token("1", "user", future_exp());
        let err = validate_session_token(&token, "wrong-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn should_reject_malformed_token() {
        let err = validate_session_token("not-a-jwt", TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Malformed));
    }

    #[test]
    fn should_reject_non_numeric_subject() {
        let token = make_token("abc", "user", future_exp());
        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Malformed));
    }

    #[test]
    fn should_reject_unknown_role_claim() {
        let token = make_token("1", "owner", future_exp());
        let err = validate_session_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, AuthError::Malformed));
    }
}
