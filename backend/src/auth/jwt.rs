//! JWT token generation and validation
//!
//! Issues HS256 access tokens carrying the username as subject and verifies
//! them with pre-computed keys.

use super::AuthError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Signing algorithm for every token this service issues or accepts
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Identity recovered from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for issuing and verifying bearer tokens
///
/// The TTL is fixed when the service is constructed; callers cannot choose
/// a lifetime per token.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Issue a token for `subject`, valid for the configured TTL from now
    #[inline]
    pub fn issue_token(&self, subject: &str) -> Result<String, AuthError> {
        self.issue_token_at(subject, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_token_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, self.keys.encoding())
            .map_err(|e| AuthError::Internal(anyhow::anyhow!("Failed to sign token: {}", e)))
    }

    /// Verify signature, algorithm and expiry, and return the token's identity
    pub fn verify_token(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.decode_claims(token)?;

        if claims.sub.trim().is_empty() {
            return Err(AuthError::unauthorized("Token has no subject"));
        }

        Ok(Identity {
            username: claims.sub,
        })
    }

    /// Decode and validate a token, returning its raw claims
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, self.keys.decoding(), &Self::validation())
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::unauthorized("Token expired"),
                    ErrorKind::InvalidSignature => AuthError::unauthorized("Invalid token signature"),
                    ErrorKind::InvalidAlgorithm => AuthError::unauthorized("Unexpected token algorithm"),
                    ErrorKind::MissingRequiredClaim(claim) => {
                        AuthError::unauthorized(format!("Missing {} claim", claim))
                    }
                    _ => AuthError::unauthorized("Invalid token"),
                }
            })?;

        // jsonwebtoken still accepts exp == now
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::unauthorized("Token expired"));
        }

        Ok(claims)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 20 * 60)
    }

    fn assert_unauthorized(result: Result<Identity, AuthError>, expected: &str) {
        match result {
            Err(AuthError::Unauthorized(msg)) => assert_eq!(msg, expected),
            other => panic!("Expected unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_issue_and_verify_token() {
        let service = create_test_service();

        let token = service.issue_token("admin").unwrap();
        let identity = service.verify_token(&token).unwrap();

        assert_eq!(identity.username, "admin");
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_claims_carry_fixed_ttl() {
        let service = create_test_service();
        let now = Utc::now();

        let token = service.issue_token_at("admin", now).unwrap();
        let claims = service.decode_claims(&token).unwrap();

        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, claims.iat + 1200);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();
        let issued_at = Utc::now() - Duration::minutes(30);

        let token = service.issue_token_at("admin", issued_at).unwrap();

        assert_unauthorized(service.verify_token(&token), "Token expired");
    }

    #[test]
    fn test_token_expiring_now_rejected() {
        let service = TokenService::new("test-secret", 0);

        let token = service.issue_token_at("admin", Utc::now()).unwrap();

        assert_unauthorized(service.verify_token(&token), "Token expired");
    }

    #[test]
    fn test_token_with_wrong_secret_rejected() {
        let service = create_test_service();
        let other = TokenService::new("another-secret", 20 * 60);

        let token = other.issue_token("admin").unwrap();

        assert_unauthorized(service.verify_token(&token), "Invalid token signature");
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = create_test_service();
        let token = service.issue_token("admin").unwrap();

        let (head, signature) = token.rsplit_once('.').unwrap();
        let replacement = if signature.starts_with('A') { 'B' } else { 'A' };
        let tampered = format!("{}.{}{}", head, replacement, &signature[1..]);

        assert!(matches!(
            service.verify_token(&tampered),
            Err(AuthError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let service = create_test_service();
        let claims = Claims {
            sub: "admin".to_string(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_unauthorized(service.verify_token(&token), "Unexpected token algorithm");
    }

    #[test]
    fn test_missing_subject_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
        }

        let service = create_test_service();
        let token = encode(
            &Header::new(TOKEN_ALGORITHM),
            &NoSubject {
                exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AuthError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let service = create_test_service();
        let token = service.issue_token("").unwrap();

        assert_unauthorized(service.verify_token(&token), "Token has no subject");
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();

        assert_unauthorized(service.verify_token("invalid.token.here"), "Invalid token");
        assert_unauthorized(service.verify_token(""), "Invalid token");
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone(); // Should be cheap due to Arc

        let token = service.issue_token("seller").unwrap();
        assert_eq!(cloned.verify_token(&token).unwrap().username, "seller");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_issued_tokens_verify_to_their_subject(username in "[a-zA-Z0-9_.@-]{1,40}") {
            let service = create_test_service();
            let token = service.issue_token(&username).unwrap();
            let identity = service.verify_token(&token).unwrap();
            prop_assert_eq!(identity.username, username);
        }
    }
}
